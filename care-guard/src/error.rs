//! Error types for the care-guard library.
//!
//! A failed field validation is never an error: it is reported through
//! [`ValidationResult`](crate::core::ValidationResult). The variants here
//! cover the surrounding machinery (loading configuration and directory
//! tables, running a submission) and are represented by [`CareError`].

use thiserror::Error;

/// The main error type for the care-guard library.
#[derive(Error, Debug)]
pub enum CareError {
    /// Error related to configuration values or files.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error when parsing user-provided data.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by a form submitter.
    #[error("Submission of '{form}' failed: {message}")]
    Submission {
        /// Name of the form being submitted
        form: String,
        /// Detailed error message
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error when a form name does not match any known schema.
    #[error("Unknown form '{0}'")]
    UnknownForm(String),

    /// Generic internal error for unexpected conditions.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, CareError>`.
pub type Result<T> = std::result::Result<T, CareError>;

impl CareError {
    /// Creates a new submission error.
    pub fn submission(form: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Submission {
            form: form.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new submission error with a source error.
    pub fn submission_with_source(
        form: impl Into<String>,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Submission {
            form: form.into(),
            message: message.into(),
            source: Some(source),
        }
    }
}

/// Extension trait for adding context to errors.
pub trait ErrorContext<T> {
    /// Adds context to an error.
    fn context(self, msg: &str) -> Result<T>;

    /// Adds context with a lazy message.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CareError>,
{
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| wrap(msg, e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap(&f(), e.into()))
    }
}

fn wrap(msg: &str, base: CareError) -> CareError {
    match base {
        CareError::Configuration(inner) => CareError::Configuration(format!("{msg}: {inner}")),
        CareError::Internal(inner) => CareError::Internal(format!("{msg}: {inner}")),
        other => CareError::Internal(format!("{msg}: {other}")),
    }
}
