//! care-validate
//!
//! Runs the site's form validation from the command line: check single
//! values, format phone numbers, list doctors, and push a JSON form input
//! through a simulated submission.

use anyhow::{bail, Context, Result};
use care_guard::config::SiteConfig;
use care_guard::core::{FieldValidator, ValidationRuleSet};
use care_guard::directory::{booking_directory, staff_directory, DoctorDirectory};
use care_guard::formatting::format_phone_digits;
use care_guard::forms::{FormInput, FormSchema};
use care_guard::logging::setup::{init_logging, LoggingConfig};
use care_guard::submission::{FormController, SimulatedSubmitter, SubmitOutcome};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Site configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate one value against a rule set
    Check {
        /// Reject empty values
        #[arg(long)]
        required: bool,
        /// Check email shape
        #[arg(long)]
        email: bool,
        /// Check phone shape
        #[arg(long)]
        phone: bool,
        /// Reject past dates
        #[arg(long)]
        date: bool,
        /// The value to validate
        value: String,
    },
    /// Format a phone number the way the forms do
    FormatPhone {
        /// Raw input
        raw: String,
    },
    /// List doctors, optionally for one department
    Doctors {
        /// Department slug
        department: Option<String>,
        /// Use the doctors-page table instead of the booking table
        #[arg(long, conflicts_with = "directory")]
        staff: bool,
        /// Load the table from a JSON file instead
        #[arg(long)]
        directory: Option<PathBuf>,
    },
    /// Validate and submit a form input file
    Submit {
        /// `appointment` or `contact`
        form: String,
        /// JSON file with `values` and `checkboxes`
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let logging = if args.verbose {
        LoggingConfig::development()
    } else {
        LoggingConfig::default().with_level(Level::WARN).with_guard_level(Level::WARN)
    };
    if let Err(e) = init_logging(logging) {
        eprintln!("warning: could not initialize logging: {e}");
    }

    let config = match &args.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    let ok = match args.command {
        Command::Check {
            required,
            email,
            phone,
            date,
            ref value,
        } => {
            let rules = ValidationRuleSet {
                required,
                email,
                phone,
                date,
            };
            let result = FieldValidator::new().validate(value, &rules);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.valid {
                println!("valid");
            } else {
                println!("invalid: {}", result.message);
            }
            result.valid
        }
        Command::FormatPhone { ref raw } => {
            let formatted = format_phone_digits(raw);
            if args.json {
                println!("{}", serde_json::json!({ "formatted": formatted }));
            } else {
                println!("{formatted}");
            }
            true
        }
        Command::Doctors {
            ref department,
            staff,
            directory: ref file,
        } => {
            let loaded;
            let directory = match file {
                Some(path) => {
                    loaded = DoctorDirectory::from_path(path)
                        .with_context(|| format!("loading directory {}", path.display()))?;
                    &loaded
                }
                None if staff => staff_directory(),
                None => booking_directory(),
            };
            list_doctors(directory, department.as_deref(), args.json)?
        }
        Command::Submit {
            ref form,
            ref input,
        } => submit(form, input, &config, args.json).await?,
    };

    if !ok {
        process::exit(1);
    }
    Ok(())
}

fn list_doctors(
    directory: &DoctorDirectory,
    department: Option<&str>,
    json: bool,
) -> Result<bool> {
    match department {
        Some(department) => {
            let doctors = directory.doctors(department);
            if doctors.is_empty() {
                bail!("unknown department '{department}'");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(doctors)?);
            } else {
                for doctor in doctors {
                    println!("{}\t{}", doctor.value, doctor.name);
                }
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(directory)?);
            } else {
                for department in directory.departments() {
                    println!("{department}");
                    for doctor in directory.doctors(department) {
                        println!("  {}\t{}", doctor.value, doctor.name);
                    }
                }
            }
        }
    }
    Ok(true)
}

async fn submit(form: &str, input: &Path, config: &SiteConfig, json: bool) -> Result<bool> {
    let schema = FormSchema::for_name(form, config)?;
    let contents = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let input: FormInput = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", input.display()))?;

    let mut controller = FormController::new(schema, SimulatedSubmitter::from_config(config));
    for (id, value) in &input.values {
        controller.set_value(id, value);
    }
    for (id, checked) in &input.checkboxes {
        controller.set_checked(id, *checked);
    }

    match controller.submit().await? {
        SubmitOutcome::Invalid(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for failure in report.failures() {
                    println!("{}: {}", failure.field_id, failure.result.message);
                }
            }
            Ok(false)
        }
        SubmitOutcome::Submitted(receipt) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                println!(
                    "{} submitted ({} fields) at {}",
                    receipt.form,
                    receipt.fields,
                    receipt.submitted_at.to_rfc3339()
                );
            }
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn input_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn quick_config() -> SiteConfig {
        SiteConfig::default().with_submission_delay(Duration::from_millis(1))
    }

    #[test]
    fn test_parse_check() {
        let args = Args::try_parse_from(["care-validate", "check", "--required", "--email", "a@b.co"])
            .unwrap();
        match args.command {
            Command::Check {
                required,
                email,
                phone,
                value,
                ..
            } => {
                assert!(required && email && !phone);
                assert_eq!(value, "a@b.co");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["care-validate", "format-phone", "5551234567", "--json"])
            .unwrap();
        assert!(args.json);
    }

    #[test]
    fn test_parse_doctors_directory() {
        let args = Args::try_parse_from([
            "care-validate",
            "doctors",
            "--directory",
            "doctors.json",
            "dermatology",
        ])
        .unwrap();
        match args.command {
            Command::Doctors {
                department,
                directory,
                staff,
            } => {
                assert_eq!(department.as_deref(), Some("dermatology"));
                assert_eq!(directory, Some(PathBuf::from("doctors.json")));
                assert!(!staff);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Args::try_parse_from([
            "care-validate",
            "doctors",
            "--staff",
            "--directory",
            "doctors.json"
        ])
        .is_err());
    }

    #[tokio::test]
    async fn test_submit_complete_contact_file() {
        let file = input_file(
            r#"{
                "values": {
                    "contactName": "Sam Lee",
                    "contactEmail": "sam@example.org",
                    "contactSubject": "Billing",
                    "contactMessage": "Where do I send my insurance forms?",
                    "contactPhone": "555 123 4567"
                },
                "checkboxes": {"contactConsent": true}
            }"#,
        );
        assert!(submit("contact", file.path(), &quick_config(), true)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_submit_empty_file_reports_missing_fields() {
        let file = input_file("{}");
        assert!(!submit("appointment", file.path(), &quick_config(), false)
            .await
            .unwrap());

        let partial = input_file(r#"{"values": {"contactName": "Sam Lee"}}"#);
        assert!(!submit("contact", partial.path(), &quick_config(), false)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_submit_unknown_form() {
        let file = input_file("{}");
        let err = submit("billing", file.path(), &quick_config(), false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("billing"));
    }

    #[test]
    fn test_list_doctors_from_file() {
        let file = input_file(r#"{"dermatology": [{"value": "dr-ito", "name": "Dr. Ken Ito"}]}"#);
        let directory = DoctorDirectory::from_path(file.path()).unwrap();
        assert!(list_doctors(&directory, Some("dermatology"), false).unwrap());
        assert!(list_doctors(&directory, Some("neurology"), false).is_err());
    }

    #[test]
    fn test_submit_requires_input() {
        assert!(Args::try_parse_from(["care-validate", "submit", "contact"]).is_err());
    }
}
