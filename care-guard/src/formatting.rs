//! Input formatting helpers.

/// Formats a phone number typed into a form.
///
/// Every non-digit character is dropped. Exactly ten remaining digits are
/// rendered as `(AAA) BBB-CCCC`; any other count is returned as the bare
/// digit string.
///
/// # Examples
///
/// ```rust
/// use care_guard::formatting::format_phone_digits;
///
/// assert_eq!(format_phone_digits("555-123-4567"), "(555) 123-4567");
/// assert_eq!(format_phone_digits("12345"), "12345");
/// ```
pub fn format_phone_digits(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits
    }
}
