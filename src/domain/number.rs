//! Dial-string format helpers.
//!
//! The normalizer matches trunk prefixes literally; the regex patterns here
//! serve boundary validation (e.g. CLI input checks) rather than the core
//! algorithm itself.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returns true if the number is already in international form.
///
/// International numbers carry a leading '+'; everything after the sign is
/// the calling code followed by the subscriber number.
pub fn is_international(number: &str) -> bool {
    number.starts_with('+')
}

/// Pattern for well-formed international numbers ("+" followed by digits).
pub fn international_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\+[0-9]+$").expect("Valid international number regex"));
    &PATTERN
}

/// Pattern for well-formed national numbers (digits only).
pub fn national_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Valid national number regex"));
    &PATTERN
}

/// Returns true if the number is a plausible dial string in either form.
pub fn is_well_formed(number: &str) -> bool {
    international_pattern().is_match(number) || national_pattern().is_match(number)
}
