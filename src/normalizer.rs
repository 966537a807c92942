//! Caller-context number normalization.
//!
//! A national-format number carries no country information of its own, so
//! the normalizer infers it from the caller's number: the calling code at
//! the front of the caller identifies the country whose dialling rules are
//! in effect, and that country's trunk prefix is swapped for its calling
//! code. Numbers already in international form pass through untouched, and
//! numbers matching no directory entry are returned unchanged.

use crate::domain::number;
use crate::domain::{CallingCodeTable, PrefixTable};
use crate::error::{DialplanError, DialplanResult};

/// Upper bound on international calling code length in digits.
///
/// Real-world calling codes never exceed four digits; probing stops there.
pub const MAX_CALLING_CODE_DIGITS: usize = 4;

/// Normalizes dialled numbers into international format.
///
/// The normalizer borrows its two directory tables and never mutates them,
/// so a single instance (or copies of it) can serve any number of threads
/// concurrently.
#[derive(Debug, Clone, Copy)]
pub struct NumberNormalizer<'a> {
    calling_codes: &'a CallingCodeTable,
    prefixes: &'a PrefixTable,
}

impl<'a> NumberNormalizer<'a> {
    /// Creates a normalizer over the given directory tables.
    ///
    /// No validation is performed: a country present in one table but not
    /// the other simply never produces a match.
    pub fn new(calling_codes: &'a CallingCodeTable, prefixes: &'a PrefixTable) -> Self {
        Self {
            calling_codes,
            prefixes,
        }
    }

    /// Returns `dialled` in international format.
    ///
    /// A number starting with '+' is returned unchanged. A national number
    /// is reformatted by replacing its trunk prefix with the calling code of
    /// the caller's country. A number matching no directory entry is also
    /// returned unchanged; "cannot normalize" is a normal outcome, not a
    /// failure.
    ///
    /// # Errors
    ///
    /// [`DialplanError::InvalidInput`] if either number is empty, or if
    /// `caller` is too short to supply a calling-code probe window.
    pub fn parse(&self, dialled: &str, caller: &str) -> DialplanResult<String> {
        if dialled.is_empty() {
            return Err(DialplanError::invalid_input("dialled", "number is empty"));
        }
        if caller.is_empty() {
            return Err(DialplanError::invalid_input("caller", "number is empty"));
        }

        if number::is_international(dialled) {
            return Ok(dialled.to_string());
        }

        self.format_national_number(dialled, caller)
    }

    /// Reformats a national number using the caller's country.
    ///
    /// Probes calling-code lengths from shortest to longest; the first
    /// length where both the calling code and the trunk prefix match wins.
    fn format_national_number(&self, dialled: &str, caller: &str) -> DialplanResult<String> {
        for length in 1..=MAX_CALLING_CODE_DIGITS {
            let code = match Self::probe_calling_code(caller, length)? {
                Some(code) => code,
                None => continue,
            };
            let country = match self.calling_codes.country_for_code(code) {
                Some(country) => country,
                None => continue,
            };
            if let Some(rest) = self.strip_trunk_prefix(country, dialled) {
                return Ok(format!("+{}{}", code, rest));
            }
        }

        // Number cannot be reformatted
        Ok(dialled.to_string())
    }

    /// Extracts the `length`-digit calling-code candidate from the caller's
    /// number, skipping the leading '+'.
    ///
    /// Returns `Ok(None)` when the window is not numeric, since it can then
    /// never equal a calling code. A caller too short to contain the window
    /// is an input error rather than a silent miss.
    fn probe_calling_code(caller: &str, length: usize) -> DialplanResult<Option<u32>> {
        let window = caller.get(1..1 + length).ok_or_else(|| {
            DialplanError::invalid_input(
                "caller",
                format!("cannot extract a {}-digit calling code probe", length),
            )
        })?;

        Ok(window.parse::<u32>().ok())
    }

    /// Returns the dialled number with `country`'s trunk prefix removed, or
    /// `None` when the country has no usable prefix or the number does not
    /// start with it. The comparison is a literal, exact-length prefix match.
    fn strip_trunk_prefix<'d>(&self, country: &str, dialled: &'d str) -> Option<&'d str> {
        let prefix = self.prefixes.get(country)?;
        if prefix.is_empty() {
            return None;
        }

        dialled.strip_prefix(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gb_us_directory() -> (CallingCodeTable, PrefixTable) {
        let mut calling_codes = CallingCodeTable::new();
        calling_codes.insert("GB", 44);
        calling_codes.insert("US", 1);

        let mut prefixes = PrefixTable::new();
        prefixes.insert("GB", "0");
        prefixes.insert("US", "1");

        (calling_codes, prefixes)
    }

    #[test]
    fn test_national_number_is_reformatted() {
        let (calling_codes, prefixes) = gb_us_directory();
        let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);

        assert_eq!(
            normalizer.parse("02079460056", "+441614960178").unwrap(),
            "+442079460056"
        );
    }

    #[test]
    fn test_international_number_passes_through() {
        let (calling_codes, prefixes) = gb_us_directory();
        let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);

        assert_eq!(
            normalizer.parse("+442079460056", "+441614960178").unwrap(),
            "+442079460056"
        );
    }

    #[test]
    fn test_unmatched_prefix_returns_original() {
        let (calling_codes, prefixes) = gb_us_directory();
        let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);

        // GB prefix "0" does not match a number starting with "1"
        assert_eq!(
            normalizer.parse("12079460056", "+441614960178").unwrap(),
            "12079460056"
        );
    }

    #[test]
    fn test_empty_dialled_is_rejected() {
        let (calling_codes, prefixes) = gb_us_directory();
        let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);

        let err = normalizer.parse("", "+441614960178").unwrap_err();
        assert!(matches!(err, DialplanError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_caller_is_rejected() {
        let (calling_codes, prefixes) = gb_us_directory();
        let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);

        let err = normalizer.parse("02079460056", "").unwrap_err();
        assert!(matches!(err, DialplanError::InvalidInput { .. }));
    }

    #[test]
    fn test_probe_window_bounds() {
        assert_eq!(
            NumberNormalizer::probe_calling_code("+441614960178", 2).unwrap(),
            Some(44)
        );
        assert!(NumberNormalizer::probe_calling_code("+4", 2).is_err());
        assert_eq!(
            NumberNormalizer::probe_calling_code("+4a1614960178", 3).unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_prefix_entry_never_matches() {
        let mut calling_codes = CallingCodeTable::new();
        calling_codes.insert("GB", 44);
        let prefixes = PrefixTable::new();

        let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);
        assert_eq!(
            normalizer.parse("02079460056", "+441614960178").unwrap(),
            "02079460056"
        );
    }

    #[test]
    fn test_empty_prefix_never_matches() {
        let mut calling_codes = CallingCodeTable::new();
        calling_codes.insert("GB", 44);
        let mut prefixes = PrefixTable::new();
        prefixes.insert("GB", "");

        let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);
        assert_eq!(
            normalizer.parse("02079460056", "+441614960178").unwrap(),
            "02079460056"
        );
    }
}
