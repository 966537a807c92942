//! Caller-context telephone number normalization.
//!
//! This library converts dialled numbers into E.164-like international
//! format. A number dialled in national form ("02079460056") is rewritten
//! by replacing its national trunk prefix with the international calling
//! code of the caller's country; the caller's own number ("+44...") is the
//! context that identifies that country. Numbers already in international
//! form pass through untouched.
//!
//! # Features
//!
//! - **Caller-Context Inference**: the calling code at the front of the
//!   caller's number selects the dialling rules, probing code lengths from
//!   one to four digits
//! - **Deterministic Directories**: insertion-ordered tables make duplicate
//!   calling codes resolve to the first inserted country
//! - **Silent Fall-Through**: numbers outside the directory are returned
//!   unchanged rather than treated as failures
//!
//! # Architecture
//!
//! - [`domain`]: directory tables and dial-string format helpers
//! - [`normalizer`]: the normalization algorithm
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```
//! use dialplan::{CallingCodeTable, NumberNormalizer, PrefixTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut calling_codes = CallingCodeTable::new();
//! calling_codes.insert("GB", 44);
//!
//! let mut prefixes = PrefixTable::new();
//! prefixes.insert("GB", "0");
//!
//! let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);
//! let formatted = normalizer.parse("02079460056", "+441614960178")?;
//! assert_eq!(formatted, "+442079460056");
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Multi-Digit Trunk Prefixes
//!
//! ```
//! use dialplan::{CallingCodeTable, NumberNormalizer, PrefixTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut calling_codes = CallingCodeTable::new();
//! calling_codes.insert("CHN", 86);
//!
//! let mut prefixes = PrefixTable::new();
//! prefixes.insert("CHN", "072");
//!
//! let normalizer = NumberNormalizer::new(&calling_codes, &prefixes);
//! assert_eq!(
//!     normalizer.parse("0722079460056", "+861614960178")?,
//!     "+862079460056"
//! );
//! # Ok(())
//! # }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod normalizer;

// Re-exports for convenient access
pub use domain::{CallingCodeTable, PrefixTable};
pub use error::{DialplanError, DialplanResult};
pub use normalizer::{NumberNormalizer, MAX_CALLING_CODE_DIGITS};
