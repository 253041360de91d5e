//! Error types for radix conversion.
//!
//! Every failure the core can report is a variant of [`ConvertError`]. The
//! core never recovers from its own errors; callers decide what to do.

use thiserror::Error;

/// Errors raised while classifying, parsing or formatting numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// `parse_number` was given zero-length text.
    #[error("conversion failed: empty input")]
    EmptyInput,

    /// A character has no digit value, or its value is not below the radix.
    ///
    /// Letters only count as digits when the radix is above 10.
    #[error("conversion failed: '{digit}' is not a base-{radix} digit")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The radix the character was read under.
        radix: u32,
    },

    /// The radix is outside the supported range 2 to 36.
    #[error("conversion failed: base {radix} is outside the supported range 2-36")]
    InvalidRadix {
        /// The rejected radix.
        radix: u32,
    },

    /// Case conversion was requested for something that is not an ASCII letter.
    #[error("conversion failed: '{character}' is not a letter")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },

    /// The parsed magnitude does not fit in a signed 64-bit integer.
    #[error("conversion failed: '{text}' does not fit in a signed 64-bit integer")]
    Overflow {
        /// The full input text.
        text: String,
    },
}

/// Convenience alias for results carrying a [`ConvertError`].
pub type Result<T> = std::result::Result<T, ConvertError>;
