//! Radix conversion core
//!
//! Character classification, the digit codec, and the parser/formatter pair
//! that move signed 64-bit integers in and out of text in bases 2 to 36.

mod classify;
mod digit;
mod error;
mod format;
mod parse;

pub use classify::*;
pub use digit::*;
pub use error::{ConvertError, Result};
pub use format::format_number;
pub use parse::parse_number;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix ('z' is digit 35).
pub const MAX_RADIX: u32 = 36;

/// Parse `text` in `from_radix` and render the value in `to_radix`.
///
/// The output always uses lowercase letters.
pub fn convert(text: &str, from_radix: u32, to_radix: u32) -> Result<String> {
    let value = parse_number(text, from_radix)?;
    tracing::debug!(text, from_radix, value, "parsed input");

    let output = format_number(value, to_radix)?;
    tracing::debug!(to_radix, output = %output, "formatted output");
    Ok(output)
}

fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ConvertError::InvalidRadix { radix })
    }
}
