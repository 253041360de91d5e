//! Rendering signed integers in an arbitrary radix

use super::check_radix;
use super::digit::DIGITS;
use super::error::Result;

/// Render `value` in `radix` using lowercase letters for digits above 9.
///
/// Zero renders as "0" and negative values get a leading '-'. Works on the
/// unsigned magnitude, so `i64::MIN` is rendered without overflow.
///
/// # Errors
/// Returns [`ConvertError::InvalidRadix`] if `radix` is outside 2..=36.
pub fn format_number(value: i64, radix: u32) -> Result<String> {
    check_radix(radix)?;

    let radix_wide = u64::from(radix);
    let mut magnitude = value.unsigned_abs();
    let mut reversed = Vec::new();

    loop {
        // remainder < radix <= 36, always a valid index
        let remainder = (magnitude % radix_wide) as usize;
        reversed.push(char::from(DIGITS[remainder]));
        magnitude /= radix_wide;
        if magnitude == 0 {
            break;
        }
    }

    if value < 0 {
        reversed.push('-');
    }
    Ok(reversed.into_iter().rev().collect())
}
