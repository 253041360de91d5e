//! Mapping between single characters and digit values

use super::classify::{is_alpha_char, is_digit_char, to_lower_char};
use super::error::{ConvertError, Result};

pub(super) const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Value of `c` as a digit under `radix`.
///
/// '0'..='9' map to 0..=9 and letters of either case map to 10..=35. Letters
/// are only accepted when `radix` is above 10.
///
/// # Errors
/// Returns [`ConvertError::InvalidDigit`] if `c` has no value under `radix`.
pub fn digit_value(c: char, radix: u32) -> Result<u32> {
    let invalid = || ConvertError::InvalidDigit { digit: c, radix };

    let value = if is_digit_char(c) {
        u32::from(c) - u32::from('0')
    } else if is_alpha_char(c) && radix > 10 {
        u32::from(to_lower_char(c)?) - u32::from('a') + 10
    } else {
        return Err(invalid());
    };

    if value >= radix {
        return Err(invalid());
    }
    Ok(value)
}

/// Character for a digit value, lowercase for 10 and above.
/// Returns `None` for values above 35.
pub fn value_to_char(value: u32) -> Option<char> {
    DIGITS.get(value as usize).map(|&b| char::from(b))
}
