//! ASCII character classification and case conversion

use super::error::{ConvertError, Result};

/// True if `c` is one of '0'..='9'.
pub fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// True if `text` holds at least one decimal digit and nothing else,
/// allowing a single leading '-'.
///
/// A lone "-" is not numeric since it carries no digits.
pub fn is_numeric_string(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(is_digit_char)
}

/// True if `c` is an ASCII letter.
pub fn is_alpha_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Lowercase an ASCII letter. Lowercase letters pass through unchanged.
///
/// # Errors
/// Returns [`ConvertError::InvalidCharacter`] if `c` is not a letter.
pub fn to_lower_char(c: char) -> Result<char> {
    match c {
        'A'..='Z' => Ok(c.to_ascii_lowercase()),
        'a'..='z' => Ok(c),
        _ => Err(ConvertError::InvalidCharacter { character: c }),
    }
}

/// Uppercase an ASCII letter. Uppercase letters pass through unchanged.
///
/// # Errors
/// Returns [`ConvertError::InvalidCharacter`] if `c` is not a letter.
pub fn to_upper_char(c: char) -> Result<char> {
    match c {
        'a'..='z' => Ok(c.to_ascii_uppercase()),
        'A'..='Z' => Ok(c),
        _ => Err(ConvertError::InvalidCharacter { character: c }),
    }
}

/// Lowercase every letter in `text`, copying everything else through.
pub fn to_lower_string(text: &str) -> String {
    text.chars().map(|c| to_lower_char(c).unwrap_or(c)).collect()
}

/// Uppercase every letter in `text`, copying everything else through.
pub fn to_upper_string(text: &str) -> String {
    text.chars().map(|c| to_upper_char(c).unwrap_or(c)).collect()
}
