//! Parsing signed integer text written in an arbitrary radix

use super::check_radix;
use super::digit::digit_value;
use super::error::{ConvertError, Result};

/// Parse `text` as a signed integer written in `radix`.
///
/// A single leading '-' marks the value negative. Digits are folded most
/// significant first. Text consisting of only "-" parses as zero.
///
/// # Errors
/// * [`ConvertError::EmptyInput`] if `text` is empty, whatever the radix
/// * [`ConvertError::InvalidRadix`] if `radix` is outside 2..=36
/// * [`ConvertError::InvalidDigit`] for the first character that is not a
///   digit under `radix`
/// * [`ConvertError::Overflow`] if the value does not fit in an `i64`
pub fn parse_number(text: &str, radix: u32) -> Result<i64> {
    if text.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    check_radix(radix)?;

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let overflow = || ConvertError::Overflow {
        text: text.to_string(),
    };

    // Accumulate the magnitude unsigned so i64::MIN is reachable
    let mut magnitude: u64 = 0;
    for c in digits.chars() {
        let digit = digit_value(c, radix)?;
        magnitude = magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
            .ok_or_else(overflow)?;
    }

    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(signed).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(parse_number("ff", 16), Ok(255));
        assert_eq!(parse_number("-ff", 16), Ok(-255));
        assert_eq!(parse_number("1010", 2), Ok(10));
        assert_eq!(parse_number("FF", 16), Ok(255));
        assert_eq!(parse_number("zz", 36), Ok(1295));
        assert_eq!(parse_number("0", 7), Ok(0));
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_number("000777", 8), Ok(511));
        assert_eq!(parse_number("-0001", 2), Ok(-1));
    }

    #[test]
    fn test_parse_empty_input_for_any_radix() {
        for radix in [0, 1, 2, 10, 36, 37, 1000] {
            assert_eq!(parse_number("", radix), Err(ConvertError::EmptyInput));
        }
    }

    #[test]
    fn test_parse_lone_minus_is_zero() {
        assert_eq!(parse_number("-", 10), Ok(0));
    }

    #[test]
    fn test_parse_rejects_radix_out_of_range() {
        assert_eq!(
            parse_number("1", 1),
            Err(ConvertError::InvalidRadix { radix: 1 })
        );
        assert_eq!(
            parse_number("1", 37),
            Err(ConvertError::InvalidRadix { radix: 37 })
        );
    }

    #[test]
    fn test_parse_invalid_digits() {
        assert_eq!(
            parse_number("1g", 16),
            Err(ConvertError::InvalidDigit { digit: 'g', radix: 16 })
        );
        assert_eq!(
            parse_number("12a", 10),
            Err(ConvertError::InvalidDigit { digit: 'a', radix: 10 })
        );
        assert_eq!(
            parse_number("1-1", 10),
            Err(ConvertError::InvalidDigit { digit: '-', radix: 10 })
        );
        assert_eq!(
            parse_number("--1", 10),
            Err(ConvertError::InvalidDigit { digit: '-', radix: 10 })
        );
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(parse_number("9223372036854775807", 10), Ok(i64::MAX));
        assert_eq!(parse_number("-9223372036854775808", 10), Ok(i64::MIN));
        assert_eq!(parse_number("7fffffffffffffff", 16), Ok(i64::MAX));
        assert_eq!(parse_number("-8000000000000000", 16), Ok(i64::MIN));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse_number("9223372036854775808", 10),
            Err(ConvertError::Overflow {
                text: "9223372036854775808".to_string()
            })
        );
        assert!(matches!(
            parse_number("-9223372036854775809", 10),
            Err(ConvertError::Overflow { .. })
        ));
        assert!(matches!(
            parse_number("zzzzzzzzzzzzzzzzzzzz", 36),
            Err(ConvertError::Overflow { .. })
        ));
    }
}
