//! Process exit codes for hdcv
//!
//! These let scripts tell apart the ways a conversion can fail.

/// Conversion succeeded, or help/version was shown.
pub const SUCCESS: u8 = 0;

/// Fewer than three positional arguments were given.
pub const TOO_FEW_ARGUMENTS: u8 = 1;

/// An unrecognised flag or an extra positional argument was given.
pub const UNKNOWN_ARGUMENT: u8 = 2;

/// The source or target base is not decimal integer text.
pub const NON_NUMERIC_BASE: u8 = 3;

/// The conversion itself rejected the input (bad digit, empty input, bad base).
pub const CONVERSION_FAILED: u8 = 4;

/// Any other recoverable failure, such as being unable to write the result.
pub const OTHER_FAILURE: u8 = 5;

/// A failure nothing else accounted for (a panic escaped the driver).
pub const UNKNOWN_FAILURE: u8 = 6;
