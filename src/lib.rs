//! hdcv: Number Base Conversion Library
//!
//! Parses integer text written in any radix from 2 to 36 into an `i64` and
//! renders it back out in another radix.

pub mod cli;
pub mod convert;
pub mod utils;

pub use convert::{convert, format_number, parse_number, ConvertError};
