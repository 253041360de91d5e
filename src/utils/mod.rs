//! Utility module - logging and terminal styling

mod logger;
mod styling;

pub use logger::*;
pub use styling::*;
