//! CLI module - argument parsing and the conversion driver

mod args;
pub mod exit_code;
mod run;

pub use args::Cli;
pub use run::*;
