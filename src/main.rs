//! hdcv: Number Base Conversion CLI Tool
//!
//! Converts an integer between number bases and reports failures through
//! distinct exit codes.

use std::panic;
use std::process::ExitCode;

use hdcv::cli::{self, exit_code};
use hdcv::utils::{print_error, print_usage_hint};

fn main() -> ExitCode {
    match panic::catch_unwind(|| cli::run(std::env::args_os())) {
        Ok(Ok(())) => ExitCode::from(exit_code::SUCCESS),
        Ok(Err(e)) => {
            print_error(&format!("{:#}", e));
            if e.is_usage_error() {
                print_usage_hint();
            }
            ExitCode::from(e.exit_code())
        }
        // The panic hook has already reported the payload
        Err(_) => ExitCode::from(exit_code::UNKNOWN_FAILURE),
    }
}
