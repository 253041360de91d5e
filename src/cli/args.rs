//! Command-line argument definitions using clap

use clap::Parser;

const EXIT_STATUS_HELP: &str = "\
Exit status:
  0  success
  1  too few arguments
  2  unknown argument
  3  a base is not a number
  4  conversion failed (bad digit, empty input, bad base)
  5  other failure
  6  unexpected internal failure";

/// hdcv - Convert an integer between number bases 2 through 36
#[derive(Parser, Debug)]
#[command(name = "hdcv")]
#[command(version, about, long_about = None, after_help = EXIT_STATUS_HELP)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Number to convert, optionally prefixed with '-' (e.g. ff, -1010, Zz)
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub number: String,

    /// Base the number is written in (2-36)
    #[arg(allow_negative_numbers = true)]
    pub source_base: String,

    /// Base to convert the number to (2-36)
    #[arg(allow_negative_numbers = true)]
    pub target_base: String,

    /// Force uppercase letters for results with base > 10
    #[arg(short, long, default_value = "false")]
    pub uppercase: bool,

    /// Log conversion steps to stderr
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}
