//! Driver: turns command-line arguments into a conversion and an exit code

use std::ffi::OsString;
use std::io::Write;

use anyhow::Context;
use clap::error::{ContextKind, ErrorKind};
use clap::Parser;
use thiserror::Error;

use super::args::Cli;
use super::exit_code;
use crate::convert::{convert, is_numeric_string, to_upper_string, ConvertError};
use crate::utils::init_cli_logger;

/// Everything that can stop the driver from printing a result.
#[derive(Debug, Error)]
pub enum RunError {
    /// Not all of number, source base and target base were given.
    #[error("too few arguments")]
    TooFewArguments,

    /// A flag or positional argument that the CLI does not accept.
    #[error("unknown argument: {argument}")]
    UnknownArgument {
        /// The argument as typed, when clap reports it.
        argument: String,
    },

    /// A base argument that is not decimal integer text.
    #[error("{name} '{value}' is not a number")]
    NonNumericBase {
        /// Which base argument was rejected.
        name: &'static str,
        /// The argument text.
        value: String,
    },

    /// A numeric base that is negative or too large to be a radix.
    #[error("{name} {value} is outside the supported range 2-36")]
    BaseOutOfRange {
        /// Which base argument was rejected.
        name: &'static str,
        /// The parsed base.
        value: i64,
    },

    /// The core rejected the number or a base.
    #[error(transparent)]
    Conversion(#[from] ConvertError),

    /// Any other failure, with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::TooFewArguments => exit_code::TOO_FEW_ARGUMENTS,
            RunError::UnknownArgument { .. } => exit_code::UNKNOWN_ARGUMENT,
            RunError::NonNumericBase { .. } => exit_code::NON_NUMERIC_BASE,
            RunError::BaseOutOfRange { .. } | RunError::Conversion(_) => {
                exit_code::CONVERSION_FAILED
            }
            RunError::Other(_) => exit_code::OTHER_FAILURE,
        }
    }

    /// True for errors caused by how the command line was written.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            RunError::TooFewArguments | RunError::UnknownArgument { .. }
        )
    }
}

/// Parse `args` (program name first), convert, and print the result to stdout.
///
/// Help and version requests are printed and count as success.
pub fn run<I, T>(args: I) -> Result<(), RunError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let output = execute(&cli)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("failed to write result to stdout")?;
    Ok(())
}

/// Perform the conversion described by `cli` and return the text to print.
pub fn execute(cli: &Cli) -> Result<String, RunError> {
    let source = read_base("source base", &cli.source_base)?;
    let target = read_base("target base", &cli.target_base)?;

    let output = convert(&cli.number, source, target)?;
    if cli.uppercase {
        Ok(to_upper_string(&output))
    } else {
        Ok(output)
    }
}

/// Turn base argument text into a radix candidate.
///
/// Range checking against 2..=36 is left to the conversion core.
pub fn read_base(name: &'static str, value: &str) -> Result<u32, RunError> {
    if !is_numeric_string(value) {
        return Err(RunError::NonNumericBase {
            name,
            value: value.to_string(),
        });
    }

    let parsed: i64 = value
        .parse()
        .with_context(|| format!("{} '{}' does not fit in a 64-bit integer", name, value))?;

    u32::try_from(parsed).map_err(|_| RunError::BaseOutOfRange {
        name,
        value: parsed,
    })
}

fn handle_parse_error(err: clap::Error) -> Result<(), RunError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print().context("failed to print help")?;
            Ok(())
        }
        ErrorKind::MissingRequiredArgument => Err(RunError::TooFewArguments),
        ErrorKind::UnknownArgument | ErrorKind::TooManyValues => {
            let argument = err
                .get(ContextKind::InvalidArg)
                .map(ToString::to_string)
                .unwrap_or_else(|| {
                    err.kind()
                        .as_str()
                        .unwrap_or("unrecognised input")
                        .to_string()
                });
            Err(RunError::UnknownArgument { argument })
        }
        _ => Err(RunError::Other(anyhow::Error::new(err))),
    }
}
