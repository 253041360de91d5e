//! Terminal styling for messages written to stderr

use std::io::{self, Write};

use console::style;

/// Print an error message with a red prefix.
///
/// Write failures are ignored so a closed stderr cannot abort the process.
pub fn print_error(message: &str) {
    let _ = write_error(&mut io::stderr().lock(), message);
}

/// Print the hint that follows usage errors.
pub fn print_usage_hint() {
    let _ = write_usage_hint(&mut io::stderr().lock());
}

/// Write an error message with a red prefix to `out`.
pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        style("error:").red().bold().for_stderr(),
        message
    )
}

/// Write the hint that follows usage errors to `out`.
pub fn write_usage_hint<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style("See 'hdcv -h' for usage.").dim().for_stderr()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that behaves like a closed pipe
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_error_contains_message() {
        let mut buf = Vec::new();
        write_error(&mut buf, "bad digit").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("error:"));
        assert!(text.trim_end().ends_with("bad digit"));
    }

    #[test]
    fn test_closed_stream_reports_error_instead_of_panicking() {
        let err = write_error(&mut ClosedPipe, "bad digit").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(write_usage_hint(&mut ClosedPipe).is_err());
    }
}
