//! User-facing error formatting for the binaries.

use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the dataset path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "The dataset appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a passlex library error into a CLI error with a hint.
pub fn passlex_cli_error(context: &str, err: crate::PasslexError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a passlex error variant.
pub fn cli_hint(err: &crate::PasslexError) -> String {
    use crate::PasslexError::*;
    match err {
        Parse { line, source } => format!(
            "line {line} is not a valid entry record ({source}). Re-export the dataset or run the normalize tool on a good copy."
        ),
        Config(msg) => format!("{msg}. See --help for valid values."),
        EmptyPool => {
            "every word was filtered out. Enable some inclusion toggles or raise --char-max."
                .to_string()
        }
        Io(io) => format!("{io}"),
    }
}
