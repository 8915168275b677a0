//! Error types for task
//!
//! Only failures that abort the process live here: filesystem errors and
//! malformed rows in the backing file. User mistakes (bad argument counts,
//! out-of-range indexes, clearing a file that is already gone) are printed
//! as messages and the command returns normally with exit 0.

use thiserror::Error;

/// Exit codes for the task CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const OPERATION_FAILED: i32 = 1;
}

/// Main error type for task operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row in the backing file failed the validating parse (non-integer
    /// value in a numeric column, wrong field count). The whole load aborts
    /// on the first such row; nothing is skipped.
    #[error("Malformed task file: {0}")]
    Format(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) | Error::Format(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// csv wraps underlying IO failures in its own error type; unwrap those so
/// only genuine parse problems surface as `Format`.
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Error::Io(io_err),
            _ => Error::Format(message),
        }
    }
}

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, Error>;
