use std::collections::TryReserveError;

use thiserror::Error;

/// Why the single argument could not be read as a 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("not a number")]
    NotANumber,
    #[error("number out of range")]
    OutOfRange,
}

/// Every way a run can fail. Each variant maps to one stderr report and
/// one exit code, see [`Error::report`] and [`Error::exit_code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected exactly one argument, got {count}")]
    Usage { count: usize },

    #[error("{0}")]
    Parse(ParseFailure),

    #[error("{0} is not between two and one billion")]
    Range(i32),

    #[error("failed to reserve space for {candidates} candidates")]
    Allocation {
        candidates: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("{0}")]
    Unknown(String),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage { .. } | Error::Parse(_) | Error::Range(_) => -1,
            Error::Allocation { .. } => -2,
            Error::Unknown(_) => -4,
        }
    }

    /// The text printed to stderr before exiting.
    pub fn report(&self, program: &str) -> String {
        match self {
            Error::Usage { .. } | Error::Parse(_) | Error::Range(_) => format!(
                "Usage: {} [upto]\n\nUpto must be between two and one billion.\n",
                program
            ),
            Error::Allocation { .. } => "Error allocating memory.  Aborting...\n".to_owned(),
            Error::Unknown(msg) => format!("Unknown exception: {}.  Aborting...\n", msg),
        }
    }
}

impl From<ParseFailure> for Error {
    fn from(e: ParseFailure) -> Self {
        Error::Parse(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Unknown(e.to_string())
    }
}
