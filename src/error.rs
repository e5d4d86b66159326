use std::io;
use thiserror::Error;

/// Custom error type for sysdash
#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing required column '{0}' in log header")]
    MissingColumn(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type alias for sysdash
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Create a parse error for a 1-based source line
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        DashError::Parse {
            line,
            message: msg.into(),
        }
    }

    pub fn missing_column<S: Into<String>>(name: S) -> Self {
        DashError::MissingColumn(name.into())
    }
}
