//! Error types for chart generation.

use std::fmt;
use std::io;

/// The main error type for chart operations.
#[derive(Debug)]
pub enum ChartError {
    /// Error during IO operations (file writing, etc.)
    Io(io::Error),
    /// Input does not satisfy the chart's column contract
    Validation(String),
    /// Invalid data encountered during layout (e.g. unparseable timestamp)
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(err) => write!(f, "IO error: {}", err),
            ChartError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ChartError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            ChartError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ChartError {
    fn from(err: io::Error) -> Self {
        ChartError::Io(err)
    }
}

/// Result type alias for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;
