//! Error types for the datatype mapper

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Mapper errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown C++ type spelling: {0}")]
    UnknownType(String),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
