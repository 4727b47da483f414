//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("The amount is not valid.")]
    InvalidAmount,

    #[error("The category is not valid.")]
    InvalidCategory,

    #[error("Row {index} is out of range ({len} transaction(s))")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid timestamp: {0}")]
    Timestamp(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(Error::InvalidAmount.to_string(), "The amount is not valid.");
        assert_eq!(Error::InvalidCategory.to_string(), "The category is not valid.");
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = Error::IndexOutOfRange { index: 3, len: 1 };
        assert!(err.to_string().contains("Row 3"));
    }

    #[test]
    fn test_environment_error_messages() {
        assert_eq!(
            Error::config("missing").to_string(),
            "Configuration error: missing"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::from(io).to_string(), "IO error: gone");
    }
}
