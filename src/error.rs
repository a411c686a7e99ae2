//! Error types for the Lexiphrase library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexiphraseError`] enum. A missing automaton transition is never an error:
//! it is the ordinary "no match" outcome and is handled by the matcher itself.
//!
//! # Examples
//!
//! ```
//! use lexiphrase::error::{LexiphraseError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiphraseError::invalid_argument("analyzed key must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexiphrase operations.
///
/// Uses `thiserror` for the `Error` implementation and offers constructor
/// helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum LexiphraseError {
    /// I/O errors (dictionary files, compiled word sets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dictionary-related errors (malformed word lists, corrupt word sets)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// A caller passed an argument that violates an API contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors raised while building or opening the automaton
    #[error("Automaton error: {0}")]
    Automaton(#[from] fst::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexiphraseError.
pub type Result<T> = std::result::Result<T, LexiphraseError>;

impl LexiphraseError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexiphraseError::Analysis(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexiphraseError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiphraseError::InvalidArgument(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        LexiphraseError::Serialization(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexiphraseError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiphraseError::Other(msg.into())
    }
}

impl From<bincode::Error> for LexiphraseError {
    fn from(err: bincode::Error) -> Self {
        LexiphraseError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexiphraseError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = LexiphraseError::invalid_argument("input.length must be > 0");
        assert_eq!(
            error.to_string(),
            "Invalid argument: input.length must be > 0"
        );

        let error = LexiphraseError::invalid_config("missing dictionary");
        assert_eq!(
            error.to_string(),
            "Error: Invalid configuration: missing dictionary"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexiphraseError::from(io_error);

        match error {
            LexiphraseError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
