//! Error types for JSON marshaling.

use enumstr_core::EnumError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding an enumerated value.
#[derive(Error, Debug)]
pub enum JsonError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("expected a JSON string but found {found}")]
    NotAString { found: &'static str },

    #[error(transparent)]
    Enum(#[from] EnumError),
}

impl JsonError {
    /// True when the input was well-formed JSON naming no known value.
    pub fn is_unknown(&self) -> bool {
        matches!(self, JsonError::Enum(err) if err.is_unknown())
    }
}

pub type Result<T> = std::result::Result<T, JsonError>;
