//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while interpreting request values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value is not part of the closed vocabulary it was parsed against.
    #[error("unknown {vocabulary}: `{value}`")]
    UnknownValue {
        /// Name of the vocabulary (e.g. "output format").
        vocabulary: &'static str,
        /// The rejected value, as given.
        value: String,
    },

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
