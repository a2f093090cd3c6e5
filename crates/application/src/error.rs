//! Application error types
//!
//! `PubChemHttpError` is the taxonomy of non-2xx PubChem answers, one kind
//! per documented status. `SearchError` is what the search facade returns.

use pubchem_domain::{RawResponse, ValidationError};
use thiserror::Error;

use crate::ports::HttpClientError;

/// A non-2xx answer from PubChem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PubChemHttpError {
    /// 400: request is improperly formed (syntax error in the URL, POST body, etc.).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 404: the input record was not found (e.g. invalid CID).
    #[error("not found: {0}")]
    NotFound(String),

    /// 405: request not allowed (such as invalid MIME type in the Accept header).
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// 500: some problem on the server side (such as a database server down).
    #[error("server error: {0}")]
    ServerError(String),

    /// 501: the requested operation has not (yet) been implemented by the server.
    #[error("unimplemented: {0}")]
    Unimplemented(String),

    /// 503: too many requests or server busy. Retryable.
    #[error("server busy: {0}")]
    ServerBusy(String),

    /// 504: the request timed out, from server overload or too broad a request.
    #[error("timeout: {0}")]
    Timeout(String),

    /// Any other non-2xx status.
    #[error("HTTP error {status}: {message}")]
    Http {
        /// The status code received.
        status: u16,
        /// The server message.
        message: String,
    },
}

impl PubChemHttpError {
    /// Maps a status code and server message to an error kind.
    ///
    /// An empty message is replaced by the kind's default description.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            Self::default_message(status).to_string()
        } else {
            message
        };

        match status {
            400 => Self::BadRequest(message),
            404 => Self::NotFound(message),
            405 => Self::MethodNotAllowed(message),
            500 => Self::ServerError(message),
            501 => Self::Unimplemented(message),
            503 => Self::ServerBusy(message),
            504 => Self::Timeout(message),
            _ => Self::Http { status, message },
        }
    }

    /// Maps a non-2xx response, using its body as the message.
    #[must_use]
    pub fn from_response(response: &RawResponse) -> Self {
        Self::from_status(response.status.as_u16(), response.text_lossy())
    }

    const fn default_message(status: u16) -> &'static str {
        match status {
            400 => "Request is improperly formed",
            404 => "The input record was not found",
            405 => "Request not allowed",
            500 => "Some problem on the server side",
            501 => "The requested operation has not been implemented",
            503 => "Too many requests or server is busy",
            504 => "The request timed out",
            _ => "Unspecified HTTP error",
        }
    }

    /// Returns the HTTP status code this error was mapped from.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed(_) => 405,
            Self::ServerError(_) => 500,
            Self::Unimplemented(_) => 501,
            Self::ServerBusy(_) => 503,
            Self::Timeout(_) => 504,
            Self::Http { status, .. } => *status,
        }
    }

    /// Returns the server message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::MethodNotAllowed(message)
            | Self::ServerError(message)
            | Self::Unimplemented(message)
            | Self::ServerBusy(message)
            | Self::Timeout(message)
            | Self::Http { message, .. } => message,
        }
    }

    /// Returns true if sending the same request again may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ServerBusy(_))
    }
}

/// Errors returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request fields violate the API's rules; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// PubChem answered with a non-2xx status.
    #[error("PubChem HTTP error: {0}")]
    Http(#[from] PubChemHttpError),

    /// No response could be obtained.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// The search was cancelled by the caller.
    #[error("search cancelled")]
    Cancelled,
}

impl SearchError {
    /// Returns the HTTP error, if PubChem answered with one.
    #[must_use]
    pub const fn as_http(&self) -> Option<&PubChemHttpError> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if the search failed with a retryable HTTP status.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_retryable())
    }
}

/// Result type alias for searches.
pub type SearchResult<T> = Result<T, SearchError>;
