//! HTTP Client port

use std::future::Future;
use std::sync::Arc;

use pubchem_domain::{RawResponse, RenderedRequest};
use thiserror::Error;
use tokio::sync::watch;

/// Port for sending rendered PubChem requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// POSTs the request body, form-encoded, to the request URI.
    ///
    /// Any status code is a successful exchange at this level; classifying
    /// non-2xx statuses is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained (network issues,
    /// timeout, malformed URI...).
    fn execute(
        &self,
        request: &RenderedRequest,
    ) -> impl Future<Output = Result<RawResponse, HttpClientError>> + Send;
}

/// Errors raised when no HTTP response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The request URI could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The form body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// The unresolved host.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Any other connection failure.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Redirect limit exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// The configured limit.
        max: usize,
    },

    /// Any other client failure.
    #[error("{0}")]
    Other(String),
}

/// Handle used to cancel a search from another task.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

/// Receiving side of a [`CancellationToken`], handed to the search.
#[derive(Debug, Clone)]
pub struct CancellationReceiver {
    receiver: watch::Receiver<bool>,
}

impl CancellationToken {
    /// Creates a token and its receiver.
    #[must_use]
    pub fn new() -> (Self, CancellationReceiver) {
        let (sender, receiver) = watch::channel(false);
        (
            Self {
                sender: Arc::new(sender),
            },
            CancellationReceiver { receiver },
        )
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns true once `cancel` has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl CancellationReceiver {
    /// Completes when cancellation is requested.
    ///
    /// Never completes if every token was dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Returns true if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_wakes_receiver() {
        let (token, mut receiver) = CancellationToken::new();
        assert!(!receiver.is_cancelled());

        let waiter = tokio::spawn(async move {
            receiver.cancelled().await;
        });
        token.cancel();

        assert!(tokio::time::timeout(Duration::from_secs(1), waiter).await.is_ok());
        assert!(token.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_token_never_cancels() {
        let (token, mut receiver) = CancellationToken::new();
        drop(token);

        let result = tokio::time::timeout(Duration::from_secs(60), receiver.cancelled()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HttpClientError::Timeout { timeout_ms: 30_000 }.to_string(),
            "request timed out after 30000 ms"
        );
        assert_eq!(
            HttpClientError::ConnectionRefused {
                host: "localhost".to_string(),
                port: 8080
            }
            .to_string(),
            "connection refused by localhost:8080"
        );
    }
}
