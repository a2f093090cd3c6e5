//! Raw response type
//!
//! The payload is kept exactly as received. Turning it into compounds,
//! substances or assays is left to the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns the canonical reason phrase for the statuses PubChem uses.
    #[must_use]
    pub const fn reason_phrase(self) -> &'static str {
        match self.0 {
            200 => "OK",
            202 => "Accepted",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// A response as received from PubChem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Content-Type header value, if the server sent one.
    pub content_type: Option<String>,
    /// Response body, unparsed.
    pub body: Vec<u8>,
    /// Time from sending the request to reading the full body.
    pub duration: Duration,
}

impl RawResponse {
    /// Creates a new `RawResponse`.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        content_type: Option<String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status: status.into(),
            content_type,
            body,
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as UTF-8 text, if it is valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Returns the body as a lossy UTF-8 string.
    #[must_use]
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Consumes the response and returns the body bytes.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code() {
        assert!(StatusCode::new(200).is_success());
        assert!(!StatusCode::new(503).is_success());
        assert_eq!(StatusCode::new(503).to_string(), "503 Service Unavailable");
        assert_eq!(StatusCode::new(418).reason_phrase(), "Unknown");
    }

    #[test]
    fn test_body_views() {
        let response = RawResponse::new(
            200,
            Some("application/json".to_string()),
            br#"{"PC_Compounds": []}"#.to_vec(),
            Duration::from_millis(12),
        );
        assert!(response.is_success());
        assert_eq!(response.text(), Some(r#"{"PC_Compounds": []}"#));

        let binary = RawResponse::new(200, None, vec![0x89, 0x50, 0xff], Duration::ZERO);
        assert_eq!(binary.text(), None);
        assert_eq!(binary.text_lossy().chars().count(), 3);
        assert_eq!(binary.into_body(), vec![0x89, 0x50, 0xff]);
    }
}
