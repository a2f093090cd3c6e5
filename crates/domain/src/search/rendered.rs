//! Rendered request type

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

/// A fully rendered PubChem request: target URI plus form body.
///
/// Produced once per search and re-sent unchanged on retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRequest {
    uri: String,
    body: BTreeMap<String, String>,
}

impl RenderedRequest {
    /// Creates a rendered request.
    #[must_use]
    pub const fn new(uri: String, body: BTreeMap<String, String>) -> Self {
        Self { uri, body }
    }

    /// Returns the fully-qualified URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the form body, ordered by key.
    #[must_use]
    pub const fn body(&self) -> &BTreeMap<String, String> {
        &self.body
    }

    /// Returns the body value for `key`, if any.
    #[must_use]
    pub fn body_value(&self, key: &str) -> Option<&str> {
        self.body.get(key).map(String::as_str)
    }

    /// Parses the URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the prolog produced a malformed URI.
    pub fn parse_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.uri)
    }
}

/// The input part of a request: path segment plus body entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputSegment {
    /// Path segment placed between the domain and the operation.
    pub path: String,
    /// Body entries contributed by the input.
    pub body: BTreeMap<String, String>,
}

impl InputSegment {
    /// An input carried entirely in the path.
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: BTreeMap::new(),
        }
    }

    /// An input whose identifiers travel in the body under `key`.
    #[must_use]
    pub fn with_body(
        path: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut body = BTreeMap::new();
        body.insert(key.into(), value.into());
        Self {
            path: path.into(),
            body,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_url() {
        let rendered = RenderedRequest::new(
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/cid/record/JSON".to_string(),
            BTreeMap::new(),
        );
        let url = rendered.parse_url().unwrap();
        assert_eq!(url.host_str(), Some("pubchem.ncbi.nlm.nih.gov"));
        assert_eq!(url.path(), "/rest/pug/compound/cid/record/JSON");
    }

    #[test]
    fn test_input_with_body() {
        let input = InputSegment::with_body("sid", "sid", "1234");
        assert_eq!(input.path, "sid");
        assert_eq!(input.body.get("sid").map(String::as_str), Some("1234"));
        assert!(InputSegment::path("listkey/123").body.is_empty());
    }
}
