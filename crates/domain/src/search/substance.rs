//! Substance searches

use serde::{Deserialize, Serialize};

use super::encoding::{encode_path_value, first_path_identifier, join_names, path_identifiers};
use super::rendered::InputSegment;
use super::validation::{self, Field, ValidationError};
use super::SearchRequest;
use crate::identifier::{Identifier, join_identifiers};
use crate::vocabulary::{
    Domain, OutputFormat, SubstanceNamespace, SubstanceOperation, XrefKind, XrefsKind,
};

/// Unvalidated fields of a substance search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceQuery {
    /// How `identifiers` are interpreted.
    pub namespace: SubstanceNamespace,
    /// Deposition source name; only with namespace `sourceid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourceid: Option<String>,
    /// Registry of the identifier; only with namespace `xref`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<XrefKind>,
    /// Identifiers to search for.
    pub identifiers: Vec<Identifier>,
    /// What to retrieve.
    #[serde(default)]
    pub operation: SubstanceOperation,
    /// Cross-references to list; only with operation `xrefs`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<XrefsKind>,
    /// Output format.
    pub output: OutputFormat,
}

impl SubstanceQuery {
    /// Creates a `record` query.
    #[must_use]
    pub fn new<I>(namespace: SubstanceNamespace, identifiers: I, output: OutputFormat) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        Self {
            namespace,
            sourceid: None,
            xref: None,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            operation: SubstanceOperation::default(),
            xrefs: Vec::new(),
            output,
        }
    }

    /// Sets the operation.
    #[must_use]
    pub const fn with_operation(mut self, operation: SubstanceOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Sets the deposition source.
    #[must_use]
    pub fn with_sourceid(mut self, sourceid: impl Into<String>) -> Self {
        self.sourceid = Some(sourceid.into());
        self
    }

    /// Sets the identifier registry.
    #[must_use]
    pub const fn with_xref(mut self, xref: XrefKind) -> Self {
        self.xref = Some(xref);
        self
    }

    /// Sets the cross-references to list.
    #[must_use]
    pub fn with_xrefs(mut self, xrefs: impl IntoIterator<Item = XrefsKind>) -> Self {
        self.xrefs = xrefs.into_iter().collect();
        self
    }

    /// Validates the query.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn validate(self) -> Result<SubstanceSearch, ValidationError> {
        SubstanceSearch::new(self)
    }

    fn check(&self) -> Result<(), ValidationError> {
        validation::check_identifiers(&self.identifiers)?;

        let has_sourceid = self.sourceid.as_deref().is_some_and(|s| !s.is_empty());
        let violations = [
            validation::gate(
                Field::SourceId,
                "namespace is `sourceid`",
                self.namespace == SubstanceNamespace::SourceId,
                has_sourceid,
            ),
            validation::check_xref(self.namespace == SubstanceNamespace::Xref, self.xref),
            validation::check_xrefs(self.operation == SubstanceOperation::Xrefs, &self.xrefs),
        ]
        .into_iter()
        .flatten()
        .collect();

        validation::into_result(violations)
    }
}

/// A validated substance search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubstanceQuery", into = "SubstanceQuery")]
pub struct SubstanceSearch {
    query: SubstanceQuery,
}

impl SubstanceSearch {
    /// Validates `query` into a search.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn new(query: SubstanceQuery) -> Result<Self, ValidationError> {
        query.check()?;
        Ok(Self { query })
    }

    /// Returns the validated fields.
    #[must_use]
    pub const fn query(&self) -> &SubstanceQuery {
        &self.query
    }
}

impl TryFrom<SubstanceQuery> for SubstanceSearch {
    type Error = ValidationError;

    fn try_from(query: SubstanceQuery) -> Result<Self, Self::Error> {
        Self::new(query)
    }
}

impl From<SubstanceSearch> for SubstanceQuery {
    fn from(search: SubstanceSearch) -> Self {
        search.query
    }
}

impl SearchRequest for SubstanceSearch {
    fn domain(&self) -> Domain {
        Domain::Substance
    }

    fn output(&self) -> OutputFormat {
        self.query.output
    }

    fn render_input(&self) -> InputSegment {
        let query = &self.query;
        let ids = &query.identifiers;

        match (query.namespace, query.sourceid.as_deref(), query.xref) {
            (ns @ (SubstanceNamespace::Sid | SubstanceNamespace::Name), _, _) => {
                InputSegment::with_body(ns.as_str(), ns.as_str(), join_identifiers(ids))
            }
            (SubstanceNamespace::SourceId, Some(source), _) => InputSegment::path(format!(
                "sourceid/{}/{}",
                encode_path_value(source),
                path_identifiers(ids)
            )),
            (SubstanceNamespace::Xref, _, Some(kind)) => {
                InputSegment::path(format!("xref/{kind}/{}", first_path_identifier(ids)))
            }
            (ns, _, _) => InputSegment::path(format!("{ns}/{}", path_identifiers(ids))),
        }
    }

    fn render_operation(&self) -> String {
        match self.query.operation {
            SubstanceOperation::Xrefs => format!("xrefs/{}", join_names(&self.query.xrefs)),
            other => other.to_string(),
        }
    }
}
