//! Compound searches

use serde::{Deserialize, Serialize};

use super::encoding::{first_path_identifier, inchi_value, join_names, path_identifiers};
use super::rendered::InputSegment;
use super::validation::{self, Field, ValidationError};
use super::SearchRequest;
use crate::identifier::{Identifier, join_identifiers};
use crate::vocabulary::{
    CompoundNamespace, CompoundOperation, CompoundProperty, Domain, FastSearchInput, OutputFormat,
    XrefKind, XrefsKind,
};

/// Unvalidated fields of a compound search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundQuery {
    /// How `identifiers` are interpreted.
    pub namespace: CompoundNamespace,
    /// Input kind of a fast search; only with a fast-search namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast_search: Option<FastSearchInput>,
    /// Registry of the identifier; only with namespace `xref`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<XrefKind>,
    /// Identifiers to search for.
    pub identifiers: Vec<Identifier>,
    /// What to retrieve.
    #[serde(default)]
    pub operation: CompoundOperation,
    /// Properties to compute; only with operation `property`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compound_property: Vec<CompoundProperty>,
    /// Cross-references to list; only with operation `xrefs`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<XrefsKind>,
    /// Output format.
    pub output: OutputFormat,
}

impl CompoundQuery {
    /// Creates a `record` query.
    #[must_use]
    pub fn new<I>(namespace: CompoundNamespace, identifiers: I, output: OutputFormat) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        Self {
            namespace,
            fast_search: None,
            xref: None,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            operation: CompoundOperation::default(),
            compound_property: Vec::new(),
            xrefs: Vec::new(),
            output,
        }
    }

    /// Sets the operation.
    #[must_use]
    pub const fn with_operation(mut self, operation: CompoundOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Sets the fast-search input kind.
    #[must_use]
    pub const fn with_fast_search(mut self, input: FastSearchInput) -> Self {
        self.fast_search = Some(input);
        self
    }

    /// Sets the identifier registry.
    #[must_use]
    pub const fn with_xref(mut self, xref: XrefKind) -> Self {
        self.xref = Some(xref);
        self
    }

    /// Sets the properties to compute.
    #[must_use]
    pub fn with_properties(mut self, properties: impl IntoIterator<Item = CompoundProperty>) -> Self {
        self.compound_property = properties.into_iter().collect();
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
    pub fn validate(self) -> Result<CompoundSearch, ValidationError> {
        CompoundSearch::new(self)
    }

    fn check(&self) -> Result<(), ValidationError> {
        validation::check_identifiers(&self.identifiers)?;

        let violations = [
            validation::gate(
                Field::FastSearch,
                "namespace is a fast search",
                self.namespace.is_fast_search(),
                self.fast_search.is_some(),
            ),
            validation::check_xref(self.namespace == CompoundNamespace::Xref, self.xref),
            validation::gate(
                Field::CompoundProperty,
                "operation is `property`",
                self.operation == CompoundOperation::Property,
                !self.compound_property.is_empty(),
            ),
            validation::check_xrefs(self.operation == CompoundOperation::Xrefs, &self.xrefs),
        ]
        .into_iter()
        .flatten()
        .collect();

        validation::into_result(violations)
    }
}

/// A validated compound search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CompoundQuery", into = "CompoundQuery")]
pub struct CompoundSearch {
    query: CompoundQuery,
}

impl CompoundSearch {
    /// Validates `query` into a search.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn new(query: CompoundQuery) -> Result<Self, ValidationError> {
        query.check()?;
        Ok(Self { query })
    }

    /// Returns the validated fields.
    #[must_use]
    pub const fn query(&self) -> &CompoundQuery {
        &self.query
    }
}

impl TryFrom<CompoundQuery> for CompoundSearch {
    type Error = ValidationError;

    fn try_from(query: CompoundQuery) -> Result<Self, Self::Error> {
        Self::new(query)
    }
}

impl From<CompoundSearch> for CompoundQuery {
    fn from(search: CompoundSearch) -> Self {
        search.query
    }
}

/// Body value for `key`, with the InChI tag added where PubChem needs it.
fn body_value(key: &str, identifiers: &[Identifier]) -> String {
    let joined = join_identifiers(identifiers);
    if key == "inchi" { inchi_value(joined) } else { joined }
}

impl SearchRequest for CompoundSearch {
    fn domain(&self) -> Domain {
        Domain::Compound
    }

    fn output(&self) -> OutputFormat {
        self.query.output
    }

    fn render_input(&self) -> InputSegment {
        use CompoundNamespace as Ns;

        let query = &self.query;
        let ids = &query.identifiers;

        match (query.namespace, query.fast_search, query.xref) {
            (ns @ (Ns::Cid | Ns::Name | Ns::Smiles | Ns::Inchi | Ns::Sdf | Ns::InchiKey), _, _) => {
                InputSegment::with_body(ns.as_str(), ns.as_str(), body_value(ns.as_str(), ids))
            }
            (Ns::Xref, _, Some(kind)) => {
                InputSegment::path(format!("xref/{kind}/{}", first_path_identifier(ids)))
            }
            (ns, Some(input), _) if ns.is_fast_search() && ns != Ns::FastFormula => {
                InputSegment::with_body(
                    format!("{ns}/{input}"),
                    input.as_str(),
                    body_value(input.as_str(), ids),
                )
            }
            (ns, _, _) => InputSegment::path(format!("{ns}/{}", path_identifiers(ids))),
        }
    }

    fn render_operation(&self) -> String {
        match self.query.operation {
            CompoundOperation::Property => {
                format!("property/{}", join_names(&self.query.compound_property))
            }
            CompoundOperation::Xrefs => format!("xrefs/{}", join_names(&self.query.xrefs)),
            other => other.to_string(),
        }
    }
}
