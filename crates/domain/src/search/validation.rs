//! Field interdependency checks shared by the search variants.
//!
//! Every auxiliary field is gated by a condition on another field: it must be
//! present (and non-empty) exactly when the condition holds. Checks return the
//! violation they found, if any, so callers can collect all of them.

use std::fmt;

use thiserror::Error;

use crate::identifier::Identifier;
use crate::vocabulary::{AssayType, XrefKind, XrefsKind};

/// Request field named by a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `identifiers`
    Identifiers,
    /// `sourceid`
    SourceId,
    /// `xref`
    Xref,
    /// `xrefs`
    Xrefs,
    /// `fast_search`
    FastSearch,
    /// `compound_property`
    CompoundProperty,
    /// `target`
    Target,
    /// `targets`
    Targets,
}

impl Field {
    /// Returns the field name as it appears in a serialized query.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifiers => "identifiers",
            Self::SourceId => "sourceid",
            Self::Xref => "xref",
            Self::Xrefs => "xrefs",
            Self::FastSearch => "fast_search",
            Self::CompoundProperty => "compound_property",
            Self::Target => "target",
            Self::Targets => "targets",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated request invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// No identifiers were given.
    #[error("identifiers must contain at least one value")]
    EmptyIdentifiers,

    /// A gated field is absent although its condition holds.
    #[error("{field} must be specified when {condition}")]
    Missing {
        /// The absent field.
        field: Field,
        /// The gating condition, e.g. "namespace is `xref`".
        condition: &'static str,
    },

    /// A gated field is present although its condition does not hold.
    #[error("{field} must not be set unless {condition}")]
    Forbidden {
        /// The unexpected field.
        field: Field,
        /// The gating condition, e.g. "namespace is `xref`".
        condition: &'static str,
    },

    /// The assay `type` namespace takes exactly one keyword.
    #[error("namespace `type` takes exactly one identifier, got {count}")]
    AssayTypeArity {
        /// Number of identifiers given.
        count: usize,
    },

    /// The assay `type` identifier is not a known assay type.
    #[error("`{value}` is not an assay type, expected one of: {}", assay_type_list())]
    UnknownAssayType {
        /// The rejected identifier.
        value: String,
    },
}

impl Violation {
    /// Returns the field this violation is about.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Missing { field, .. } | Self::Forbidden { field, .. } => *field,
            Self::EmptyIdentifiers | Self::AssayTypeArity { .. } | Self::UnknownAssayType { .. } => {
                Field::Identifiers
            }
        }
    }
}

fn assay_type_list() -> String {
    AssayType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A search request failed validation.
///
/// Holds every violated invariant, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid search request: {}", render_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Creates an error from a non-empty list of violations.
    #[must_use]
    pub const fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the violated invariants.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns true if some violation concerns `field`.
    #[must_use]
    pub fn concerns(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field() == field)
    }
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turns collected violations into a result.
///
/// # Errors
///
/// Returns a `ValidationError` if `violations` is not empty.
pub fn into_result(violations: Vec<Violation>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}

/// Checks the structural invariant that precedes every per-field rule.
///
/// # Errors
///
/// Returns a `ValidationError` holding only `EmptyIdentifiers`.
pub fn check_identifiers(identifiers: &[Identifier]) -> Result<(), ValidationError> {
    if identifiers.is_empty() {
        Err(ValidationError::new(vec![Violation::EmptyIdentifiers]))
    } else {
        Ok(())
    }
}

/// Checks that `field` is present exactly when `condition_holds`.
#[must_use]
pub const fn gate(
    field: Field,
    condition: &'static str,
    condition_holds: bool,
    present: bool,
) -> Option<Violation> {
    match (condition_holds, present) {
        (true, false) => Some(Violation::Missing { field, condition }),
        (false, true) => Some(Violation::Forbidden { field, condition }),
        _ => None,
    }
}

/// `xref` is required iff the namespace is `xref`.
#[must_use]
pub const fn check_xref(namespace_is_xref: bool, xref: Option<XrefKind>) -> Option<Violation> {
    gate(
        Field::Xref,
        "namespace is `xref`",
        namespace_is_xref,
        xref.is_some(),
    )
}

/// `xrefs` is required iff the operation is `xrefs`.
#[must_use]
pub const fn check_xrefs(operation_is_xrefs: bool, xrefs: &[XrefsKind]) -> Option<Violation> {
    gate(
        Field::Xrefs,
        "operation is `xrefs`",
        operation_is_xrefs,
        !xrefs.is_empty(),
    )
}
