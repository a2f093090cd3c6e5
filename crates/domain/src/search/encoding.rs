//! Path and body value encoding

use std::fmt::Display;

use crate::identifier::{Identifier, join_identifiers};

/// Tag PubChem requires in front of InChI strings sent in a body.
pub const INCHI_PREFIX: &str = "InChI=";

/// Percent-encodes a value for use as a single path segment.
///
/// `/` is rewritten to `.` so a value can never split into two segments.
#[must_use]
pub fn encode_path_value(value: &str) -> String {
    value
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join(".")
}

/// Joins and encodes identifiers for path embedding.
#[must_use]
pub fn path_identifiers(identifiers: &[Identifier]) -> String {
    encode_path_value(&join_identifiers(identifiers))
}

/// Encodes only the first identifier for path embedding.
#[must_use]
pub fn first_path_identifier(identifiers: &[Identifier]) -> String {
    identifiers
        .first()
        .map(|id| encode_path_value(&id.to_string()))
        .unwrap_or_default()
}

/// Prefixes an InChI body value with `InChI=` unless it already has it.
#[must_use]
pub fn inchi_value(value: String) -> String {
    if value.starts_with(INCHI_PREFIX) {
        value
    } else {
        format!("{INCHI_PREFIX}{value}")
    }
}

/// Joins vocabulary values with `,` for an operation segment.
#[must_use]
pub fn join_names<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
