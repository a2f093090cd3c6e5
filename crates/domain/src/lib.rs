//! PubChem Domain - request model and validation rules
//!
//! This crate defines the typed request model for the PubChem PUG REST API:
//! the closed vocabularies, the three search variants (substance, compound,
//! assay) with their field interdependency rules, and the rendering of a
//! validated search into a URI plus form body.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod identifier;
pub mod response;
pub mod search;
pub mod vocabulary;

pub use error::{DomainError, DomainResult};
pub use identifier::Identifier;
pub use response::{RawResponse, StatusCode};
pub use search::{
    AssayQuery, AssaySearch, CompoundQuery, CompoundSearch, Field, PROLOG, RenderedRequest,
    SearchRequest, SubstanceQuery, SubstanceSearch, ValidationError, Violation,
};
pub use vocabulary::{
    AssayNamespace, AssayOperation, AssayType, CompoundNamespace, CompoundOperation,
    CompoundProperty, Domain, FastSearchInput, OutputFormat, SubstanceNamespace,
    SubstanceOperation, TargetKind, TargetsKind, XrefKind, XrefsKind,
};
