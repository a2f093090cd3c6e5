//! Search requests for the three PubChem domains.
//!
//! Each domain has a plain query type (all fields public, serde friendly) and
//! a validated search type built from it. Validation runs once, when the query
//! is converted; a validated search is immutable and renders deterministically.

mod assay;
mod compound;
mod encoding;
mod rendered;
mod substance;
pub mod validation;

pub use assay::{AssayQuery, AssaySearch};
pub use compound::{CompoundQuery, CompoundSearch};
pub use encoding::{INCHI_PREFIX, encode_path_value};
pub use rendered::{InputSegment, RenderedRequest};
pub use substance::{SubstanceQuery, SubstanceSearch};
pub use validation::{Field, ValidationError, Violation};

use crate::vocabulary::{Domain, OutputFormat};

/// Fixed origin and base path of the PUG REST API.
pub const PROLOG: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

/// A validated search that can be rendered into a request.
pub trait SearchRequest {
    /// The record domain this search targets.
    fn domain(&self) -> Domain;

    /// The requested output format.
    fn output(&self) -> OutputFormat;

    /// Renders the input path segment and the body entries.
    fn render_input(&self) -> InputSegment;

    /// Renders the operation path segment.
    fn render_operation(&self) -> String;

    /// Renders the full request against `prolog`.
    ///
    /// The URI is `prolog/domain/input/operation/output`.
    fn render(&self, prolog: &str) -> RenderedRequest {
        let input = self.render_input();
        let uri = format!(
            "{}/{}/{}/{}/{}",
            prolog.trim_end_matches('/'),
            self.domain(),
            input.path,
            self.render_operation(),
            self.output()
        );
        RenderedRequest::new(uri, input.body)
    }
}
