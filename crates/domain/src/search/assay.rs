//! Assay searches

use serde::{Deserialize, Serialize};

use super::encoding::{first_path_identifier, join_names, path_identifiers};
use super::rendered::InputSegment;
use super::validation::{self, Field, ValidationError, Violation};
use super::SearchRequest;
use crate::identifier::{Identifier, join_identifiers};
use crate::vocabulary::{
    AssayNamespace, AssayOperation, AssayType, Domain, OutputFormat, TargetKind, TargetsKind,
};

/// Unvalidated fields of an assay search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssayQuery {
    /// How `identifiers` are interpreted.
    pub namespace: AssayNamespace,
    /// Target identifier kind; only with namespace `target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetKind>,
    /// Identifiers to search for.
    pub identifiers: Vec<Identifier>,
    /// What to retrieve.
    #[serde(default)]
    pub operation: AssayOperation,
    /// Target kinds to list; only with operation `targets`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<TargetsKind>,
    /// Output format.
    pub output: OutputFormat,
}

impl AssayQuery {
    /// Creates a `record` query.
    #[must_use]
    pub fn new<I>(namespace: AssayNamespace, identifiers: I, output: OutputFormat) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        Self {
            namespace,
            target: None,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            operation: AssayOperation::default(),
            targets: Vec::new(),
            output,
        }
    }

    /// Creates a query for all assays of one type (namespace `type`).
    #[must_use]
    pub fn by_type(assay_type: AssayType, output: OutputFormat) -> Self {
        Self::new(AssayNamespace::Type, [assay_type.as_str()], output)
    }

    /// Sets the operation.
    #[must_use]
    pub const fn with_operation(mut self, operation: AssayOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Sets the target identifier kind.
    #[must_use]
    pub const fn with_target(mut self, target: TargetKind) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the target kinds to list.
    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = TargetsKind>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    /// Validates the query.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn validate(self) -> Result<AssaySearch, ValidationError> {
        AssaySearch::new(self)
    }

    fn check(&self) -> Result<(), ValidationError> {
        validation::check_identifiers(&self.identifiers)?;

        let mut violations: Vec<Violation> = [
            validation::gate(
                Field::Target,
                "namespace is `target`",
                self.namespace == AssayNamespace::Target,
                self.target.is_some(),
            ),
            validation::gate(
                Field::Targets,
                "operation is `targets`",
                self.operation == AssayOperation::Targets,
                !self.targets.is_empty(),
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        if self.namespace == AssayNamespace::Type {
            violations.extend(self.check_assay_type());
        }

        validation::into_result(violations)
    }

    fn check_assay_type(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.identifiers.len() != 1 {
            violations.push(Violation::AssayTypeArity {
                count: self.identifiers.len(),
            });
        }
        if let Some(first) = self.identifiers.first() {
            let keyword = first.to_string();
            if keyword.parse::<AssayType>().is_err() {
                violations.push(Violation::UnknownAssayType { value: keyword });
            }
        }
        violations
    }
}

/// A validated assay search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AssayQuery", into = "AssayQuery")]
pub struct AssaySearch {
    query: AssayQuery,
}

impl AssaySearch {
    /// Validates `query` into a search.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn new(query: AssayQuery) -> Result<Self, ValidationError> {
        query.check()?;
        Ok(Self { query })
    }

    /// Returns the validated fields.
    #[must_use]
    pub const fn query(&self) -> &AssayQuery {
        &self.query
    }
}

impl TryFrom<AssayQuery> for AssaySearch {
    type Error = ValidationError;

    fn try_from(query: AssayQuery) -> Result<Self, Self::Error> {
        Self::new(query)
    }
}

impl From<AssaySearch> for AssayQuery {
    fn from(search: AssaySearch) -> Self {
        search.query
    }
}

impl SearchRequest for AssaySearch {
    fn domain(&self) -> Domain {
        Domain::Assay
    }

    fn output(&self) -> OutputFormat {
        self.query.output
    }

    fn render_input(&self) -> InputSegment {
        let query = &self.query;
        let ids = &query.identifiers;

        match (query.namespace, query.target) {
            (AssayNamespace::Aid, _) => InputSegment::with_body("aid", "aid", join_identifiers(ids)),
            (AssayNamespace::Type, _) => {
                InputSegment::path(format!("type/{}", first_path_identifier(ids)))
            }
            // The body key is the target kind itself, not the word "target".
            (AssayNamespace::Target, Some(kind)) => InputSegment::with_body(
                format!("target/{kind}"),
                kind.as_str(),
                ids.first().map(ToString::to_string).unwrap_or_default(),
            ),
            (ns, _) => InputSegment::path(format!("{ns}/{}", path_identifiers(ids))),
        }
    }

    fn render_operation(&self) -> String {
        match self.query.operation {
            AssayOperation::Targets => format!("targets/{}", join_names(&self.query.targets)),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::search::PROLOG;
    use pretty_assertions::assert_eq;

    fn aid_query() -> AssayQuery {
        AssayQuery::new(AssayNamespace::Aid, [1000], OutputFormat::Json)
    }

    #[test]
    fn test_aid_record() {
        let rendered = aid_query().validate().unwrap().render(PROLOG);
        assert_eq!(
            rendered.uri(),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/assay/aid/record/JSON"
        );
        assert_eq!(rendered.body_value("aid"), Some("1000"));
    }

    #[test]
    fn test_type_keyword_must_be_known() {
        let bad = AssayQuery::new(AssayNamespace::Type, ["invalidkeyword"], OutputFormat::Json);
        let err = bad.validate().unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::UnknownAssayType {
                value: "invalidkeyword".to_string()
            }]
        );

        let good = AssayQuery::new(AssayNamespace::Type, ["confirmatory"], OutputFormat::Json)
            .with_operation(AssayOperation::Aids);
        let rendered = good.validate().unwrap().render(PROLOG);
        assert_eq!(
            rendered.uri(),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/assay/type/confirmatory/aids/JSON"
        );
        assert!(rendered.body().is_empty());
    }

    #[test]
    fn test_type_takes_exactly_one_identifier() {
        let query = AssayQuery::new(AssayNamespace::Type, ["confirmatory", "panel"], OutputFormat::Json);
        let err = query.validate().unwrap_err();
        assert_eq!(err.violations(), &[Violation::AssayTypeArity { count: 2 }]);
    }

    #[test]
    fn test_type_rules_only_apply_to_type_namespace() {
        let query = AssayQuery::new(AssayNamespace::SourceAll, ["DTP.NCI", "ChEMBL"], OutputFormat::Json);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_by_type_helper() {
        let search = AssayQuery::by_type(AssayType::DoseResponse, OutputFormat::Json)
            .with_operation(AssayOperation::Aids)
            .validate()
            .unwrap();
        assert_eq!(search.render_input().path, "type/doseresponse");
    }

    #[test]
    fn test_target_gate() {
        let missing = AssayQuery::new(AssayNamespace::Target, ["USP2"], OutputFormat::Json);
        assert!(missing.clone().validate().unwrap_err().concerns(Field::Target));
        assert!(missing.with_target(TargetKind::GeneSymbol).validate().is_ok());

        let forbidden = aid_query().with_target(TargetKind::GeneSymbol);
        assert!(forbidden.validate().unwrap_err().concerns(Field::Target));
    }

    #[test]
    fn test_targets_gate() {
        let missing = aid_query().with_operation(AssayOperation::Targets);
        assert!(missing.clone().validate().unwrap_err().concerns(Field::Targets));
        assert!(missing.with_targets([TargetsKind::GeneId]).validate().is_ok());

        let forbidden = aid_query().with_targets([TargetsKind::GeneId]);
        assert!(forbidden.validate().unwrap_err().concerns(Field::Targets));
    }

    #[test]
    fn test_empty_identifiers_rejected() {
        let query = AssayQuery::new(AssayNamespace::Type, Vec::<Identifier>::new(), OutputFormat::Json);
        assert_eq!(
            query.validate().unwrap_err().violations(),
            &[Violation::EmptyIdentifiers]
        );
    }

    #[test]
    fn test_target_body_keyed_by_kind_with_first_identifier() {
        let rendered = AssayQuery::new(AssayNamespace::Target, ["USP2", "USP7"], OutputFormat::Json)
            .with_target(TargetKind::GeneSymbol)
            .with_operation(AssayOperation::Aids)
            .validate()
            .unwrap()
            .render(PROLOG);
        assert_eq!(
            rendered.uri(),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/assay/target/genesymbol/aids/JSON"
        );
        assert_eq!(rendered.body().len(), 1);
        assert_eq!(rendered.body_value("genesymbol"), Some("USP2"));
    }

    #[test]
    fn test_targets_operation_segment() {
        let search = aid_query()
            .with_operation(AssayOperation::Targets)
            .with_targets([TargetsKind::ProteinGi, TargetsKind::GeneSymbol])
            .validate()
            .unwrap();
        assert_eq!(search.render_operation(), "targets/ProteinGI,GeneSymbol");
    }

    #[test]
    fn test_activity_goes_into_path() {
        let activity = AssayQuery::new(AssayNamespace::Activity, ["EC50"], OutputFormat::Json)
            .with_operation(AssayOperation::Aids)
            .validate()
            .unwrap();
        assert_eq!(activity.render_input(), InputSegment::path("activity/EC50"));
    }

    #[test]
    fn test_gates_and_type_rules_collected_together() {
        let query = AssayQuery::new(AssayNamespace::Type, ["bogus", "extra"], OutputFormat::Json)
            .with_target(TargetKind::Gi)
            .with_operation(AssayOperation::Targets);
        let err = query.validate().unwrap_err();
        assert_eq!(err.violations().len(), 4);
        assert!(err.concerns(Field::Target));
        assert!(err.concerns(Field::Targets));
    }
}
