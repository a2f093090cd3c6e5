//! Assay domain vocabularies

vocabulary! {
    /// How assay identifiers are interpreted.
    pub enum AssayNamespace ("assay namespace") {
        Aid => "aid",
        ListKey => "listkey",
        Type => "type",
        SourceAll => "sourceall",
        Target => "target",
        Activity => "activity",
    }
}

vocabulary! {
    /// What to retrieve for the resolved assays.
    #[derive(Default)]
    pub enum AssayOperation ("assay operation") {
        #[default]
        Record => "record",
        Concise => "concise",
        Aids => "aids",
        Sids => "sids",
        Cids => "cids",
        Description => "description",
        Targets => "targets",
        DoseResponse => "doseresponse",
        Summary => "summary",
        Classification => "classification",
    }
}

vocabulary! {
    /// Assay type keyword accepted by the `type` namespace.
    pub enum AssayType ("assay type") {
        All => "all",
        Confirmatory => "confirmatory",
        DoseResponse => "doseresponse",
        OnHold => "onhold",
        Panel => "panel",
        Rnai => "rnai",
        Screening => "screening",
        Summary => "summary",
        CellBased => "cellbased",
        Biochemical => "biochemical",
        InVivo => "invivo",
        InVitro => "invitro",
        ActiveConcentrationSpecified => "activeconcentrationspecified",
    }
}

vocabulary! {
    /// Target identifier kind for the `target` namespace.
    pub enum TargetKind ("target kind") {
        Gi => "gi",
        ProteinName => "proteinname",
        GeneId => "geneid",
        GeneSymbol => "genesymbol",
        Accession => "accession",
    }
}

vocabulary! {
    /// Target kind returned by the `targets` operation.
    pub enum TargetsKind ("targets kind") {
        ProteinGi => "ProteinGI",
        ProteinName => "ProteinName",
        GeneId => "GeneID",
        GeneSymbol => "GeneSymbol",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_operation_is_record() {
        assert_eq!(AssayOperation::default(), AssayOperation::Record);
    }

    #[test]
    fn test_assay_type_keywords() {
        assert_eq!(
            "confirmatory".parse::<AssayType>().unwrap(),
            AssayType::Confirmatory
        );
        assert!("invalidkeyword".parse::<AssayType>().is_err());
        assert_eq!(AssayType::ALL.len(), 13);
    }

    #[test]
    fn test_target_and_targets_are_distinct_spellings() {
        assert!("geneid".parse::<TargetKind>().is_ok());
        assert!("geneid".parse::<TargetsKind>().is_err());
        assert!("GeneID".parse::<TargetsKind>().is_ok());
    }
}
