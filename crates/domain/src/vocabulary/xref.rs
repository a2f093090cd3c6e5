//! Cross-reference vocabularies
//!
//! `XrefKind` selects the registry an input identifier belongs to (the `xref`
//! namespace). `XrefsKind` selects which cross-references the `xrefs`
//! operation returns. The second set is a superset of the first, but the two
//! are kept as distinct types so one can never be passed for the other.

vocabulary! {
    /// Registry kind for the `xref` input namespace.
    pub enum XrefKind ("xref kind") {
        RegistryId => "RegistryID",
        Rn => "RN",
        PubMedId => "PubMedID",
        MmdbId => "MMDBID",
        ProteinGi => "ProteinGI",
        NucleotideGi => "NucleotideGI",
        TaxonomyId => "TaxonomyID",
        MimId => "MIMID",
        GeneId => "GeneID",
        ProbeId => "ProbeID",
        PatentId => "PatentID",
    }
}

vocabulary! {
    /// Cross-reference kind requested by the `xrefs` operation.
    pub enum XrefsKind ("xrefs kind") {
        RegistryId => "RegistryID",
        Rn => "RN",
        PubMedId => "PubMedID",
        MmdbId => "MMDBID",
        ProteinGi => "ProteinGI",
        NucleotideGi => "NucleotideGI",
        TaxonomyId => "TaxonomyID",
        MimId => "MIMID",
        GeneId => "GeneID",
        ProbeId => "ProbeID",
        PatentId => "PatentID",
        DbUrl => "DBURL",
        SbUrl => "SBURL",
        SourceName => "SourceName",
        SourceCategory => "SourceCategory",
    }
}

impl From<XrefKind> for XrefsKind {
    fn from(kind: XrefKind) -> Self {
        match kind {
            XrefKind::RegistryId => Self::RegistryId,
            XrefKind::Rn => Self::Rn,
            XrefKind::PubMedId => Self::PubMedId,
            XrefKind::MmdbId => Self::MmdbId,
            XrefKind::ProteinGi => Self::ProteinGi,
            XrefKind::NucleotideGi => Self::NucleotideGi,
            XrefKind::TaxonomyId => Self::TaxonomyId,
            XrefKind::MimId => Self::MimId,
            XrefKind::GeneId => Self::GeneId,
            XrefKind::ProbeId => Self::ProbeId,
            XrefKind::PatentId => Self::PatentId,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plural_only_kinds_are_not_xref_kinds() {
        assert!("SourceName".parse::<XrefsKind>().is_ok());
        assert!("SourceName".parse::<XrefKind>().is_err());
        assert!("DBURL".parse::<XrefKind>().is_err());
    }

    #[test]
    fn test_every_xref_kind_lifts_to_same_spelling() {
        for kind in XrefKind::ALL {
            assert_eq!(XrefsKind::from(*kind).as_str(), kind.as_str());
        }
        assert_eq!(XrefsKind::ALL.len(), XrefKind::ALL.len() + 4);
    }

    #[test]
    fn test_unknown_kind_names_vocabulary() {
        let err = "Registry".parse::<XrefKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown xref kind: `Registry`");
    }
}
