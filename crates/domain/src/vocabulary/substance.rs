//! Substance domain vocabularies

vocabulary! {
    /// How substance identifiers are interpreted.
    pub enum SubstanceNamespace ("substance namespace") {
        Sid => "sid",
        SourceId => "sourceid",
        SourceAll => "sourceall",
        Name => "name",
        Xref => "xref",
        ListKey => "listkey",
    }
}

vocabulary! {
    /// What to retrieve for the resolved substances.
    #[derive(Default)]
    pub enum SubstanceOperation ("substance operation") {
        #[default]
        Record => "record",
        Synonyms => "synonyms",
        Sids => "sids",
        Cids => "cids",
        Aids => "aids",
        AssaySummary => "assaysummary",
        Classification => "classification",
        Xrefs => "xrefs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_operation_is_record() {
        assert_eq!(SubstanceOperation::default(), SubstanceOperation::Record);
        assert_eq!(SubstanceOperation::default().as_str(), "record");
    }
}
