//! Compound domain vocabularies

vocabulary! {
    /// How compound identifiers are interpreted.
    ///
    /// Includes the fast-search namespaces, which additionally need a
    /// [`FastSearchInput`] selector.
    pub enum CompoundNamespace ("compound namespace") {
        Cid => "cid",
        Name => "name",
        Smiles => "smiles",
        Inchi => "inchi",
        Sdf => "sdf",
        InchiKey => "inchikey",
        Formula => "formula",
        Xref => "xref",
        ListKey => "listkey",
        FastIdentity => "fastidentity",
        FastSimilarity2d => "fastsimilarity_2d",
        FastSimilarity3d => "fastsimilarity_3d",
        FastSubstructure => "fastsubstructure",
        FastSuperstructure => "fastsuperstructure",
        FastFormula => "fastformula",
    }
}

impl CompoundNamespace {
    /// The fast-search namespaces.
    pub const FAST_SEARCH: &'static [Self] = &[
        Self::FastIdentity,
        Self::FastSimilarity2d,
        Self::FastSimilarity3d,
        Self::FastSubstructure,
        Self::FastSuperstructure,
        Self::FastFormula,
    ];

    /// Returns true for the fast (identity/similarity/structure) searches.
    #[must_use]
    pub fn is_fast_search(self) -> bool {
        Self::FAST_SEARCH.contains(&self)
    }
}

vocabulary! {
    /// Input kind of a fast search (`fast_search`).
    pub enum FastSearchInput ("fast search input") {
        Smiles => "smiles",
        Smarts => "smarts",
        Inchi => "inchi",
        Sdf => "sdf",
        Cid => "cid",
    }
}

vocabulary! {
    /// What to retrieve for the resolved compounds.
    #[derive(Default)]
    pub enum CompoundOperation ("compound operation") {
        #[default]
        Record => "record",
        Property => "property",
        Synonyms => "synonyms",
        Sids => "sids",
        Cids => "cids",
        Aids => "aids",
        AssaySummary => "assaysummary",
        Classification => "classification",
        Xrefs => "xrefs",
        Description => "description",
        Conformers => "conformers",
    }
}

vocabulary! {
    /// Computed compound property for the `property` operation.
    pub enum CompoundProperty ("compound property") {
        MolecularFormula => "MolecularFormula",
        MolecularWeight => "MolecularWeight",
        CanonicalSmiles => "CanonicalSMILES",
        IsomericSmiles => "IsomericSMILES",
        Inchi => "InChI",
        InchiKey => "InChIKey",
        IupacName => "IUPACName",
        Title => "Title",
        XLogP => "XLogP",
        ExactMass => "ExactMass",
        MonoisotopicMass => "MonoisotopicMass",
        Tpsa => "TPSA",
        Complexity => "Complexity",
        Charge => "Charge",
        HBondDonorCount => "HBondDonorCount",
        HBondAcceptorCount => "HBondAcceptorCount",
        RotatableBondCount => "RotatableBondCount",
        HeavyAtomCount => "HeavyAtomCount",
        IsotopeAtomCount => "IsotopeAtomCount",
        AtomStereoCount => "AtomStereoCount",
        DefinedAtomStereoCount => "DefinedAtomStereoCount",
        UndefinedAtomStereoCount => "UndefinedAtomStereoCount",
        BondStereoCount => "BondStereoCount",
        DefinedBondStereoCount => "DefinedBondStereoCount",
        UndefinedBondStereoCount => "UndefinedBondStereoCount",
        CovalentUnitCount => "CovalentUnitCount",
        PatentCount => "PatentCount",
        PatentFamilyCount => "PatentFamilyCount",
        LiteratureCount => "LiteratureCount",
        Volume3d => "Volume3D",
        XStericQuadrupole3d => "XStericQuadrupole3D",
        YStericQuadrupole3d => "YStericQuadrupole3D",
        ZStericQuadrupole3d => "ZStericQuadrupole3D",
        FeatureCount3d => "FeatureCount3D",
        FeatureAcceptorCount3d => "FeatureAcceptorCount3D",
        FeatureDonorCount3d => "FeatureDonorCount3D",
        FeatureAnionCount3d => "FeatureAnionCount3D",
        FeatureCationCount3d => "FeatureCationCount3D",
        FeatureRingCount3d => "FeatureRingCount3D",
        FeatureHydrophobeCount3d => "FeatureHydrophobeCount3D",
        ConformerModelRmsd3d => "ConformerModelRMSD3D",
        EffectiveRotorCount3d => "EffectiveRotorCount3D",
        ConformerCount3d => "ConformerCount3D",
        Fingerprint2d => "Fingerprint2D",
    }
}
