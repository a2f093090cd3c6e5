//! Record domains and output formats

vocabulary! {
    /// Top-level PubChem record category, the first path segment after the prolog.
    pub enum Domain ("domain") {
        Substance => "substance",
        Compound => "compound",
        Assay => "assay",
    }
}

vocabulary! {
    /// Output format requested from the server, the last path segment.
    pub enum OutputFormat ("output format") {
        Xml => "XML",
        Asnt => "ASNT",
        Asnb => "ASNB",
        Json => "JSON",
        Jsonp => "JSONP",
        Sdf => "SDF",
        Csv => "CSV",
        Png => "PNG",
        Txt => "TXT",
    }
}

impl OutputFormat {
    /// Returns true if the payload in this format is binary.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Asnb | Self::Png)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_from_str_is_exact() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSONP".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonp);
        assert!("json".parse::<OutputFormat>().is_err());
        assert!("YAML".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_display() {
        assert_eq!(OutputFormat::Sdf.to_string(), "SDF");
        assert_eq!(Domain::Compound.to_string(), "compound");
    }

    #[test]
    fn test_output_serde_uses_upstream_spelling() {
        let json = serde_json::to_string(&OutputFormat::Asnt).unwrap();
        assert_eq!(json, "\"ASNT\"");
        let parsed: OutputFormat = serde_json::from_str("\"TXT\"").unwrap();
        assert_eq!(parsed, OutputFormat::Txt);
    }

    #[test]
    fn test_all_formats_listed() {
        assert_eq!(OutputFormat::ALL.len(), 9);
        assert!(OutputFormat::Png.is_binary());
        assert!(!OutputFormat::Csv.is_binary());
    }
}
