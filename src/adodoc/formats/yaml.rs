//! YAML dump of the extraction

use super::registry::Formatter;
use crate::adodoc::error::FormatError;
use crate::adodoc::pipeline::Extraction;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, extraction: &Extraction) -> Result<String, FormatError> {
        serde_yaml::to_string(&extraction.report())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn extension(&self) -> &str {
        "yml"
    }

    fn description(&self) -> &str {
        "Program ranges, docstrings, signatures and diagnostics as YAML"
    }
}
