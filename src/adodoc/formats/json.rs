//! JSON dump of the extraction

use super::registry::Formatter;
use crate::adodoc::error::FormatError;
use crate::adodoc::pipeline::Extraction;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, extraction: &Extraction) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(&extraction.report())
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Program ranges, docstrings, signatures and diagnostics as JSON"
    }
}
