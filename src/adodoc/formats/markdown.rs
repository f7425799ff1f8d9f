//! Markdown reference document

use super::registry::Formatter;
use crate::adodoc::error::FormatError;
use crate::adodoc::pipeline::Extraction;

pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn serialize(&self, extraction: &Extraction) -> Result<String, FormatError> {
        Ok(extraction.to_markdown())
    }

    fn extension(&self) -> &str {
        "md"
    }

    fn description(&self) -> &str {
        "Markdown reference with an overview and one section per documented program"
    }
}
