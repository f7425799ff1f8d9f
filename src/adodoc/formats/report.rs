//! Serializable view of an extraction, shared by the structured formats

use crate::adodoc::diagnostics::Diagnostic;
use crate::adodoc::pipeline::Extraction;
use crate::adodoc::scanning::SubroutineEntry;
use crate::adodoc::signature::SignatureClauses;
use crate::adodoc::source::LineRange;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExtractionReport<'a> {
    pub file: &'a str,
    pub header: EntryReport<'a>,
    pub programs: Vec<EntryReport<'a>>,
    pub diagnostics: &'a [Diagnostic],
}

#[derive(Debug, Serialize)]
pub struct EntryReport<'a> {
    pub name: &'a str,
    pub body: LineRange,
    pub extent: LineRange,
    pub documentation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureReport<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureReport<'a> {
    Clauses(&'a SignatureClauses),
    Error(String),
}

impl<'a> ExtractionReport<'a> {
    pub fn new(extraction: &'a Extraction) -> Self {
        let report_entry = |entry: &'a SubroutineEntry, with_signature: bool| EntryReport {
            name: &entry.name,
            body: entry.body,
            extent: entry.extent,
            documentation: entry.documentation.as_deref(),
            signature: with_signature
                .then(|| extraction.signatures.get(&entry.name))
                .flatten()
                .map(|result| match result {
                    Ok(clauses) => SignatureReport::Clauses(clauses),
                    Err(err) => SignatureReport::Error(err.to_string()),
                }),
        };

        ExtractionReport {
            file: &extraction.file_name,
            header: report_entry(extraction.table.header(), false),
            programs: extraction.table.iter().map(|e| report_entry(e, true)).collect(),
            diagnostics: &extraction.diagnostics,
        }
    }
}
