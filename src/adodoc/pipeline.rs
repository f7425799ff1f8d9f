//! Extraction pipeline
//!
//! One [`Extractor`] processes one file and is then thrown away: classify every
//! line, scan program boundaries, then locate and rebuild each docstring. Folding
//! `syntax` statements is optional and never influences the documentation.
//!
//! ```rust,ignore
//! use adodoc::adodoc::{extract, ExtractOptions, SourceLines};
//!
//! let source = SourceLines::from_source(text);
//! let extraction = extract("clean.ado", &source, &ExtractOptions::default())?;
//! print!("{}", extraction.to_markdown());
//! ```

use crate::adodoc::assembling::{Assembler, Signatures};
use crate::adodoc::diagnostics::Diagnostic;
use crate::adodoc::docstring::{locate_docstring, reconstruct_docstring};
use crate::adodoc::error::{ExtractError, FormatError};
use crate::adodoc::formats::{ExtractionReport, FormatRegistry};
use crate::adodoc::lexing::{classify_document, LineTag};
use crate::adodoc::scanning::{scan_boundaries, ScanOutcome, SubroutineTable};
use crate::adodoc::signature::signature_clauses;
use crate::adodoc::source::{LineRange, SourceLines};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do with a docstring that is opened but never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocstringPolicy {
    /// Leave the program undocumented and record a warning.
    #[default]
    Skip,
    /// Fail the whole file.
    Fail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub docstring_policy: DocstringPolicy,
    /// Fold each program's `syntax` statement.
    pub signatures: bool,
}

/// Everything extracted from one file.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub file_name: String,
    pub table: SubroutineTable,
    /// Empty unless signatures were requested.
    pub signatures: Signatures,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// The Markdown reference document.
    pub fn to_markdown(&self) -> String {
        let assembler = Assembler::new(&self.file_name);
        if self.signatures.is_empty() {
            assembler.assemble(&self.table)
        } else {
            assembler.with_signatures(&self.signatures).assemble(&self.table)
        }
    }

    pub fn report(&self) -> ExtractionReport<'_> {
        ExtractionReport::new(self)
    }

    pub fn render(&self, registry: &FormatRegistry, format: &str) -> Result<String, FormatError> {
        registry.serialize(self, format)
    }
}

pub struct Extractor<'a> {
    source: &'a SourceLines,
    tags: Vec<LineTag>,
    options: ExtractOptions,
}

impl<'a> Extractor<'a> {
    pub fn new(source: &'a SourceLines, options: ExtractOptions) -> Self {
        Extractor {
            source,
            tags: classify_document(source),
            options,
        }
    }

    pub fn extract(self, file_name: &str) -> Result<Extraction, ExtractError> {
        let ScanOutcome {
            mut table,
            mut diagnostics,
        } = scan_boundaries(&self.tags)?;
        debug!(file = file_name, programs = table.len(), "scanned boundaries");

        let header = table.header();
        let documentation = self.documentation_for(&header.name, header.body, &mut diagnostics)?;
        table.header_mut().documentation = documentation;

        for entry in table.iter_mut() {
            entry.documentation = self.documentation_for(&entry.name, entry.body, &mut diagnostics)?;
        }

        let mut signatures = Signatures::new();
        if self.options.signatures {
            for entry in table.iter() {
                let clauses = signature_clauses(self.source, &self.tags, entry.body);
                if let Err(err) = &clauses {
                    debug!(program = entry.name.as_str(), %err, "no signature");
                }
                signatures.insert(entry.name.clone(), clauses);
            }
        }

        Ok(Extraction {
            file_name: file_name.to_string(),
            table,
            signatures,
            diagnostics,
        })
    }

    fn documentation_for(
        &self,
        name: &str,
        range: LineRange,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<String>, ExtractError> {
        match locate_docstring(&self.tags, range, name) {
            Ok(Some(block)) => Ok(Some(reconstruct_docstring(self.source, block))),
            Ok(None) => Ok(None),
            Err(ExtractError::UnterminatedDocumentationBlock { entry, line })
                if self.options.docstring_policy == DocstringPolicy::Skip =>
            {
                let diagnostic = Diagnostic::skipped_docstring(&entry, line);
                warn!(line, "{}", diagnostic.message);
                diagnostics.push(diagnostic);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// Run the whole pipeline over one file.
pub fn extract(
    file_name: &str,
    source: &SourceLines,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    Extractor::new(source, options.clone()).extract(file_name)
}
