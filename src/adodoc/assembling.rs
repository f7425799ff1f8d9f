//! Document assembly
//!
//! Renders a populated [`SubroutineTable`] as Markdown:
//!
//! ```text
//! # Documentation for `<filename>`
//!
//! ## Overview
//!
//! <header documentation>
//!
//! ## `<program>`
//!
//! #### <program documentation>
//! ```
//!
//! Heading levels and backtick quoting are fixed; consumers diff this output.
//! Programs without documentation get no section at all.

use crate::adodoc::error::SignatureError;
use crate::adodoc::scanning::SubroutineTable;
use crate::adodoc::signature::SignatureClauses;
use std::collections::BTreeMap;

/// Folded signatures keyed by program name.
pub type Signatures = BTreeMap<String, Result<SignatureClauses, SignatureError>>;

pub struct Assembler<'a> {
    file_name: &'a str,
    signatures: Option<&'a Signatures>,
}

impl<'a> Assembler<'a> {
    pub fn new(file_name: &'a str) -> Self {
        Assembler {
            file_name,
            signatures: None,
        }
    }

    /// Append each documented program's folded `syntax` statement to its section.
    pub fn with_signatures(mut self, signatures: &'a Signatures) -> Self {
        self.signatures = Some(signatures);
        self
    }

    pub fn assemble(&self, table: &SubroutineTable) -> String {
        let mut out = format!("# Documentation for `{}`\n", self.file_name);

        let header = table.header();
        if let Some(doc) = header.documentation.as_deref().filter(|_| header.has_documentation()) {
            out.push_str("\n## Overview\n\n");
            push_block(&mut out, doc);
        }

        for entry in table.iter().filter(|entry| entry.has_documentation()) {
            let Some(doc) = entry.documentation.as_deref() else {
                continue;
            };
            out.push_str(&format!("\n## `{}`\n\n#### ", entry.name));
            push_block(&mut out, doc);

            if let Some(Ok(clauses)) = self.signatures.and_then(|s| s.get(&entry.name)) {
                out.push_str(&format!("\n```stata\n{}\n```\n", clauses.statement()));
            }
        }

        out
    }
}

fn push_block(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}

/// Assemble the document for `file_name` without signatures.
pub fn assemble_document(file_name: &str, table: &SubroutineTable) -> String {
    Assembler::new(file_name).assemble(table)
}
