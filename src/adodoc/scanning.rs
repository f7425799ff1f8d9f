//! Boundary scanning
//!
//! Turns the per-line tags of a file into a [`SubroutineTable`]. Each declaration
//! opens a window that runs to the next declaration (or the end of the file); the
//! program's `end` must be found inside that window.

pub mod table;

pub use table::{SubroutineEntry, SubroutineTable, HEADER_NAME};

use crate::adodoc::diagnostics::Diagnostic;
use crate::adodoc::error::ExtractError;
use crate::adodoc::lexing::{classify_document, LineTag};
use crate::adodoc::source::{LineRange, SourceLines};
use tracing::{debug, warn};

/// Result of a successful scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub table: SubroutineTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan a tagged file for program boundaries.
///
/// The header entry covers `[0, first declaration)`. A program with no `end` inside
/// its window aborts the scan; the window is never extended.
pub fn scan_boundaries(tags: &[LineTag]) -> Result<ScanOutcome, ExtractError> {
    let starts: Vec<(usize, &str)> = tags
        .iter()
        .enumerate()
        .filter_map(|(index, tag)| match tag {
            LineTag::SubroutineStart(name) => Some((index, name.as_str())),
            _ => None,
        })
        .collect();

    let first_start = starts.first().map_or(tags.len(), |&(index, _)| index);
    let mut table = SubroutineTable::new(SubroutineEntry::header(LineRange::new(0, first_start)));
    let mut diagnostics = Vec::new();

    for (position, &(start, name)) in starts.iter().enumerate() {
        let window_end = starts
            .get(position + 1)
            .map_or(tags.len(), |&(index, _)| index);

        let terminator = tags[start..window_end]
            .iter()
            .position(|tag| matches!(tag, LineTag::SubroutineEnd))
            .map(|offset| start + offset)
            .ok_or_else(|| ExtractError::UnterminatedSubroutine {
                name: name.to_string(),
                line: start + 1,
            })?;

        let body = LineRange::new(start, terminator + 1);
        debug!(program = name, %body, "found program");

        let entry = SubroutineEntry::new(name, body, LineRange::new(start, window_end));
        if let Some(previous) = table.insert(entry) {
            let diagnostic = Diagnostic::duplicate_name(name, previous.body.start, start);
            warn!("{}", diagnostic.message);
            diagnostics.push(diagnostic);
        }
    }

    Ok(ScanOutcome { table, diagnostics })
}

/// Classify and scan in one call.
pub fn scan_document(source: &SourceLines) -> Result<ScanOutcome, ExtractError> {
    scan_boundaries(&classify_document(source))
}
