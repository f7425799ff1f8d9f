//! Non-fatal findings recorded while extracting a file

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A later program reused an earlier program's name and replaced it.
    DuplicateSubroutineName,
    /// A docstring was opened but never closed and was skipped.
    UnterminatedDocumentationBlock,
}

/// A warning about a problem that did not stop extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// 1-based line the diagnostic points at.
    pub line: usize,
}

impl Diagnostic {
    /// `first` and `line` are 0-based line indices of the two declarations.
    pub fn duplicate_name(name: &str, first: usize, line: usize) -> Self {
        Diagnostic {
            kind: DiagnosticKind::DuplicateSubroutineName,
            message: format!(
                "program `{name}` is declared again; the declaration on line {} replaces the one on line {}",
                line + 1,
                first + 1
            ),
            line: line + 1,
        }
    }

    /// `line` is already 1-based, as carried by the extraction error.
    pub fn skipped_docstring(entry: &str, line: usize) -> Self {
        Diagnostic {
            kind: DiagnosticKind::UnterminatedDocumentationBlock,
            message: format!(
                "documentation block in `{entry}` is never closed; `{entry}` is left undocumented"
            ),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: line {}: {}", self.line, self.message)
    }
}
