//! Signature folding
//!
//! A program's `syntax` statement declares what it accepts. It may be spread over
//! several lines joined with `///`:
//!
//! ```text
//! syntax varlist(min=1) [if] [in] , ///
//!     GENerate(name) [replace]
//! ```
//!
//! Folding joins the span into one logical line, drops comments, collapses
//! whitespace and splits it at the clause separator into the part before the comma
//! (`varlist(min=1) [if] [in]`) and the options after it
//! (`GENerate(name) [replace]`).

use crate::adodoc::error::SignatureError;
use crate::adodoc::lexing::line_classification::CONTINUATION_MARKER;
use crate::adodoc::lexing::{has_continuation, LineTag};
use crate::adodoc::source::{LineRange, SourceLines};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const SIGNATURE_KEYWORD: &str = "syntax";
const LINE_COMMENT: &str = "//";
const CLAUSE_SEPARATOR: char = ',';

/// The two clauses of a folded `syntax` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureClauses {
    pub before: String,
    pub after: String,
    /// Set when the options were written as an optional group, `[, ...]`.
    pub options_optional: bool,
}

impl SignatureClauses {
    /// The statement rebuilt from its clauses.
    pub fn statement(&self) -> String {
        let mut statement = String::from(SIGNATURE_KEYWORD);
        if !self.before.is_empty() {
            statement.push(' ');
            statement.push_str(&self.before);
        }
        if self.options_optional {
            statement.push_str(&format!(" [, {}]", self.after));
        } else {
            statement.push_str(&format!(", {}", self.after));
        }
        statement
    }
}

/// Find the span of the first `syntax` statement in `range`.
///
/// The span runs through every line carrying `///` and ends with the first line
/// that does not.
pub fn find_signature_span(
    source: &SourceLines,
    tags: &[LineTag],
    range: LineRange,
) -> Result<LineRange, SignatureError> {
    let end = range.end.min(tags.len()).min(source.len());
    let start = range
        .indices()
        .take_while(|&index| index < end)
        .find(|&index| tags[index] == LineTag::SignatureStart)
        .ok_or(SignatureError::MissingSignature)?;

    let mut last = start;
    while source.get(last).is_some_and(has_continuation) {
        last += 1;
        if last >= end {
            return Err(SignatureError::UnterminatedContinuation { line: start + 1 });
        }
    }

    Ok(LineRange::new(start, last + 1))
}

/// Join a signature span into one whitespace-normalized logical line.
pub fn fold_signature(source: &SourceLines, span: LineRange) -> String {
    let lines = source.slice(span);
    let Some((last, continued)) = lines.split_last() else {
        return String::new();
    };

    let mut joined = String::new();
    for line in continued {
        joined.push_str(strip_comment(line, CONTINUATION_MARKER));
    }
    joined.push_str(strip_comment(last, LINE_COMMENT));

    WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string()
}

fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    line.find(marker).map_or(line, |position| &line[..position])
}

/// Split a folded statement into its clauses.
///
/// The separator is the first comma outside any brackets. Without one, an
/// optional options group `[, ...]` is accepted instead.
pub fn split_clauses(statement: &str) -> Result<SignatureClauses, SignatureError> {
    let body = statement
        .strip_prefix(SIGNATURE_KEYWORD)
        .unwrap_or(statement);

    if let Some(position) = top_level_separator(body) {
        return Ok(SignatureClauses {
            before: body[..position].trim().to_string(),
            after: body[position + 1..].trim().to_string(),
            options_optional: false,
        });
    }

    if let Some((open, separator, close)) = optional_options_group(body) {
        return Ok(SignatureClauses {
            before: body[..open].trim().to_string(),
            after: body[separator + 1..close].trim().to_string(),
            options_optional: true,
        });
    }

    Err(SignatureError::MissingClauseSeparator {
        statement: statement.to_string(),
    })
}

/// Index of the first comma at bracket depth zero.
fn top_level_separator(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in body.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            CLAUSE_SEPARATOR if depth == 0 => return Some(index),
            _ => {}
        }
    }
    None
}

/// Locate a top-level `[` whose content starts with the separator.
///
/// Returns the indices of the `[`, the comma, and the matching `]` (or the end of
/// the statement when the group is left open).
fn optional_options_group(body: &str) -> Option<(usize, usize, usize)> {
    let mut depth = 0usize;
    let mut group: Option<(usize, usize)> = None;
    for (index, c) in body.char_indices() {
        match c {
            '[' if depth == 0 && group.is_none() => {
                let rest = &body[index + 1..];
                let trimmed = rest.trim_start();
                if trimmed.starts_with(CLAUSE_SEPARATOR) {
                    let separator = index + 1 + (rest.len() - trimmed.len());
                    group = Some((index, separator));
                }
                depth += 1;
            }
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some((open, separator)) = group {
                        return Some((open, separator, index));
                    }
                }
            }
            _ => {}
        }
    }
    group.map(|(open, separator)| (open, separator, body.len()))
}

/// Find, fold and split the first `syntax` statement of a program.
pub fn signature_clauses(
    source: &SourceLines,
    tags: &[LineTag],
    range: LineRange,
) -> Result<SignatureClauses, SignatureError> {
    let span = find_signature_span(source, tags, range)?;
    split_clauses(&fold_signature(source, span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adodoc::lexing::classify_document;

    fn clauses(text: &str) -> Result<SignatureClauses, SignatureError> {
        let source = SourceLines::from_source(text);
        let tags = classify_document(&source);
        signature_clauses(&source, &tags, source.full_range())
    }

    #[test]
    fn test_continued_statement() {
        let result = clauses("syntax varlist(min=1) [if] [in] , ///\n    GENerate(name) [replace]\n")
            .unwrap();
        assert_eq!(result.before, "varlist(min=1) [if] [in]");
        assert_eq!(result.after, "GENerate(name) [replace]");
        assert!(!result.options_optional);
    }

    #[test]
    fn test_span_covers_continuations() {
        let source = SourceLines::from_source(
            "program a\n  syntax varlist /// vars\n    [if], ///\n    by(varname) // grouping\nend\n",
        );
        let tags = classify_document(&source);
        let span = find_signature_span(&source, &tags, LineRange::new(0, 5)).unwrap();
        assert_eq!(span, LineRange::new(1, 4));
        assert_eq!(
            fold_signature(&source, span),
            "syntax varlist [if], by(varname)"
        );
    }

    #[test]
    fn test_nested_commas_stay_in_clause() {
        let result = clauses("syntax varlist(min=1, max=2) , Level(cilevel)\n").unwrap();
        assert_eq!(result.before, "varlist(min=1, max=2)");
        assert_eq!(result.after, "Level(cilevel)");
    }

    #[test]
    fn test_optional_options_group() {
        let result = clauses("syntax varlist [if] [, Detail noHeader]\n").unwrap();
        assert_eq!(result.before, "varlist [if]");
        assert_eq!(result.after, "Detail noHeader");
        assert!(result.options_optional);
        assert_eq!(result.statement(), "syntax varlist [if] [, Detail noHeader]");
    }

    #[test]
    fn test_missing_separator() {
        let err = clauses("syntax varlist [if]\n").unwrap_err();
        assert_eq!(
            err,
            SignatureError::MissingClauseSeparator {
                statement: "syntax varlist [if]".to_string()
            }
        );
    }

    #[test]
    fn test_missing_signature() {
        assert_eq!(
            clauses("program a\nend\n").unwrap_err(),
            SignatureError::MissingSignature
        );
    }

    #[test]
    fn test_continuation_past_range() {
        let source = SourceLines::from_source("program a\nsyntax varlist ///\nend\n");
        let tags = classify_document(&source);
        let err = find_signature_span(&source, &tags, LineRange::new(0, 2)).unwrap_err();
        assert_eq!(err, SignatureError::UnterminatedContinuation { line: 2 });
    }
}
