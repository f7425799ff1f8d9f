//! Line Classification
//!
//! Stateless predicates recognizing the handful of line shapes the extractor cares
//! about, and the single pass that tags a whole file with them.
//!
//! - program declaration: `program [define] name` with any accepted abbreviation
//! - program terminator: a line holding only `end`
//! - docstring open: `/* """` at the start of the line
//! - docstring close: `""" */` with nothing after it
//! - signature: a `syntax` statement
use crate::adodoc::lexing::keywords::{DEFINE, PROGRAM};
use crate::adodoc::source::SourceLines;
use once_cell::sync::Lazy;
use regex::Regex;

/// Program management subcommands that look like a declaration without `define`.
const PROGRAM_SUBCOMMANDS: &[&str] = &["drop", "dir", "list"];

static SUBROUTINE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(?:{program})\s+(?:(?P<define>{define})\s+)?(?P<name>[A-Za-z_][A-Za-z0-9_]{{0,31}})\b",
        program = PROGRAM.alternation(),
        define = DEFINE.alternation(),
    ))
    .unwrap()
});

static SUBROUTINE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*end\s*$").unwrap());

/// Open-comment followed by a block quote. Shared with the reconstructor, which
/// strips exactly this match from the opening line.
pub(crate) static DOC_BLOCK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*/\*\s*""""#).unwrap());

static DOC_BLOCK_END: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s*"""\s*\*/\s*$"#).unwrap());

static SIGNATURE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*syntax\b").unwrap());

/// The continuation marker joining a statement with the next line.
pub const CONTINUATION_MARKER: &str = "///";

/// What a single line is, as far as the extractor is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineTag {
    SubroutineStart(String),
    SubroutineEnd,
    DocBlockStart,
    DocBlockEnd,
    SignatureStart,
    Other,
}

/// Returns the declared program name if `line` opens a program definition.
pub fn is_subroutine_start(line: &str) -> Option<String> {
    let captures = SUBROUTINE_START.captures(line)?;
    let name = captures.name("name")?.as_str();
    // Without a qualifier the name must not be a subcommand or a lone `define`,
    // which is what `program define` with a missing or invalid name falls back to.
    if captures.name("define").is_none()
        && (PROGRAM_SUBCOMMANDS.contains(&name) || DEFINE.accepts(name))
    {
        return None;
    }
    Some(name.to_string())
}

pub fn is_subroutine_end(line: &str) -> bool {
    SUBROUTINE_END.is_match(line)
}

pub fn is_doc_block_start(line: &str) -> bool {
    DOC_BLOCK_START.is_match(line)
}

pub fn is_doc_block_end(line: &str) -> bool {
    DOC_BLOCK_END.is_match(line)
}

pub fn is_signature_start(line: &str) -> bool {
    SIGNATURE_START.is_match(line)
}

/// Check if line continues onto the next one (`///`)
pub fn has_continuation(line: &str) -> bool {
    line.contains(CONTINUATION_MARKER)
}

/// Determine the tag of one line. Declarations win over every other shape.
pub fn classify_line(line: &str) -> LineTag {
    if let Some(name) = is_subroutine_start(line) {
        return LineTag::SubroutineStart(name);
    }
    if is_subroutine_end(line) {
        return LineTag::SubroutineEnd;
    }
    if is_doc_block_start(line) {
        return LineTag::DocBlockStart;
    }
    if is_doc_block_end(line) {
        return LineTag::DocBlockEnd;
    }
    if is_signature_start(line) {
        return LineTag::SignatureStart;
    }
    LineTag::Other
}

/// Tag every line of the file, in order.
pub fn classify_document(source: &SourceLines) -> Vec<LineTag> {
    source.iter().map(classify_line).collect()
}
