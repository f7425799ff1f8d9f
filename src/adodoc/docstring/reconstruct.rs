//! Docstring reconstruction
//!
//! The opening line may carry the start of the text inline (`/* """ Summary`), so
//! it is exempt from dedenting. Every line between the markers is dedented by
//! their common leading whitespace. Original line terminators are preserved.

use crate::adodoc::docstring::locator::DocBlock;
use crate::adodoc::lexing::line_classification::DOC_BLOCK_START;
use crate::adodoc::source::{line_terminator, SourceLines};

const BLOCK_QUOTE: &str = "\"\"\"";

/// Rebuild the text of a located docstring.
pub fn reconstruct_docstring(source: &SourceLines, block: DocBlock) -> String {
    let lines = source.lines();
    let mut text = String::new();

    if let Some(first) = lines.get(block.open) {
        text.push_str(opening_residual(first));
    }

    let mut body: Vec<&str> = if block.close > block.open + 1 {
        lines[block.open + 1..block.close.min(lines.len())]
            .iter()
            .map(String::as_str)
            .collect()
    } else {
        Vec::new()
    };

    // Whatever precedes the closing quotes is whitespace for a well-formed close line.
    let closing_residual = lines
        .get(block.close)
        .filter(|_| block.close > block.open)
        .and_then(|line| line.find(BLOCK_QUOTE).map(|position| &line[..position]))
        .filter(|residual| !residual.trim().is_empty());
    if let Some(residual) = closing_residual {
        body.push(residual);
    }

    text.push_str(&dedent(&body));
    text
}

/// Text following `/* """` on the opening line, or nothing if that is only whitespace.
fn opening_residual(line: &str) -> &str {
    let residual = match DOC_BLOCK_START.find(line) {
        Some(found) => &line[found.end()..],
        None => line,
    };
    let residual = residual.trim_start_matches([' ', '\t']);
    if residual.trim().is_empty() {
        ""
    } else {
        residual
    }
}

/// Strip the leading whitespace shared by all non-blank lines.
///
/// Blank lines do not take part in the margin and come out as their bare terminator.
pub fn dedent<S: AsRef<str>>(lines: &[S]) -> String {
    let margin = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or("");

    let mut text = String::new();
    for line in lines.iter().map(AsRef::as_ref) {
        if line.trim().is_empty() {
            text.push_str(line_terminator(line));
        } else {
            text.push_str(&line[margin.len()..]);
        }
    }
    text
}

fn leading_whitespace(line: &str) -> &str {
    let content = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - content.len()]
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let shared = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..shared]
}
