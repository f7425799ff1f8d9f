//! Docstring location within a line range

use crate::adodoc::error::ExtractError;
use crate::adodoc::lexing::LineTag;
use crate::adodoc::source::LineRange;
use serde::Serialize;

/// A located docstring: the lines holding its opening and closing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    pub open: usize,
    pub close: usize,
}

impl DocBlock {
    /// The block as a half-open range, closing line included.
    pub fn range(&self) -> LineRange {
        LineRange::new(self.open, self.close + 1)
    }
}

/// Find the first docstring within `range`.
///
/// Returns `Ok(None)` when the range has no opening marker. An opening marker with
/// no closing marker before the end of the range is an error naming `entry`.
pub fn locate_docstring(
    tags: &[LineTag],
    range: LineRange,
    entry: &str,
) -> Result<Option<DocBlock>, ExtractError> {
    let end = range.end.min(tags.len());
    let Some(open) = range
        .indices()
        .take_while(|&index| index < end)
        .find(|&index| tags[index] == LineTag::DocBlockStart)
    else {
        return Ok(None);
    };

    let close = (open..end)
        .find(|&index| tags[index] == LineTag::DocBlockEnd)
        .ok_or_else(|| ExtractError::UnterminatedDocumentationBlock {
            entry: entry.to_string(),
            line: open + 1,
        })?;

    Ok(Some(DocBlock { open, close }))
}
