//! Source lines and line ranges
//!
//! A [`SourceLines`] holds one whole file in memory as an ordered sequence of lines.
//! Every line keeps its original terminator (`\n` or `\r\n`) so multi-line
//! documentation can be rebuilt byte-for-byte. All ranges handed around the
//! pipeline are half-open [`LineRange`]s over these indices.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A half-open interval `[start, end)` of line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "line range start {start} is past end {end}");
        LineRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// The line indices covered by this range, in order.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// The read-only line sequence of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    /// Split raw file content into lines, keeping each line's terminator.
    ///
    /// A final line without a terminator is kept as is; empty input yields no lines.
    pub fn from_source(source: &str) -> Self {
        SourceLines {
            lines: source.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines covered by `range`, clamped to the end of the file.
    pub fn slice(&self, range: LineRange) -> &[String] {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        &self.lines[start..end]
    }

    /// The range spanning the whole file.
    pub fn full_range(&self) -> LineRange {
        LineRange::new(0, self.lines.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Reassemble the original text.
    pub fn to_source(&self) -> String {
        self.lines.concat()
    }
}

/// The terminator a line ends with: `"\r\n"`, `"\n"`, or `""` for the last line of a file.
pub fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source_keeps_terminators() {
        let source = SourceLines::from_source("a\r\nb\nc");
        assert_eq!(source.lines(), &["a\r\n", "b\n", "c"]);
        assert_eq!(source.to_source(), "a\r\nb\nc");
    }

    #[test]
    fn test_empty_source_has_no_lines() {
        let source = SourceLines::from_source("");
        assert!(source.is_empty());
        assert_eq!(source.full_range(), LineRange::new(0, 0));
    }

    #[test]
    fn test_slice_is_clamped() {
        let source = SourceLines::from_source("a\nb\n");
        assert_eq!(source.slice(LineRange::new(1, 5)), &["b\n"]);
        assert!(source.slice(LineRange::new(4, 6)).is_empty());
    }

    #[test]
    fn test_line_range_basics() {
        let range = LineRange::new(2, 5);
        assert_eq!(range.len(), 3);
        assert!(range.contains(2));
        assert!(!range.contains(5));
        assert_eq!(range.to_string(), "[2, 5)");
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_line_terminator() {
        assert_eq!(line_terminator("x\r\n"), "\r\n");
        assert_eq!(line_terminator("x\n"), "\n");
        assert_eq!(line_terminator("x"), "");
    }
}
