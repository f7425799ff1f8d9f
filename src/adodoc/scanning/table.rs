//! Subroutine table
//!
//! An ordered mapping from program name to its entry. Iteration follows the order
//! names were first seen; inserting a name again replaces the entry in place, so
//! lookups reflect the latest declaration.

use crate::adodoc::source::LineRange;
use serde::Serialize;
use std::collections::HashMap;

/// Display name of the pseudo-entry covering everything before the first program.
pub const HEADER_NAME: &str = "_header";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubroutineEntry {
    pub name: String,
    /// Declaration line through the `end` line, inclusive.
    pub body: LineRange,
    /// Declaration line up to the next declaration (or end of file).
    pub extent: LineRange,
    /// `None` when no docstring was found, as opposed to an empty one.
    pub documentation: Option<String>,
}

impl SubroutineEntry {
    pub fn new(name: impl Into<String>, body: LineRange, extent: LineRange) -> Self {
        SubroutineEntry {
            name: name.into(),
            body,
            extent,
            documentation: None,
        }
    }

    /// The header pseudo-entry; its body and extent are the same range.
    pub fn header(range: LineRange) -> Self {
        SubroutineEntry::new(HEADER_NAME, range, range)
    }

    /// True when there is documentation text worth rendering.
    pub fn has_documentation(&self) -> bool {
        self.documentation
            .as_deref()
            .is_some_and(|doc| !doc.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubroutineTable {
    header: SubroutineEntry,
    entries: Vec<SubroutineEntry>,
    index: HashMap<String, usize>,
}

impl SubroutineTable {
    pub fn new(header: SubroutineEntry) -> Self {
        SubroutineTable {
            header,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a named entry.
    ///
    /// If the name is already present, the new entry takes the old one's position
    /// and the superseded entry is returned.
    pub fn insert(&mut self, entry: SubroutineEntry) -> Option<SubroutineEntry> {
        match self.index.get(&entry.name) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position], entry)),
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn header(&self) -> &SubroutineEntry {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut SubroutineEntry {
        &mut self.header
    }

    pub fn get(&self, name: &str) -> Option<&SubroutineEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SubroutineEntry> {
        let position = *self.index.get(name)?;
        self.entries.get_mut(position)
    }

    /// Named entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &SubroutineEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SubroutineEntry> {
        self.entries.iter_mut()
    }

    /// The header followed by every named entry.
    pub fn iter_with_header(&self) -> impl Iterator<Item = &SubroutineEntry> {
        std::iter::once(&self.header).chain(self.entries.iter())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of named entries; the header is not counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
