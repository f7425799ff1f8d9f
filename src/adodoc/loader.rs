//! Source loading
//!
//! `SourceLoader` reads a file (or takes a string) and hands the pipeline its
//! lines. Stata files are frequently Latin-1; bytes that are not valid UTF-8 are
//! replaced rather than rejected.

use crate::adodoc::error::{ExtractError, LoaderError};
use crate::adodoc::pipeline::{Extraction, ExtractOptions, Extractor};
use crate::adodoc::source::SourceLines;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct SourceLoader {
    file_name: String,
    source: SourceLines,
}

impl SourceLoader {
    /// Load from a file path. The document title uses the file's base name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), "file is not valid UTF-8; replacing invalid bytes");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(SourceLoader {
            file_name,
            source: SourceLines::from_source(&text),
        })
    }

    pub fn from_string(file_name: impl Into<String>, text: &str) -> Self {
        SourceLoader {
            file_name: file_name.into(),
            source: SourceLines::from_source(text),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source(&self) -> &SourceLines {
        &self.source
    }

    pub fn extract(&self, options: &ExtractOptions) -> Result<Extraction, ExtractError> {
        Extractor::new(&self.source, options.clone()).extract(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_uses_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.ado");
        fs::write(&path, "program clean\nend\n").unwrap();

        let loader = SourceLoader::from_path(&path).unwrap();
        assert_eq!(loader.file_name(), "clean.ado");
        assert_eq!(loader.source().len(), 2);
    }

    #[test]
    fn test_latin1_bytes_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.do");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"* caf\xe9\n").unwrap();

        let loader = SourceLoader::from_path(&path).unwrap();
        assert_eq!(loader.source().get(0), Some("* caf\u{fffd}\n"));
    }

    #[test]
    fn test_from_string_extracts_under_given_name() {
        let loader =
            SourceLoader::from_string("inline.do", "program a\n/* \"\"\"\nA.\n\"\"\" */\nend\n");
        let extraction = loader.extract(&ExtractOptions::default()).unwrap();
        assert_eq!(extraction.file_name, "inline.do");
        assert_eq!(
            extraction.table.get("a").unwrap().documentation.as_deref(),
            Some("A.\n")
        );
    }

    #[test]
    fn test_missing_file() {
        let err = SourceLoader::from_path("/definitely/not/here.ado").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.ado"));
    }
}
