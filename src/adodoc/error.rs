//! Error types for extraction, signature folding, loading, formatting and output
//!
//! Line numbers carried by errors are 1-based, ready for display.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed input found while extracting documentation from one file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("program `{name}` declared on line {line} has no `end` before the next program or the end of the file")]
    UnterminatedSubroutine { name: String, line: usize },

    #[error("documentation block opened on line {line} in `{entry}` is never closed")]
    UnterminatedDocumentationBlock { entry: String, line: usize },
}

/// Failure to fold a `syntax` statement. Never affects documentation extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("no `syntax` statement found")]
    MissingSignature,

    #[error("`syntax` statement starting on line {line} continues past the end of the program")]
    UnterminatedContinuation { line: usize },

    #[error("`syntax` statement has no `,` separating its clauses: {statement}")]
    MissingClauseSeparator { statement: String },
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Failure to write one file's rendered document.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("{} would overwrite the document for {}", target.display(), earlier.display())]
    Collision { target: PathBuf, earlier: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything that can make processing of a single file fail.
#[derive(Error, Debug)]
pub enum AdodocError {
    #[error(transparent)]
    Load(#[from] LoaderError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
