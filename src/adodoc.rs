//! Main module for adodoc library functionality

pub mod assembling;
pub mod batch;
pub mod config;
pub mod diagnostics;
pub mod docstring;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod pipeline;
pub mod scanning;
pub mod signature;
pub mod source;

pub use error::{AdodocError, ExtractError, FormatError, LoaderError, OutputError, SignatureError};
pub use pipeline::{extract, DocstringPolicy, ExtractOptions, Extraction, Extractor};
pub use source::{LineRange, SourceLines};
