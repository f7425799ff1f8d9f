//! Output formats for extracted documentation
//!
//! - `markdown`: the reference document
//! - `json` / `yaml`: the full extraction (ranges, docstrings, signatures,
//!   diagnostics) for tooling

pub mod json;
pub mod markdown;
pub mod registry;
pub mod report;
pub mod yaml;

pub use crate::adodoc::error::FormatError;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::{FormatRegistry, Formatter};
pub use report::ExtractionReport;
pub use yaml::YamlFormatter;
