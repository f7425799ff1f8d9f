//! Configuration loading
//!
//! `defaults/adodoc.default.toml` is embedded into the binary so documented and
//! runtime defaults stay in sync. User files are layered on top via [`Loader`]
//! before deserializing into [`AdodocConfig`].

use crate::adodoc::pipeline::{DocstringPolicy, ExtractOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/adodoc.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdodocConfig {
    pub extract: ExtractConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    pub docstring_policy: DocstringPolicy,
    pub signatures: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl AdodocConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            docstring_policy: self.extract.docstring_policy,
            signatures: self.extract.signatures,
        }
    }
}

/// Builds an [`AdodocConfig`] from the embedded defaults and whatever the user
/// layers over them. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a file the user asked for explicitly; `build` fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a file that may not exist, such as `./adodoc.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let toml = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(toml);
        self
    }

    /// Set one dotted key, e.g. `extract.signatures`, over every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<AdodocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration with no user layers.
pub fn load_defaults() -> Result<AdodocConfig, ConfigError> {
    Loader::new().build()
}
