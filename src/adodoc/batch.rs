//! Batch processing
//!
//! Files are independent: each gets its own loader, extractor and table, so they
//! are processed in parallel. A failing file is reported and never affects the
//! output of the others.

use crate::adodoc::error::{AdodocError, OutputError};
use crate::adodoc::formats::FormatRegistry;
use crate::adodoc::loader::SourceLoader;
use crate::adodoc::pipeline::{Extraction, ExtractOptions};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

#[derive(Debug)]
pub struct FileOutput {
    pub path: PathBuf,
    pub extraction: Extraction,
    pub rendered: String,
}

impl FileOutput {
    fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.extraction.file_name.clone())
    }
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: AdodocError,
}

/// Outputs and failures, each in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outputs: Vec<FileOutput>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Where each output goes inside `dir`, in output order.
    ///
    /// An output is named `<stem>.<extension>`. Inputs sharing a stem
    /// (`clean.do`, `clean.ado`) keep their whole file name instead
    /// (`clean.do.md`). A name still taken by an earlier output is a collision.
    pub fn output_targets(
        &self,
        dir: &Path,
        extension: &str,
    ) -> Vec<Result<PathBuf, OutputError>> {
        let mut stems: HashMap<String, usize> = HashMap::new();
        for output in &self.outputs {
            *stems.entry(output.stem()).or_default() += 1;
        }

        let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
        self.outputs
            .iter()
            .map(|output| {
                let stem = output.stem();
                let name = if stems.get(&stem).copied().unwrap_or(0) > 1 {
                    output.extraction.file_name.clone()
                } else {
                    stem
                };
                let target = dir.join(format!("{name}.{extension}"));
                if let Some(earlier) = claimed.get(&target) {
                    return Err(OutputError::Collision {
                        target,
                        earlier: earlier.to_path_buf(),
                    });
                }
                claimed.insert(target.clone(), &output.path);
                Ok(target)
            })
            .collect()
    }

    /// Write every output into `dir`, which must exist.
    ///
    /// An output that cannot be written becomes a failure of its input file; the
    /// remaining outputs are still written. Returns the written paths.
    pub fn write_outputs(&mut self, dir: &Path, extension: &str) -> Vec<PathBuf> {
        let targets = self.output_targets(dir, extension);
        let mut written = Vec::new();
        let mut failures = Vec::new();

        for (output, target) in self.outputs.iter().zip(targets) {
            let result = target.and_then(|target| match fs::write(&target, &output.rendered) {
                Ok(()) => Ok(target),
                Err(source) => Err(OutputError::Io {
                    path: target,
                    source,
                }),
            });
            match result {
                Ok(target) => {
                    info!(path = %target.display(), "wrote documentation");
                    written.push(target);
                }
                Err(error) => failures.push(FileFailure {
                    path: output.path.clone(),
                    error: error.into(),
                }),
            }
        }

        self.failures.extend(failures);
        written
    }
}

/// Load, extract and render one file.
pub fn process_file(
    path: &Path,
    options: &ExtractOptions,
    registry: &FormatRegistry,
    format: &str,
) -> Result<FileOutput, AdodocError> {
    let _span = info_span!("file", path = %path.display()).entered();

    let loader = SourceLoader::from_path(path)?;
    let extraction = loader.extract(options)?;
    let rendered = extraction.render(registry, format)?;
    debug!(
        programs = extraction.table.len(),
        diagnostics = extraction.diagnostics.len(),
        "processed"
    );

    Ok(FileOutput {
        path: path.to_path_buf(),
        extraction,
        rendered,
    })
}

/// Process every path, isolating failures per file.
pub fn process_files(
    paths: &[PathBuf],
    options: &ExtractOptions,
    registry: &FormatRegistry,
    format: &str,
) -> BatchReport {
    let results: Vec<(PathBuf, Result<FileOutput, AdodocError>)> = paths
        .par_iter()
        .map(|path| (path.clone(), process_file(path, options, registry, format)))
        .collect();

    let mut report = BatchReport::default();
    for (path, result) in results {
        match result {
            Ok(output) => report.outputs.push(output),
            Err(error) => report.failures.push(FileFailure { path, error }),
        }
    }
    report
}
