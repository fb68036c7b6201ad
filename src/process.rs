//! The conversion pipeline.
//!
//! ```text
//! list_svg_files ──► load_source (parallel) ──► generate_component (sequential)
//!   scan.rs            read + optimize             translate + render + write
//! ```
//!
//! ## Parallel Loading
//!
//! Reading and optimizing are independent per file and run on the rayon pool.
//! Every file produces exactly one `Result`, tied to its path, and the
//! results are gathered with a single `collect` before generation starts. A
//! file that fails to read or optimize becomes a [`FileError`] in the report;
//! its siblings are unaffected.
//!
//! ## Sequential Generation
//!
//! Generation runs in input path order. Output files are keyed by component
//! name, so two inputs that capitalize to the same name (`icon.svg`,
//! `Icon.svg`) overwrite each other deterministically instead of racing.
//! Each file is written to a temporary sibling and renamed into place.

use crate::config::Config;
use crate::naming::ComponentName;
use crate::optimize::{self, OptimizeError, Optimizer};
use crate::render::ComponentBuilder;
use crate::scan::{self, ScanError};
use crate::translate::{self, TranslateError, TranslateOptions};
use crate::types::{Platform, SourceRecord};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// A failure confined to one input file.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot derive a component name from {}", .path.display())]
    InvalidName { path: PathBuf },
    #[error("unparsable input {}: {reason}", .path.display())]
    Unparsable { path: PathBuf, reason: String },
    #[error("cannot optimize {}: {source}", .path.display())]
    Optimize {
        path: PathBuf,
        source: OptimizeError,
    },
    #[error("unsupported tag <{tag}> in {} for react-native output", .path.display())]
    UnsupportedTag { path: PathBuf, tag: String },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FileError {
    /// The input file (or, for write failures, the output file) at fault.
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. }
            | FileError::InvalidName { path }
            | FileError::Unparsable { path, .. }
            | FileError::Optimize { path, .. }
            | FileError::UnsupportedTag { path, .. }
            | FileError::Write { path, .. } => path,
        }
    }

    fn from_optimize(path: &Path, err: OptimizeError) -> Self {
        match err {
            OptimizeError::Unparsable(reason) => FileError::Unparsable {
                path: path.to_path_buf(),
                reason,
            },
            source => FileError::Optimize {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    fn from_translate(path: &Path, err: TranslateError) -> Self {
        match err {
            TranslateError::Unparsable(e) => FileError::Unparsable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
            TranslateError::UnsupportedTag(tag) => FileError::UnsupportedTag {
                path: path.to_path_buf(),
                tag,
            },
        }
    }
}

/// One component written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub source: PathBuf,
    pub identifier: String,
    pub output: PathBuf,
    /// react-native-svg components imported by the file (native only).
    pub native_imports: Vec<String>,
}

/// Outcome of a run: what was written and what failed.
#[derive(Debug, Default)]
pub struct ProcessReport {
    pub generated: Vec<GeneratedFile>,
    pub failed: Vec<FileError>,
}

impl ProcessReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the pipeline with the optimizer selected by the config.
pub fn process(config: &Config) -> Result<ProcessReport, ProcessError> {
    let optimizer = optimize::from_config(&config.optimize);
    process_with_optimizer(optimizer.as_ref(), config)
}

/// Run the pipeline with a specific optimizer (allows testing with mock).
pub fn process_with_optimizer(
    optimizer: &dyn Optimizer,
    config: &Config,
) -> Result<ProcessReport, ProcessError> {
    let files = scan::list_svg_files(&config.input)?;
    if files.is_empty() {
        tracing::warn!("no .svg files found in {}", config.input.display());
    }
    tracing::debug!("found {} svg file(s)", files.len());

    let (records, mut failed) = load_sources(optimizer, &files);

    let mut generated = Vec::with_capacity(records.len());
    for record in &records {
        match generate_component(record, config) {
            Ok(file) => generated.push(file),
            Err(err) => failed.push(err),
        }
    }

    for err in &failed {
        tracing::debug!("{}", err);
    }
    failed.sort_by(|a, b| a.path().cmp(b.path()));

    Ok(ProcessReport { generated, failed })
}

/// Read and optimize every file in parallel, splitting successes from failures.
///
/// Both lists keep input order.
pub fn load_sources(
    optimizer: &dyn Optimizer,
    files: &[PathBuf],
) -> (Vec<SourceRecord>, Vec<FileError>) {
    let results: Vec<Result<SourceRecord, FileError>> = files
        .par_iter()
        .map(|path| load_source(optimizer, path))
        .collect();

    let mut records = Vec::with_capacity(results.len());
    let mut failed = Vec::new();
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(err) => failed.push(err),
        }
    }
    (records, failed)
}

/// Read one file and run it through the optimizer.
pub fn load_source(optimizer: &dyn Optimizer, path: &Path) -> Result<SourceRecord, FileError> {
    let name = ComponentName::from_path(path).ok_or_else(|| FileError::InvalidName {
        path: path.to_path_buf(),
    })?;

    let raw = fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let markup = optimizer
        .optimize(&raw)
        .map_err(|e| FileError::from_optimize(path, e))?;

    tracing::debug!(
        "optimized {} ({} → {} bytes)",
        path.display(),
        raw.len(),
        markup.len()
    );

    Ok(SourceRecord {
        path: path.to_path_buf(),
        name,
        markup,
    })
}

/// Translate, render and write one component.
pub fn generate_component(
    record: &SourceRecord,
    config: &Config,
) -> Result<GeneratedFile, FileError> {
    let options = TranslateOptions {
        platform: config.target.platform,
        spread_props: config.spread_props,
    };
    let translation = translate::translate(&record.markup, &options)
        .map_err(|e| FileError::from_translate(&record.path, e))?;

    let builder = ComponentBuilder::new(config.target, &record.name.identifier, &translation);
    let document = builder.build();

    let output = config
        .output
        .join(format!("{}.{}", record.name.file_stem, builder.extension()));
    write_atomic(&output, &document).map_err(|source| FileError::Write {
        path: output.clone(),
        source,
    })?;

    tracing::info!("{} → {}", record.path.display(), output.display());

    let native_imports = match config.target.platform {
        Platform::Native => translation.used_tags.iter().cloned().collect(),
        Platform::Web => Vec::new(),
    };

    Ok(GeneratedFile {
        source: record.path.clone(),
        identifier: record.name.identifier.clone(),
        output,
        native_imports,
    })
}

/// Write `contents` to a temporary sibling, then rename it over `path`.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp, contents)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}
