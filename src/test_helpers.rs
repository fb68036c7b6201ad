//! Shared test utilities for the svgc test suite.
//!
//! Provides sample SVG documents, temp-directory setup and helpers to read
//! back what a run wrote.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (input, output) = setup_dirs();
//! write_svg(input.path(), "icon.svg", SQUARE_SVG);
//! let config = passthrough_config(input.path(), output.path());
//! process_with_optimizer(&Passthrough, &config).unwrap();
//! assert_eq!(output_names(output.path()), vec!["Icon.js"]);
//! ```

use crate::config::{Config, SvgcConfig};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Sample documents
// =========================================================================

pub const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <rect x="2" y="2" width="20" height="20" fill="none" stroke="#000" stroke-width="2"/>
</svg>
"##;

pub const NESTED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <g fill-rule="evenodd">
    <path d="M0 0h12v12H0z"/>
    <path d="M12 12h12v12H12z"/>
  </g>
  <circle cx="12" cy="12" r="4"/>
  <path d="M0 24h24"/>
</svg>
"#;

pub const TITLED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <title>Titled icon</title>
  <path d="M0 0h24v24H0z"/>
</svg>
"#;

pub const TRUNCATED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <path d="M0 0h24v24H0z"
"#;

// =========================================================================
// Fixture setup
// =========================================================================

/// Fresh input and output directories.
pub fn setup_dirs() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_svg(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// A config that skips usvg so tests see translation of the exact input.
pub fn passthrough_config(input: &Path, output: &Path) -> Config {
    let mut settings = SvgcConfig::default();
    settings.optimize.enabled = false;
    Config::new(input.to_path_buf(), output.to_path_buf(), settings)
}

// =========================================================================
// Output inspection
// =========================================================================

/// Sorted file names in `dir`.
pub fn output_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Every file in `dir` keyed by name.
pub fn read_outputs(dir: &Path) -> BTreeMap<String, String> {
    output_names(dir)
        .into_iter()
        .map(|name| {
            let content = fs::read_to_string(dir.join(&name)).unwrap();
            (name, content)
        })
        .collect()
}
