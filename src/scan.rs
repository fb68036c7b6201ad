//! Input discovery.
//!
//! Turns the validated `--folder` path into the ordered list of SVG files to
//! convert:
//!
//! ```text
//! icons/                 → [icons/arrow.svg, icons/close.svg]
//! ├── arrow.svg
//! ├── close.svg
//! ├── notes.txt          (skipped: wrong extension)
//! └── outlined/          (skipped: subdirectories are not walked)
//!     └── arrow.svg
//!
//! icons/arrow.svg        → [icons/arrow.svg]
//! icons/notes.txt        → []
//! ```
//!
//! Directory entries are sorted by file name so later stages see a stable
//! order regardless of what the filesystem returns.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read input directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub const SVG_EXTENSION: &str = "svg";

/// Whether `path` carries the `.svg` extension (ASCII case-insensitive).
pub fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(SVG_EXTENSION))
        .unwrap_or(false)
}

/// List the SVG files addressed by `input`.
///
/// A directory yields its immediate `.svg` regular files, sorted. An `.svg`
/// file yields itself. Anything else yields nothing.
pub fn list_svg_files(input: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if input.is_file() {
        if has_svg_extension(input) {
            return Ok(vec![input.to_path_buf()]);
        }
        tracing::warn!("{} is not an .svg file, nothing to convert", input.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if entry.file_type().is_file() && has_svg_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "<svg/>").unwrap();
    }

    #[test]
    fn directory_lists_only_svg_files_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("close.svg"));
        touch(&tmp.path().join("arrow.svg"));
        touch(&tmp.path().join("notes.txt"));

        let files = list_svg_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["arrow.svg", "close.svg"]);
    }

    #[test]
    fn subdirectories_are_not_walked() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("outlined");
        fs::create_dir(&nested).unwrap();
        touch(&nested.join("arrow.svg"));
        // A directory named like an svg file is still a directory
        fs::create_dir(tmp.path().join("folder.svg")).unwrap();

        assert!(list_svg_files(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn directory_without_svg_files_is_empty() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("readme.md"));
        touch(&tmp.path().join("logo.png"));
        assert!(list_svg_files(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn single_svg_file_yields_itself() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("icon.svg");
        touch(&file);
        assert_eq!(list_svg_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn single_non_svg_file_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("icon.png");
        touch(&file);
        assert!(list_svg_files(&file).unwrap().is_empty());
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(has_svg_extension(Path::new("Logo.SVG")));
        assert!(has_svg_extension(Path::new("logo.svg")));
        assert!(!has_svg_extension(Path::new("logo.svgz")));
        assert!(!has_svg_extension(Path::new("svg")));
    }
}
