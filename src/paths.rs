//! Input and output path validation.
//!
//! The CLI checks both `--folder` and `--output` before anything touches the
//! filesystem. Validation never errors: a path that is missing, unreadable,
//! or of the wrong kind simply reports `false`, and the caller decides how to
//! tell the user.

use std::fs;
use std::path::{Path, PathBuf};

/// The kind of filesystem entry a path is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    /// A regular file or a directory.
    Either,
}

/// Resolve `path` against the current working directory when relative.
///
/// Returns `None` only if the path is relative and the working directory
/// cannot be determined.
pub fn resolve(path: &Path) -> Option<PathBuf> {
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        std::env::current_dir().ok().map(|cwd| cwd.join(path))
    }
}

/// Check that `path` exists and is of the expected kind.
///
/// Symlinks are followed, so a link to a directory counts as a directory.
pub fn is_path_valid(path: &Path, kind: PathKind) -> bool {
    let Some(resolved) = resolve(path) else {
        return false;
    };
    let Ok(meta) = fs::metadata(&resolved) else {
        return false;
    };
    match kind {
        PathKind::File => meta.is_file(),
        PathKind::Directory => meta.is_dir(),
        PathKind::Either => meta.is_file() || meta.is_dir(),
    }
}
