//! Component naming from SVG file names.
//!
//! Every input file produces one component. Two names are derived from the
//! file stem:
//!
//! - **File name**: the stem with its first character uppercased
//!   (`arrow-left.svg` → `Arrow-left`). The generated file is written as
//!   `Arrow-left.js`.
//! - **Identifier**: the name used inside the generated source. It must be a
//!   valid JavaScript identifier, so separators are dropped and each word is
//!   capitalized (`arrow-left` → `ArrowLeft`). Stems starting with a digit get
//!   an `Svg` prefix (`24px` → `Svg24px`).

use std::path::Path;

/// Names derived from one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    /// Capitalized file stem, used for the output file name.
    pub file_stem: String,
    /// JavaScript identifier used for the declaration and export.
    pub identifier: String,
}

impl ComponentName {
    /// Derive both names from an input path. Returns `None` for paths without
    /// a usable stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_string_lossy();
        if stem.is_empty() {
            return None;
        }
        Some(Self::from_stem(&stem))
    }

    pub fn from_stem(stem: &str) -> Self {
        Self {
            file_stem: capitalize(stem),
            identifier: to_identifier(stem),
        }
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a PascalCase JavaScript identifier from an arbitrary stem.
pub fn to_identifier(stem: &str) -> String {
    let mut ident: String = stem
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if ident.is_empty() {
        return "Svg".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, "Svg");
    }
    ident
}
