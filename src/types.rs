//! Shared types passed between pipeline stages.

use crate::naming::ComponentName;
use std::path::PathBuf;

/// Language of the generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
}

/// Rendering platform of the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// DOM `<svg>` elements, rendered by `react-dom`.
    Web,
    /// `react-native-svg` components (`<Svg>`, `<Path>`, ...).
    Native,
}

/// The dialect a run generates: one language on one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub language: Language,
    pub platform: Platform,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            language: Language::JavaScript,
            platform: Platform::Web,
        }
    }
}

/// An input file after reading and optimization, ready to be translated.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    pub path: PathBuf,
    pub name: ComponentName,
    pub markup: String,
}
