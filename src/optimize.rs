//! Markup optimization backends.
//!
//! The [`Optimizer`] trait is the seam between the pipeline and whatever
//! normalizes raw SVG text before translation. The pipeline takes an
//! optimizer by reference and calls it once per file, possibly from several
//! rayon workers at once, so implementations must be `Sync` and hold no
//! per-file state.
//!
//! | Backend | Behavior |
//! |---|---|
//! | [`UsvgOptimizer`] | Parses with `usvg`, resolves styles/`use`/shapes, re-serializes compact SVG |
//! | [`Passthrough`] | Returns the input unchanged (`--no-optimize`) |

use crate::config::OptimizeConfig;
use roxmltree::{Document, ParsingOptions};
use std::sync::Arc;
use thiserror::Error;
use usvg::fontdb;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("unparsable input: {0}")]
    Unparsable(String),
    #[error("<text> content would be dropped: no usable font for it")]
    TextDropped,
}

/// Normalizes raw SVG text.
pub trait Optimizer: Sync {
    fn optimize(&self, markup: &str) -> Result<String, OptimizeError>;
}

/// Production optimizer backed by `usvg`.
///
/// `usvg` flattens CSS into attributes, converts basic shapes to paths,
/// inlines `<use>` references and drops editor metadata, comments and
/// invisible elements. Numbers are rounded to `precision` decimals.
///
/// `usvg` keeps `<text>` only when it can resolve a font for it, so the
/// system fonts are loaded once up front. A document whose text would still
/// vanish is rejected with [`OptimizeError::TextDropped`].
///
/// The root `viewBox` is folded into a transform by `usvg`; it is written
/// back from the tree size so the component still scales when `width` and
/// `height` are overridden.
#[derive(Clone)]
pub struct UsvgOptimizer {
    precision: u8,
    fontdb: Arc<fontdb::Database>,
}

impl std::fmt::Debug for UsvgOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsvgOptimizer")
            .field("precision", &self.precision)
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl UsvgOptimizer {
    pub fn new(precision: u8) -> Self {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        tracing::debug!("loaded {} font face(s) for text", fonts.len());
        Self::with_fonts(precision, Arc::new(fonts))
    }

    pub fn with_fonts(precision: u8, fontdb: Arc<fontdb::Database>) -> Self {
        Self { precision, fontdb }
    }
}

impl Default for UsvgOptimizer {
    fn default() -> Self {
        Self::new(OptimizeConfig::default().precision)
    }
}

impl Optimizer for UsvgOptimizer {
    fn optimize(&self, markup: &str) -> Result<String, OptimizeError> {
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(markup, &options)
            .map_err(|e| OptimizeError::Unparsable(e.to_string()))?;

        let write_options = usvg::WriteOptions {
            coordinates_precision: self.precision,
            transforms_precision: self.precision,
            preserve_text: true,
            ..usvg::WriteOptions::default()
        };
        let out = tree.to_string(&write_options);

        if has_text(markup) && !has_text(&out) {
            return Err(OptimizeError::TextDropped);
        }

        let size = tree.size();
        Ok(with_view_box(&out, size.width(), size.height()))
    }
}

/// Whether the document has a `<text>` element with visible characters.
fn has_text(markup: &str) -> bool {
    let parsing = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let Ok(doc) = Document::parse_with_options(markup, parsing) else {
        return false;
    };
    doc.descendants().any(|n| {
        n.has_tag_name("text")
            && n.descendants()
                .any(|t| t.is_text() && t.text().is_some_and(|s| !s.trim().is_empty()))
    })
}

/// Put `viewBox="0 0 width height"` on the root `<svg>` unless it has one.
fn with_view_box(svg: &str, width: f32, height: f32) -> String {
    let Some(start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let tag_end = svg[start..].find('>').map_or(svg.len(), |i| start + i);
    if svg[start..tag_end].contains("viewBox=") {
        return svg.to_string();
    }

    let insert_at = start + "<svg".len();
    format!(
        "{} viewBox=\"0 0 {} {}\"{}",
        &svg[..insert_at],
        width,
        height,
        &svg[insert_at..]
    )
}

/// Hands markup to translation untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Optimizer for Passthrough {
    fn optimize(&self, markup: &str) -> Result<String, OptimizeError> {
        Ok(markup.to_string())
    }
}

/// Pick the optimizer described by the config.
pub fn from_config(config: &OptimizeConfig) -> Box<dyn Optimizer> {
    if config.enabled {
        Box::new(UsvgOptimizer::new(config.precision))
    } else {
        Box::new(Passthrough)
    }
}
