//! # svgc
//!
//! Converts SVG files into React and React Native component source files.
//! Point it at a folder of icons and an output directory; every `.svg` file
//! becomes one component that renders the same drawing.
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Validate   --folder, --output      →  resolved paths or usage error
//! 2. Scan       input path              →  ordered list of .svg files
//! 3. Load       each file (parallel)    →  SourceRecord (name + optimized markup)
//! 4. Translate  SourceRecord            →  JSX markup + used tags
//! 5. Render     markup + templates      →  component source
//! 6. Write      component source        →  <output>/<Name>.<js|tsx>
//! ```
//!
//! Every stage after validation works per file. A file that cannot be read,
//! parsed or translated is reported with its path and skipped; the others are
//! still written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`paths`] | Existence and kind checks for the CLI path options |
//! | [`scan`] | Lists the `.svg` files addressed by the input path |
//! | [`naming`] | Component file names and JavaScript identifiers from file stems |
//! | [`optimize`] | [`optimize::Optimizer`] trait; usvg-backed and passthrough implementations |
//! | [`translate`] | SVG tree → JSX markup: prop names, styles, native component table |
//! | [`render`] | Dialect template table and the component document builder |
//! | [`process`] | The pipeline: parallel load, sequential generate, per-file errors |
//! | [`config`] | `svgc.toml` loading, merging and validation; the run [`config::Config`] |
//! | [`output`] | Run report formatting |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`types`] | Target dialect and the per-file source record |
//!
//! # Design Decisions
//!
//! ## usvg as the Optimizer
//!
//! Editor-exported SVG is noisy: XML declarations, comments, metadata,
//! CSS classes, `<use>` indirection. `usvg` resolves all of that into a small,
//! regular subset of SVG, which keeps the translator simple and the output
//! small. The optimizer sits behind a trait so it can be switched off
//! (`--no-optimize`) or mocked in tests.
//!
//! ## Errors Stay With Their File
//!
//! Loading returns one `Result` per input path, gathered in a single parallel
//! collect. There is no completion counter to stall and no shared result list
//! to corrupt: a failure is a value that ends up in the report.
//!
//! ## Templates as Data
//!
//! The four dialects (JavaScript/TypeScript × web/native) differ only in a few
//! fixed strings. Those live in one table in [`render`], and a single builder
//! assembles every file from it.

pub mod config;
pub mod logging;
pub mod naming;
pub mod optimize;
pub mod output;
pub mod paths;
pub mod process;
pub mod render;
pub mod scan;
pub mod translate;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
