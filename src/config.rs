//! Tool configuration.
//!
//! Two layers feed a run:
//!
//! 1. **`svgc.toml`** (optional): project-wide defaults for the target dialect,
//!    the optimizer and parallelism. Looked up in the current directory unless
//!    `--config` points elsewhere. Sparse files are merged over stock defaults.
//! 2. **CLI flags**: `--typescript` and `--react-native` switch a dialect on,
//!    `--no-optimize` switches optimization off.
//!
//! The result is a [`Config`], built once in `main` and read by every stage.
//!
//! ## Configuration Options
//!
//! ```toml
//! [component]
//! typescript = false     # emit .tsx with typed props
//! react_native = false   # emit react-native-svg components
//! spread_props = true    # add {...props} to the root <svg>
//!
//! [optimize]
//! enabled = true         # run markup through usvg before translating
//! precision = 3          # decimals kept for coordinates and transforms (1-8)
//!
//! [processing]
//! max_processes = 4      # parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{Language, Platform, Target};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "svgc.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Contents of `svgc.toml`. All fields have defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgcConfig {
    pub component: ComponentConfig,
    pub optimize: OptimizeConfig,
    pub processing: ProcessingConfig,
}

impl SvgcConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=8).contains(&self.optimize.precision) {
            return Err(ConfigError::Validation(
                "optimize.precision must be 1-8".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Which dialect of component to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentConfig {
    pub typescript: bool,
    pub react_native: bool,
    /// Spread the component's props onto the root element.
    pub spread_props: bool,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            typescript: false,
            react_native: false,
            spread_props: true,
        }
    }
}

impl ComponentConfig {
    pub fn target(&self) -> Target {
        Target {
            language: if self.typescript {
                Language::TypeScript
            } else {
                Language::JavaScript
            },
            platform: if self.react_native {
                Platform::Native
            } else {
                Platform::Web
            },
        }
    }
}

/// Optimization step settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizeConfig {
    pub enabled: bool,
    pub precision: u8,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            precision: 3,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel read/optimize workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Everything a run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target: Target,
    pub spread_props: bool,
    pub optimize: OptimizeConfig,
    pub processing: ProcessingConfig,
}

impl Config {
    pub fn new(input: PathBuf, output: PathBuf, settings: SvgcConfig) -> Self {
        Self {
            input,
            output,
            target: settings.component.target(),
            spread_props: settings.component.spread_props,
            optimize: settings.optimize,
            processing: settings.processing,
        }
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SvgcConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SvgcConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SvgcConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the tool config.
///
/// An explicit path must exist. Without one, `svgc.toml` in `cwd` is used
/// when present, otherwise the stock defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<SvgcConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let default_path = cwd.join(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                tracing::debug!("using config {}", default_path.display());
                Some(load_raw_config(&default_path)?)
            } else {
                None
            }
        }
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `svgc.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# svgc configuration
# ==================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.
#
# CLI flags are applied on top: --typescript and --react-native turn a
# dialect on, --no-optimize turns optimization off.

# ---------------------------------------------------------------------------
# Generated components
# ---------------------------------------------------------------------------
[component]
# Emit TypeScript (.tsx) with typed props instead of JavaScript (.js).
typescript = false

# Emit react-native-svg components (<Svg>, <Path>, ...) instead of DOM <svg>.
react_native = false

# Spread the component's props onto the root element so callers can
# override width, height, fill, etc.
spread_props = true

# ---------------------------------------------------------------------------
# Optimization
# ---------------------------------------------------------------------------
[optimize]
# Normalize markup with usvg before translating it.
enabled = true

# Decimal places kept for coordinates and transforms (1-8).
precision = 3

# ---------------------------------------------------------------------------
# Parallel processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel workers for reading and optimizing files.
# Omit to use all CPU cores. Values above the core count are clamped.
# max_processes = 4
"##
}
