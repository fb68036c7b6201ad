use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use svgc::config::{self, Config};
use svgc::paths::{self, PathKind};
use svgc::{logging, output, process as pipeline};

const INPUT_HINT: &str =
    "svgc --folder [pathToFiles], path to directory with .svg files or concrete file";
const OUTPUT_HINT: &str = "svgc --output [targetPath], path must be path to folder";

#[derive(Parser)]
#[command(name = "svgc")]
#[command(about = "Convert SVG files into React and React Native components")]
#[command(long_about = "\
Convert SVG files into React and React Native components

Every .svg file in --folder (or the single file given) becomes one component
file in --output, named after the file: arrow-left.svg → Arrow-left.js.

Dialects:
  (default)          React DOM, JavaScript          → Name.js
  --typescript       React DOM, TypeScript          → Name.tsx
  --react-native     react-native-svg, JavaScript   → Name.js
  both               react-native-svg, TypeScript   → Name.tsx

Markup is normalized with usvg before translation unless --no-optimize is
given. Defaults can be set in svgc.toml; run 'svgc gen-config' to print a
documented one.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Path to an .svg file or a directory containing them
    #[arg(short = 'f', long = "folder", value_name = "PATH")]
    folder: Option<PathBuf>,

    /// Existing directory the components are written to
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Generate TypeScript (.tsx) components
    #[arg(short, long)]
    typescript: bool,

    /// Generate react-native-svg components
    #[arg(short = 'n', long)]
    react_native: bool,

    /// Translate the markup as-is, without usvg normalization
    #[arg(long)]
    no_optimize: bool,

    /// Config file (default: ./svgc.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock svgc.toml with all options documented
    GenConfig,
}

fn die(msg: &str) -> ! {
    eprintln!("{}", msg);
    process::exit(1);
}

/// Resolve a CLI path that must exist as `kind`, or exit with `hint`.
fn require_path(path: Option<&Path>, kind: PathKind, hint: &str) -> PathBuf {
    match path {
        Some(p) if paths::is_path_valid(p, kind) => {
            paths::resolve(p).unwrap_or_else(|| die(hint))
        }
        _ => die(&format!("\n{}\n", hint)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    logging::init_cli_logger(cli.verbose);

    let input = require_path(cli.folder.as_deref(), PathKind::Either, INPUT_HINT);
    let output_dir = require_path(cli.output.as_deref(), PathKind::Directory, OUTPUT_HINT);

    let cwd = std::env::current_dir()?;
    let mut settings = config::load_config(cli.config.as_deref(), &cwd)
        .unwrap_or_else(|e| die(&format!("error: {}", e)));

    // CLI overrides
    if cli.typescript {
        settings.component.typescript = true;
    }
    if cli.react_native {
        settings.component.react_native = true;
    }
    if cli.no_optimize {
        settings.optimize.enabled = false;
    }

    init_thread_pool(&settings.processing);

    let config = Config::new(input, output_dir, settings);
    tracing::debug!("run config: {:?}", config);

    let report = pipeline::process(&config)?;
    output::print_report(&report);

    if !report.is_success() {
        process::exit(1);
    }
    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
