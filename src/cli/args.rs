//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Embed a flat directory of web assets into a C lookup table
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Source directory with web files (flat, not recursed)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub input_dir: Option<PathBuf>,

    /// Output .c file path
    #[arg(short = 'o', long = "output-c", value_hint = clap::ValueHint::FilePath)]
    pub output_c: Option<PathBuf>,

    /// Also write the header declaring `web_assets_get` to this path
    #[arg(long = "output-h", value_hint = clap::ValueHint::FilePath)]
    pub output_h: Option<PathBuf>,

    /// Header path used in the generated `#include` (default: web/web_assets.h)
    #[arg(long)]
    pub header_include: Option<String>,

    /// Config file path (default: web-assets.toml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
