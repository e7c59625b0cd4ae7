//! web-assets-gen - Embed static web assets into a C lookup table for firmware.

mod asset;
mod cli;
mod codegen;
mod config;
mod logger;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, bundle::bundle};
use config::BundleConfig;
use utils::plural_count;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration and generate the asset table.
fn run(cli: &Cli) -> Result<()> {
    let config = BundleConfig::load(cli)?;
    debug!("config"; "input {} -> output {}",
        config.input_dir.display(), config.output_c.display());

    let report = bundle(&config)?;

    let written: Vec<_> = report.written.iter().map(|p| p.display().to_string()).collect();
    log!("bundle"; "wrote {} ({}, {}) to {}",
        plural_count(report.assets, "asset"),
        plural_count(report.bytes, "byte"),
        plural_count(report.routes, "route"),
        written.join(", "));
    Ok(())
}
