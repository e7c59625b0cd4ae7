//! Bundle orchestration.
//!
//! Pipeline phases:
//! - **Scan** - Validate the input directory and list eligible files
//! - **Load** - Read every asset into memory
//! - **Table** - Derive routes and reject identifier collisions
//! - **Render** - Produce the generated source (and header) text
//! - **Write** - Create parent directories and write outputs
//!
//! Every check happens before the first write, so a failed run never
//! leaves partial output behind. The source is written before the header;
//! if the header write fails the new source stays in place next to the old
//! header, which only matters when the guard name changed.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    asset::{Asset, AssetTable, scan_dir},
    codegen::{SourceOptions, include_guard_for, render_header, render_source, write_output},
    config::BundleConfig,
    debug,
};

/// Summary of a finished bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    /// Number of embedded files
    pub assets: usize,
    /// Number of table records (assets plus the `/` alias)
    pub routes: usize,
    /// Embedded bytes, each file counted once
    pub bytes: usize,
    /// Files written, source first
    pub written: Vec<PathBuf>,
}

/// Run the full pipeline for one configuration.
pub fn bundle(config: &BundleConfig) -> Result<BundleReport> {
    // Scan
    let files = scan_dir(&config.input_dir)?;

    // Load
    let assets = files
        .iter()
        .map(|path| Asset::load(path))
        .collect::<Result<Vec<_>>>()?;

    // Table
    let table = AssetTable::build(assets)?;
    for route in table.routes() {
        let asset = table.asset_for(route);
        debug!("asset"; "{} -> {} ({}, {} bytes)",
            route.path, asset.array_name(), route.content_type, asset.body.len());
    }

    // Render
    let source = render_source(
        &table,
        &SourceOptions {
            header_include: config.header_include.clone(),
        },
    );
    let header = config
        .output_h
        .as_ref()
        .map(|path| (path, render_header(&include_guard_for(path))));

    // Write
    let mut written = Vec::with_capacity(2);
    write_output(&config.output_c, &source)?;
    written.push(config.output_c.clone());
    if let Some((path, text)) = header {
        write_output(path, &text)?;
        written.push(path.clone());
    }

    Ok(BundleReport {
        assets: table.assets().len(),
        routes: table.routes().len(),
        bytes: table.total_bytes(),
        written,
    })
}
