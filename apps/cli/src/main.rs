// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: audit a building scene for unprotected fall edges
//!
//! Reads a JSON scene of slab and wall solids, runs the edge audit and
//! writes the findings CSV.
//!
//! Usage:
//!   slabguard <scene.json> [options]

mod obj;
mod scene;

use anyhow::{bail, Context, Result};
use scene::Scene;
use slabguard_analysis::{audit_model, AuditConfig};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return Ok(());
    }

    let scene_path = PathBuf::from(&args[1]);

    let mut output_path = PathBuf::from("edges.csv");
    let mut site_elevation: Option<f64> = None;
    let mut dump_dir: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--output requires a path");
                };
                output_path = PathBuf::from(value);
            }
            "--site-elevation" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--site-elevation requires a value");
                };
                site_elevation =
                    Some(value.parse().context("invalid --site-elevation value")?);
            }
            "--dump-obj" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--dump-obj requires a directory");
                };
                dump_dir = Some(PathBuf::from(value));
            }
            other => bail!("unknown option: {other}"),
        }
        i += 1;
    }

    let scene = Scene::load(&scene_path)?;
    let config = AuditConfig::new(site_elevation.unwrap_or(scene.site_elevation));
    let model = scene.to_model()?;

    info!(
        scene = %scene_path.display(),
        site_elevation = config.site_elevation,
        "auditing scene"
    );

    let outcome = audit_model(&model, &config);

    slabguard_report::write_csv_file(&output_path, &outcome.segments)
        .with_context(|| format!("writing {}", output_path.display()))?;
    info!(
        findings = outcome.segments.len(),
        skipped_edges = outcome.skipped_edges,
        output = %output_path.display(),
        "report written"
    );

    if let Some(dir) = dump_dir {
        obj::dump_sheets(&dir, &outcome)?;
        info!(dir = %dir.display(), "sheet meshes dumped");
    }

    Ok(())
}

fn print_usage() {
    println!("slabguard - fall-edge auditor for building scenes");
    println!();
    println!("Usage: slabguard <scene.json> [options]");
    println!();
    println!("Options:");
    println!("  -o, --output <path>        Findings CSV path (default: edges.csv)");
    println!("  --site-elevation <m>       Override the scene's terrain elevation");
    println!("  --dump-obj <dir>           Dump safe/unsafe probe sheets as OBJ");
    println!("  -h, --help                 Show this help");
}
