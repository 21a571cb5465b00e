// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ dump of audit sheets
//!
//! Writes the shielded and exposed probe sheets as Wavefront OBJ files for
//! quick inspection in any mesh viewer, plus small octahedron markers at the
//! endpoints of the reported segments.

use anyhow::{Context, Result};
use slabguard_analysis::AuditOutcome;
use slabguard_geometry::{tessellate_sheet, Mesh, Point3, Sheet};
use std::fmt::Write as _;
use std::path::Path;

/// Marker half-extent in metres
const MARKER_RADIUS: f64 = 0.05;

/// Write `safe.obj`, `unsafe.obj` and `endpoints.obj` into the given directory
pub fn dump_sheets(dir: &Path, outcome: &AuditOutcome) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating dump directory {}", dir.display()))?;

    let safe = merge_sheets(outcome.edges.iter().map(|e| &e.safe_sheet))?;
    let exposed = merge_sheets(outcome.edges.iter().map(|e| &e.unsafe_sheet))?;

    let mut markers = Mesh::new();
    for p in outcome.qualifying_endpoints() {
        push_marker(&mut markers, &p);
    }

    write_obj(&dir.join("safe.obj"), &safe)?;
    write_obj(&dir.join("unsafe.obj"), &exposed)?;
    write_obj(&dir.join("endpoints.obj"), &markers)?;
    Ok(())
}

/// Append an octahedron marker centred on `p`
fn push_marker(mesh: &mut Mesh, p: &Point3<f64>) {
    let r = MARKER_RADIUS;
    let base = [
        mesh.push_vertex(&Point3::new(p.x + r, p.y, p.z)),
        mesh.push_vertex(&Point3::new(p.x - r, p.y, p.z)),
        mesh.push_vertex(&Point3::new(p.x, p.y + r, p.z)),
        mesh.push_vertex(&Point3::new(p.x, p.y - r, p.z)),
        mesh.push_vertex(&Point3::new(p.x, p.y, p.z + r)),
        mesh.push_vertex(&Point3::new(p.x, p.y, p.z - r)),
    ];
    let [px, nx, py, ny, pz, nz] = base;
    for tri in [
        [px, py, pz],
        [py, nx, pz],
        [nx, ny, pz],
        [ny, px, pz],
        [py, px, nz],
        [nx, py, nz],
        [ny, nx, nz],
        [px, ny, nz],
    ] {
        mesh.indices.extend_from_slice(&tri);
    }
}

fn merge_sheets<'a>(sheets: impl Iterator<Item = &'a Sheet>) -> Result<Mesh> {
    let mut merged = Mesh::new();
    for sheet in sheets {
        if sheet.is_degenerate() {
            continue;
        }
        let mesh = tessellate_sheet(sheet).context("tessellating audit sheet")?;
        merged.merge(&mesh);
    }
    Ok(merged)
}

fn write_obj(path: &Path, mesh: &Mesh) -> Result<()> {
    let mut text = String::new();
    for v in mesh.positions.chunks(3) {
        let _ = writeln!(text, "v {} {} {}", v[0], v[1], v[2]);
    }
    for t in mesh.indices.chunks(3) {
        // OBJ indices are 1-based
        let _ = writeln!(text, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1);
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
