// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sheet tessellation
//!
//! Turns a sheet's 2D region into world-space render triangles via ear
//! clipping. Holes are handled by earcut's hole-index mechanism.

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::region::Shape;
use crate::sheet::Sheet;

/// Tessellate a sheet into a render mesh.
///
/// Degenerate shapes are skipped; an empty sheet yields an empty mesh.
pub fn tessellate_sheet(sheet: &Sheet) -> Result<Mesh> {
    let mut mesh = Mesh::new();

    for shape in &sheet.region.shapes {
        tessellate_shape(sheet, shape, &mut mesh)?;
    }

    Ok(mesh)
}

fn tessellate_shape(sheet: &Sheet, shape: &Shape, mesh: &mut Mesh) -> Result<()> {
    if shape.outer.len() < 3 {
        return Ok(());
    }

    let mut flat: Vec<f64> = Vec::with_capacity((shape.outer.len() + shape.holes.len() * 4) * 2);
    let mut hole_indices: Vec<usize> = Vec::with_capacity(shape.holes.len());

    for p in &shape.outer {
        flat.push(p.x);
        flat.push(p.y);
    }
    for hole in &shape.holes {
        hole_indices.push(flat.len() / 2);
        for p in hole {
            flat.push(p.x);
            flat.push(p.y);
        }
    }

    let triangles = earcutr::earcut(&flat, &hole_indices, 2)
        .map_err(|e| Error::Triangulation(format!("{e:?}")))?;

    let base = mesh.vertex_count() as u32;
    for i in 0..flat.len() / 2 {
        let world = sheet.frame.to_world(flat[i * 2], flat[i * 2 + 1]);
        mesh.push_vertex(&world);
    }
    mesh.indices
        .extend(triangles.iter().map(|&i| base + i as u32));

    Ok(())
}
