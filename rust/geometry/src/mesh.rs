// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render mesh output
//!
//! Audit artifacts (probe remainders, safe/unsafe sheets) are exported as
//! flat f32 triangle meshes for viewers. Analysis itself never runs on
//! these; precision stays in the f64 solids.

use crate::Point3;

/// Triangle mesh with flat position and index buffers
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions [x0, y0, z0, x1, y1, z1, ...]
    pub positions: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh has no geometry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append a vertex, returning its index
    pub fn push_vertex(&mut self, p: &Point3<f64>) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions
            .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        index
    }

    /// Append another mesh's geometry to this one
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }
}
