// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle-mesh solids
//!
//! Opaque building solids (slabs, walls) are carried as indexed triangle
//! meshes in f64 world coordinates. The audit pipeline only needs a small
//! capability set from them: bounds, surface-area checks, plane sections,
//! point distance and feature-edge enumeration.

use crate::{Point3, Vector3};
use rustc_hash::FxHashMap;

/// Minimum area for a triangle to contribute surface
const MIN_TRIANGLE_AREA: f64 = 1e-12;

/// Quantization scale for edge identity (micrometer precision)
const EDGE_KEY_SCALE: f64 = 1e6;

/// Dot-product tolerance below which two face normals count as distinct
const COPLANAR_DOT_TOLERANCE: f64 = 1e-6;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    /// Top elevation of the box (maximum Z)
    #[inline]
    pub fn top(&self) -> f64 {
        self.max.z
    }
}

/// One directed traversal of a feature edge by an adjoining face.
///
/// A perimeter edge of a closed solid is traversed once per adjoining face,
/// in opposite directions, so the same logical edge shows up twice here.
/// Deduplication is the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct EdgeUse {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl EdgeUse {
    /// Point at the parametric midpoint of the (straight) edge
    #[inline]
    pub fn midpoint(&self) -> Point3<f64> {
        Point3::from((self.start.coords + self.end.coords) * 0.5)
    }
}

/// Indexed triangle mesh solid in f64 world coordinates
#[derive(Debug, Clone, Default)]
pub struct Solid {
    /// Vertex positions
    pub positions: Vec<Point3<f64>>,
    /// Triangle vertex indices
    pub triangles: Vec<[u32; 3]>,
}

impl Solid {
    /// Create a new empty solid
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a solid from vertex and triangle lists
    pub fn from_parts(positions: Vec<Point3<f64>>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            triangles,
        }
    }

    /// Create an axis-aligned box solid from min/max bounds.
    /// Returns a closed mesh with 12 triangles (2 per face, 6 faces),
    /// counter-clockwise winding when viewed from outside.
    pub fn from_box(min: Point3<f64>, max: Point3<f64>) -> Self {
        let positions = vec![
            Point3::new(min.x, min.y, min.z), // 0
            Point3::new(max.x, min.y, min.z), // 1
            Point3::new(max.x, max.y, min.z), // 2
            Point3::new(min.x, max.y, min.z), // 3
            Point3::new(min.x, min.y, max.z), // 4
            Point3::new(max.x, min.y, max.z), // 5
            Point3::new(max.x, max.y, max.z), // 6
            Point3::new(min.x, max.y, max.z), // 7
        ];

        let triangles = vec![
            // Bottom (z = min.z), normal -Z
            [0, 2, 1],
            [0, 3, 2],
            // Top (z = max.z), normal +Z
            [4, 5, 6],
            [4, 6, 7],
            // Front (y = min.y), normal -Y
            [0, 1, 5],
            [0, 5, 4],
            // Back (y = max.y), normal +Y
            [2, 3, 7],
            [2, 7, 6],
            // Left (x = min.x), normal -X
            [0, 4, 7],
            [0, 7, 3],
            // Right (x = max.x), normal +X
            [1, 2, 6],
            [1, 6, 5],
        ];

        Self {
            positions,
            triangles,
        }
    }

    /// Check if the solid has no faces at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check whether the solid carries any actual surface area.
    /// A solid whose triangles are all degenerate is treated the same as an
    /// empty one; both are skipped by boolean preconditions.
    pub fn has_surface_area(&self) -> bool {
        self.triangles_iter().any(|(v0, v1, v2)| {
            let area = (v1 - v0).cross(&(v2 - v0)).norm() * 0.5;
            area > MIN_TRIANGLE_AREA
        })
    }

    /// Calculate bounds, or `None` for an empty solid
    pub fn bounds(&self) -> Option<Aabb> {
        if self.positions.is_empty() {
            return None;
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);

        for p in &self.positions {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some(Aabb { min, max })
    }

    /// Iterate over triangles as vertex triples
    pub fn triangles_iter(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>, Point3<f64>)> + '_ {
        self.triangles.iter().map(|t| {
            (
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            )
        })
    }

    /// Enumerate feature-edge uses of the solid.
    ///
    /// An edge is a feature edge when it borders the mesh (one adjoining
    /// triangle) or when its adjoining triangles are non-coplanar. Edges
    /// interior to a planar face (triangulation diagonals) are dropped.
    /// Every feature edge is returned once per adjoining triangle, preserving
    /// that triangle's traversal direction.
    pub fn feature_edges(&self) -> Vec<EdgeUse> {
        let quantize = |p: &Point3<f64>| -> (i64, i64, i64) {
            (
                (p.x * EDGE_KEY_SCALE).round() as i64,
                (p.y * EDGE_KEY_SCALE).round() as i64,
                (p.z * EDGE_KEY_SCALE).round() as i64,
            )
        };

        type QKey = (i64, i64, i64);
        let mut uses: FxHashMap<(QKey, QKey), Vec<(Vector3<f64>, EdgeUse)>> = FxHashMap::default();

        for (v0, v1, v2) in self.triangles_iter() {
            let normal = match (v1 - v0).cross(&(v2 - v0)).try_normalize(1e-12) {
                Some(n) => n,
                None => continue, // degenerate triangle
            };

            for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
                let (qa, qb) = (quantize(&a), quantize(&b));
                let key = if qa < qb { (qa, qb) } else { (qb, qa) };
                uses.entry(key)
                    .or_default()
                    .push((normal, EdgeUse { start: a, end: b }));
            }
        }

        let mut edges = Vec::new();
        for entries in uses.values() {
            let is_feature = match entries.as_slice() {
                [] => false,
                [_] => true, // mesh boundary
                many => {
                    let first = many[0].0;
                    many[1..]
                        .iter()
                        .any(|(n, _)| first.dot(n) < 1.0 - COPLANAR_DOT_TOLERANCE)
                }
            };

            if is_feature {
                edges.extend(entries.iter().map(|(_, e)| *e));
            }
        }

        edges
    }
}
