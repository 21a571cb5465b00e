// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Top-edge extraction
//!
//! A slab's audit candidates are its feature edges lying in the top plane.
//! Feature enumeration reports every edge once per adjoining face, so the
//! raw uses are collapsed by quantized segment identity before probing.

use crate::config::Z_TOLERANCE;
use crate::key::segment_key;
use crate::model::{BoundaryEdge, Slab};
use rustc_hash::FxHashSet;

/// Extract the deduplicated top boundary edges of a slab.
///
/// An edge qualifies when its parametric midpoint lies within
/// [`Z_TOLERANCE`] of the slab's top elevation, which selects the top
/// perimeter and discards vertical and bottom edges. Triangulation diagonals
/// are already filtered out by the feature-edge enumeration.
pub fn extract_top_edges(slab: &Slab) -> Vec<BoundaryEdge> {
    let top = slab.top_elevation();
    let mut seen = FxHashSet::default();
    let mut edges = Vec::new();

    for edge_use in slab.solid.feature_edges() {
        if (edge_use.midpoint().z - top).abs() > Z_TOLERANCE {
            continue;
        }

        if seen.insert(segment_key(&edge_use.start, &edge_use.end)) {
            edges.push(BoundaryEdge {
                start: edge_use.start,
                end: edge_use.end,
            });
        }
    }

    edges
}
