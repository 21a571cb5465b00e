// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Probe construction
//!
//! Each top edge gets a one-metre-tall vertical probe sheet standing 5 cm
//! off the edge on the outward side. Whatever of the probe survives wall
//! subtraction later marks the unprotected stretch of the edge.
//!
//! Which side is "outward" is decided by a pluggable [`DirectionResolver`]:
//! the default offsets a test point from the edge midpoint along the
//! candidate perpendicular and measures its distance to the slab. A
//! near-zero distance means the point landed on the slab's walking surface,
//! so the candidate points inward and is flipped.

use crate::config::{DIST_THRESHOLD, LENGTH_DIFF, MIN_WALL_HEIGHT, OFFSET};
use crate::error::{Error, Result};
use crate::model::{BoundaryEdge, Slab};
use slabguard_geometry::{distance_to_solid, Point3, Sheet, Vector3};

/// Decides the outward horizontal direction for an edge's probe
pub trait DirectionResolver: Sync {
    /// Given a unit candidate perpendicular, return the outward unit
    /// perpendicular (either the candidate or its negation)
    fn outward(&self, edge: &BoundaryEdge, candidate: Vector3<f64>, slab: &Slab) -> Vector3<f64>;
}

/// Default resolver: distance test against the slab solid
#[derive(Debug, Clone, Copy)]
pub struct DistanceDirectionResolver {
    pub threshold: f64,
}

impl Default for DistanceDirectionResolver {
    fn default() -> Self {
        Self {
            threshold: DIST_THRESHOLD,
        }
    }
}

impl DirectionResolver for DistanceDirectionResolver {
    fn outward(&self, edge: &BoundaryEdge, candidate: Vector3<f64>, slab: &Slab) -> Vector3<f64> {
        let test = Point3::from(edge.midpoint().coords + candidate * OFFSET);
        let distance = distance_to_solid(&test, &slab.solid);
        if distance <= self.threshold {
            tracing::debug!(slab = %slab.name, distance, "probe direction reversed");
            -candidate
        } else {
            candidate
        }
    }
}

/// A probe sheet together with the trimmed edge it was built from
#[derive(Debug, Clone)]
pub struct Probe {
    pub sheet: Sheet,
    pub trimmed_start: Point3<f64>,
    pub trimmed_end: Point3<f64>,
    pub outward: Vector3<f64>,
}

/// Build the probe sheet for one top edge.
///
/// The edge is shortened by [`LENGTH_DIFF`] at both ends; edges too short to
/// survive the trim are rejected as degenerate. The trimmed segment is then
/// pushed [`OFFSET`] outward and extruded [`MIN_WALL_HEIGHT`] upward.
pub fn build_probe(
    edge: &BoundaryEdge,
    slab: &Slab,
    resolver: &dyn DirectionResolver,
) -> Result<Probe> {
    let length = edge.length();
    if length <= 2.0 * LENGTH_DIFF {
        return Err(Error::DegenerateEdge(format!(
            "edge of length {length:.3} m is shorter than twice the end trim"
        )));
    }

    let direction = edge.direction();
    let tangent = Vector3::new(direction.x, direction.y, 0.0)
        .try_normalize(1e-12)
        .ok_or_else(|| {
            Error::DegenerateEdge("edge has no horizontal extent".to_string())
        })?;

    let trimmed_start = Point3::from(edge.start.coords + tangent * LENGTH_DIFF);
    let trimmed_end = Point3::from(edge.end.coords - tangent * LENGTH_DIFF);

    let candidate = Vector3::new(tangent.y, -tangent.x, 0.0);
    let outward = resolver.outward(edge, candidate, slab);

    let sheet = Sheet::extrude_segment(
        Point3::from(trimmed_start.coords + outward * OFFSET),
        Point3::from(trimmed_end.coords + outward * OFFSET),
        MIN_WALL_HEIGHT,
    )?;

    Ok(Probe {
        sheet,
        trimmed_start,
        trimmed_end,
        outward,
    })
}
