// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unsafe boundary segments
//!
//! After shielding, the exposed remainder's bottom boundary traces the
//! unprotected stretch of the slab edge. Those horizontal segments are the
//! audit's primary finding. Where the exposed remainder meets a shielded
//! part, the shared boundary is additionally marked by transition points:
//! zero-length segments at the lowest elevation observed per horizontal
//! position of the shared curve.

use crate::config::Z_TOLERANCE;
use crate::key::{canonical_orientation, point_key, round_point, segment_key, xy_key};
use crate::shielding::ShieldingOutcome;
use rustc_hash::{FxHashMap, FxHashSet};
use slabguard_geometry::Point3;

/// A reported stretch of unprotected edge. Zero-length segments
/// (`start == end`) mark safe/unsafe transition points.
pub type UnsafeSegment = (Point3<f64>, Point3<f64>);

/// Extract the unprotected boundary segments of one probe.
///
/// Segments are taken from the exposed remainder's boundary at the probe's
/// bottom elevation, rounded to millimetres, oriented canonically and
/// deduplicated. Transition points against the shielded part share the same
/// dedup set, so a transition coinciding with a segment endpoint is still
/// emitted exactly once.
pub fn extract_unsafe_segments(
    outcome: &ShieldingOutcome,
    reference_z: f64,
) -> Vec<UnsafeSegment> {
    let mut seen = FxHashSet::default();
    let mut segments = Vec::new();

    for (a, b) in outcome.unsafe_sheet.boundary_segments() {
        let mid_z = (a.z + b.z) * 0.5;
        if (mid_z - reference_z).abs() > Z_TOLERANCE {
            continue;
        }

        let (start, end) = canonical_orientation(round_point(&a), round_point(&b));
        if point_key(&start) == point_key(&end) {
            // Collapsed to a point by rounding
            continue;
        }
        if seen.insert(segment_key(&start, &end)) {
            segments.push((start, end));
        }
    }

    // Transition points: the boundary curve shared between the exposed and
    // shielded parts, identified by canonical segment key. Of the curve's
    // vertices stacked on one horizontal position, the lowest wins,
    // anchoring the marker at edge level.
    let shielded_edges: FxHashSet<_> = outcome
        .safe_sheet
        .boundary_segments()
        .map(|(a, b)| segment_key(&round_point(&a), &round_point(&b)))
        .collect();

    let mut lowest: FxHashMap<(i64, i64), Point3<f64>> = FxHashMap::default();
    for (a, b) in outcome.unsafe_sheet.boundary_segments() {
        let (ra, rb) = (round_point(&a), round_point(&b));
        if !shielded_edges.contains(&segment_key(&ra, &rb)) {
            continue;
        }
        for v in [ra, rb] {
            lowest
                .entry(xy_key(&v))
                .and_modify(|p| {
                    if v.z < p.z {
                        *p = v;
                    }
                })
                .or_insert(v);
        }
    }

    let mut transitions: Vec<_> = lowest.into_iter().collect();
    transitions.sort_by_key(|(key, _)| *key);

    for (_, vertex) in transitions {
        let p = round_point(&vertex);
        if seen.insert(segment_key(&p, &p)) {
            segments.push((p, p));
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundaryEdge, Slab, Wall};
    use crate::probe::{build_probe, DistanceDirectionResolver};
    use crate::shielding::resolve_shielding;
    use approx::assert_relative_eq;
    use slabguard_geometry::Solid;

    fn outcome_with_walls(walls: &[Wall]) -> ShieldingOutcome {
        let slab = Slab::new(
            "EG",
            Solid::from_box(Point3::new(0.0, 0.0, 2.7), Point3::new(10.0, 5.0, 3.0)),
        )
        .unwrap();
        let edge = BoundaryEdge {
            start: Point3::new(0.0, 0.0, 3.0),
            end: Point3::new(10.0, 0.0, 3.0),
        };
        let probe = build_probe(&edge, &slab, &DistanceDirectionResolver::default()).unwrap();
        resolve_shielding(&probe, walls)
    }

    #[test]
    fn test_unshielded_probe_yields_one_segment() {
        let outcome = outcome_with_walls(&[]);
        let segments = extract_unsafe_segments(&outcome, 3.0);
        assert_eq!(segments.len(), 1);

        let (start, end) = segments[0];
        assert_relative_eq!(start.x, 0.15);
        assert_relative_eq!(end.x, 9.85);
        assert_relative_eq!(start.y, -0.05);
        assert_relative_eq!(start.z, 3.0);
        assert_relative_eq!(end.z, 3.0);
    }

    #[test]
    fn test_half_covering_wall_yields_segment_and_transition() {
        let wall = Wall::new(
            "parapet",
            Solid::from_box(Point3::new(-1.0, -0.2, 3.0), Point3::new(5.0, 0.0, 4.5)),
        );
        let outcome = outcome_with_walls(&[wall]);
        let segments = extract_unsafe_segments(&outcome, 3.0);

        let runs: Vec<_> = segments
            .iter()
            .filter(|(a, b)| point_key(a) != point_key(b))
            .collect();
        let points: Vec<_> = segments
            .iter()
            .filter(|(a, b)| point_key(a) == point_key(b))
            .collect();

        assert_eq!(runs.len(), 1);
        let (start, end) = *runs[0];
        assert_relative_eq!(start.x, 5.0);
        assert_relative_eq!(end.x, 9.85);

        // One transition marker at the wall end, anchored at edge level
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].0.x, 5.0);
        assert_relative_eq!(points[0].0.z, 3.0);
    }

    #[test]
    fn test_fully_shielded_probe_yields_nothing() {
        let wall = Wall::new(
            "parapet",
            Solid::from_box(Point3::new(-1.0, -0.2, 3.0), Point3::new(11.0, 0.0, 4.5)),
        );
        let outcome = outcome_with_walls(&[wall]);
        assert!(extract_unsafe_segments(&outcome, 3.0).is_empty());
    }

    #[test]
    fn test_top_boundary_not_reported() {
        let outcome = outcome_with_walls(&[]);
        let segments = extract_unsafe_segments(&outcome, 3.0);
        for (a, b) in segments {
            assert!(a.z < 3.5 && b.z < 3.5);
        }
    }
}
