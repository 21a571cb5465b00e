// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall shielding
//!
//! Walls carve protection out of a probe sheet. Each wall is sectioned by
//! the probe's plane and the resulting contours are subtracted from the
//! remaining unsafe region; whatever the walls cover is safe, the remainder
//! is exposed. A wall shorter than the probe only covers the lower part of
//! it, leaving the rest unsafe, so no explicit height filter is needed.

use crate::model::Wall;
use crate::probe::Probe;
use slabguard_geometry::{cross_section, difference, subtract_contours, Region, Sheet};
use tracing::{debug, warn};

/// Area change below which a subtraction counts as a no-op
const MIN_AREA_CHANGE: f64 = 1e-9;

/// The probe split into its shielded and exposed parts
#[derive(Debug, Clone)]
pub struct ShieldingOutcome {
    /// Parts of the probe covered by walls
    pub safe_sheet: Sheet,
    /// Parts of the probe left exposed
    pub unsafe_sheet: Sheet,
}

/// Subtract every wall from the probe.
///
/// Walls that cannot be sectioned (empty solids, open shells) are logged
/// and skipped; a bad wall never aborts the edge. With no walls at all the
/// entire probe is exposed.
pub fn resolve_shielding(probe: &Probe, walls: &[Wall]) -> ShieldingOutcome {
    let mut unsafe_region = probe.sheet.region.clone();
    let mut safe_region = Region::empty();

    for wall in walls {
        if unsafe_region.is_degenerate() {
            // Fully shielded already
            break;
        }
        if !wall.solid.has_surface_area() {
            warn!(wall = %wall.name, "skipping wall without surface area");
            continue;
        }

        let contours = match cross_section(&wall.solid, &probe.sheet.frame) {
            Ok(contours) => contours,
            Err(e) => {
                warn!(wall = %wall.name, error = %e, "wall section failed, skipping");
                continue;
            }
        };
        if contours.is_empty() {
            continue;
        }

        let remaining = subtract_contours(&unsafe_region, &contours);
        if remaining.area() < unsafe_region.area() - MIN_AREA_CHANGE {
            debug!(
                wall = %wall.name,
                covered = unsafe_region.area() - remaining.area(),
                "wall shields probe"
            );
            unsafe_region = remaining;
            safe_region = difference(&probe.sheet.region, &unsafe_region);
        }
    }

    ShieldingOutcome {
        safe_sheet: probe.sheet.with_region(safe_region),
        unsafe_sheet: probe.sheet.with_region(unsafe_region),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundaryEdge, Slab};
    use crate::probe::{build_probe, DistanceDirectionResolver};
    use approx::assert_relative_eq;
    use slabguard_geometry::{Point3, Solid};

    fn probe_for_front_edge() -> Probe {
        let slab = Slab::new(
            "EG",
            Solid::from_box(Point3::new(0.0, 0.0, 2.7), Point3::new(10.0, 5.0, 3.0)),
        )
        .unwrap();
        let edge = BoundaryEdge {
            start: Point3::new(0.0, 0.0, 3.0),
            end: Point3::new(10.0, 0.0, 3.0),
        };
        build_probe(&edge, &slab, &DistanceDirectionResolver::default()).unwrap()
    }

    fn parapet(x0: f64, x1: f64, height: f64) -> Wall {
        // Straddles the probe plane at y = -0.05
        Wall::new(
            "parapet",
            Solid::from_box(
                Point3::new(x0, -0.2, 3.0),
                Point3::new(x1, 0.0, 3.0 + height),
            ),
        )
    }

    #[test]
    fn test_no_walls_leaves_probe_exposed() {
        let probe = probe_for_front_edge();
        let outcome = resolve_shielding(&probe, &[]);
        assert_relative_eq!(outcome.unsafe_sheet.area(), 9.7, epsilon = 1e-9);
        assert!(outcome.safe_sheet.is_degenerate());
    }

    #[test]
    fn test_full_height_wall_shields_its_span() {
        let probe = probe_for_front_edge();
        let outcome = resolve_shielding(&probe, &[parapet(-1.0, 5.0, 1.5)]);

        // Probe spans x in [0.15, 9.85]; the wall covers up to x = 5
        assert_relative_eq!(outcome.safe_sheet.area(), 4.85, epsilon = 1e-6);
        assert_relative_eq!(outcome.unsafe_sheet.area(), 4.85, epsilon = 1e-6);
    }

    #[test]
    fn test_short_wall_leaves_upper_probe_unsafe() {
        let probe = probe_for_front_edge();
        let outcome = resolve_shielding(&probe, &[parapet(-1.0, 11.0, 0.4)]);

        // Wall covers only the lowest 0.4 m of the 1 m probe
        assert_relative_eq!(outcome.safe_sheet.area(), 9.7 * 0.4, epsilon = 1e-6);
        assert_relative_eq!(outcome.unsafe_sheet.area(), 9.7 * 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_wall_clear_of_probe_plane_changes_nothing() {
        let probe = probe_for_front_edge();
        let wall = Wall::new(
            "inner",
            Solid::from_box(Point3::new(0.0, 2.0, 3.0), Point3::new(10.0, 2.2, 5.0)),
        );
        let outcome = resolve_shielding(&probe, &[wall]);
        assert_relative_eq!(outcome.unsafe_sheet.area(), 9.7, epsilon = 1e-9);
    }

    #[test]
    fn test_two_walls_combine() {
        let probe = probe_for_front_edge();
        let walls = [parapet(-1.0, 5.0, 1.5), parapet(5.0, 11.0, 1.5)];
        let outcome = resolve_shielding(&probe, &walls);
        assert!(outcome.unsafe_sheet.is_degenerate());
        assert_relative_eq!(outcome.safe_sheet.area(), 9.7, epsilon = 1e-6);
    }

    #[test]
    fn test_unsectionable_wall_skipped_without_losing_others() {
        let probe = probe_for_front_edge();

        // An open shell crossing the probe plane: its section chain cannot
        // close, so the wall must be skipped rather than abort the edge
        let torn = Wall::new(
            "torn shell",
            Solid::from_parts(
                vec![
                    Point3::new(2.0, -1.0, 3.0),
                    Point3::new(3.0, -1.0, 3.0),
                    Point3::new(3.0, 1.0, 3.0),
                    Point3::new(2.0, 1.0, 3.0),
                    Point3::new(2.0, -1.0, 3.5),
                    Point3::new(3.0, -1.0, 3.5),
                ],
                vec![[0, 1, 5], [0, 5, 4], [1, 2, 5]],
            ),
        );
        let walls = [torn, parapet(-1.0, 5.0, 1.5)];
        let outcome = resolve_shielding(&probe, &walls);

        // Same split as with the parapet alone
        assert_relative_eq!(outcome.safe_sheet.area(), 4.85, epsilon = 1e-6);
        assert_relative_eq!(outcome.unsafe_sheet.area(), 4.85, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_wall_skipped() {
        let probe = probe_for_front_edge();
        let outcome = resolve_shielding(&probe, &[Wall::new("ghost", Solid::new())]);
        assert_relative_eq!(outcome.unsafe_sheet.area(), 9.7, epsilon = 1e-9);
    }
}
