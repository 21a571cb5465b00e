// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D Boolean Operations on Probe Regions
//!
//! Every boolean the audit pipeline performs happens inside a probe's
//! vertical plane, so wall subtraction reduces to polygon booleans via the
//! i_overlay crate. This is considerably more reliable than 3D CSG on a
//! zero-thickness sheet would be.

use crate::region::{ensure_ccw, ensure_cw, is_valid_contour, Contour, Region, Shape};
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

/// Subtract a set of closed contours from a region.
///
/// The clip contours are typically wall cross-sections in the probe's plane
/// coordinates. An empty clip returns the subject unchanged.
pub fn subtract_contours(subject: &Region, clip: &[Contour]) -> Region {
    let valid: Vec<&Contour> = clip.iter().filter(|c| c.len() >= 3).collect();
    if valid.is_empty() || subject.shapes.is_empty() {
        return subject.clone();
    }

    let subject_paths = region_to_paths(subject);
    let clip_paths: Vec<Vec<[f64; 2]>> = valid.iter().map(|c| contour_to_path(c)).collect();

    let result = subject_paths.overlay(&clip_paths, OverlayRule::Difference, FillRule::EvenOdd);
    region_from_shapes(&result)
}

/// Boolean difference of two regions: `subject - clip`
pub fn difference(subject: &Region, clip: &Region) -> Region {
    if clip.is_degenerate() {
        return subject.clone();
    }
    let clip_contours: Vec<Contour> = clip.contours().cloned().collect();
    subtract_contours(subject, &clip_contours)
}

/// Convert a region to i_overlay path format (outers CCW, holes CW)
fn region_to_paths(region: &Region) -> Vec<Vec<[f64; 2]>> {
    let mut paths = Vec::new();
    for shape in &region.shapes {
        paths.push(contour_to_path(&ensure_ccw(&shape.outer)));
        for hole in &shape.holes {
            paths.push(contour_to_path(&ensure_cw(hole)));
        }
    }
    paths
}

/// Convert a Point2 contour to i_overlay path format
fn contour_to_path(contour: &[crate::Point2<f64>]) -> Vec<[f64; 2]> {
    contour.iter().map(|p| [p.x, p.y]).collect()
}

/// Convert i_overlay result shapes back to a Region.
///
/// i_overlay returns Vec<Vec<Vec<[f64; 2]>>> where the outer Vec is a list
/// of shapes and each shape is a list of contours (first outer, rest holes).
/// All shapes are kept; a remainder may consist of several pieces.
fn region_from_shapes(shapes: &[Vec<Vec<[f64; 2]>>]) -> Region {
    let mut region = Region::empty();

    for shape in shapes {
        if shape.is_empty() {
            continue;
        }

        let outer: Contour = shape[0]
            .iter()
            .map(|p| crate::Point2::new(p[0], p[1]))
            .collect();
        if !is_valid_contour(&outer) {
            continue;
        }

        let mut holes = Vec::new();
        for contour in shape.iter().skip(1) {
            let hole: Contour = contour
                .iter()
                .map(|p| crate::Point2::new(p[0], p[1]))
                .collect();
            if is_valid_contour(&hole) {
                holes.push(ensure_cw(&hole));
            }
        }

        region.shapes.push(Shape {
            outer: ensure_ccw(&outer),
            holes,
        });
    }

    region
}
