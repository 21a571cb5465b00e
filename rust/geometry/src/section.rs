// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plane cross-sections of mesh solids
//!
//! Intersecting a wall solid with a probe's plane yields the closed 2D
//! contours that get subtracted from the probe region. Each triangle
//! contributes at most one intersection segment; the segments are then
//! chained into loops by quantized endpoint identity.

use crate::error::{Error, Result};
use crate::frame::SheetFrame;
use crate::region::{compute_signed_area, Contour};
use crate::solid::Solid;
use crate::{Point2, Point3};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Distance below which a vertex counts as lying on the section plane
const ON_PLANE_TOLERANCE: f64 = 1e-9;

/// Quantization scale for chaining segment endpoints
const CHAIN_KEY_SCALE: f64 = 1e6;

/// Contours with less area than this are discarded as slivers
const MIN_CONTOUR_AREA: f64 = 1e-10;

type QKey = (i64, i64);

#[inline]
fn quantize(p: &Point2<f64>) -> QKey {
    (
        (p.x * CHAIN_KEY_SCALE).round() as i64,
        (p.y * CHAIN_KEY_SCALE).round() as i64,
    )
}

/// Intersect a solid with a vertical plane.
///
/// Returns the closed contours of the cross-section in the frame's plane
/// coordinates. An empty result means the solid does not reach the plane.
///
/// Fails with [`Error::OperationIncomplete`] when the intersection segments
/// do not chain into closed loops, which happens on unsound input meshes
/// (open shells, self-intersections). Callers treat that as "this wall could
/// not be processed", not as a fatal condition.
pub fn cross_section(solid: &Solid, frame: &SheetFrame) -> Result<Vec<Contour>> {
    let mut segments: Vec<(Point2<f64>, Point2<f64>)> = Vec::new();
    let mut seen: FxHashSet<(QKey, QKey)> = FxHashSet::default();

    for (v0, v1, v2) in solid.triangles_iter() {
        let Some((a, b)) = triangle_section(frame, v0, v1, v2) else {
            continue;
        };

        let (qa, qb) = (quantize(&a), quantize(&b));
        if qa == qb {
            continue;
        }
        // Two triangles meeting along an in-plane mesh edge both produce the
        // same segment; keep one copy so chaining sees clean degree counts.
        let key = if qa < qb { (qa, qb) } else { (qb, qa) };
        if seen.insert(key) {
            segments.push((a, b));
        }
    }

    chain_segments(segments)
}

/// Intersection segment of one triangle with the plane, if any
fn triangle_section(
    frame: &SheetFrame,
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
) -> Option<(Point2<f64>, Point2<f64>)> {
    let verts = [v0, v1, v2];
    let dists = [
        frame.signed_distance(&v0),
        frame.signed_distance(&v1),
        frame.signed_distance(&v2),
    ];

    // Triangles lying in the plane contribute no section segment; their
    // perimeter is covered by the neighbouring faces that cross the plane.
    if dists.iter().all(|d| d.abs() < ON_PLANE_TOLERANCE) {
        return None;
    }

    let mut points: SmallVec<[Point2<f64>; 4]> = SmallVec::new();
    let mut push = |p: Point2<f64>| {
        if !points
            .iter()
            .any(|q| (q.x - p.x).abs() < 1e-12 && (q.y - p.y).abs() < 1e-12)
        {
            points.push(p);
        }
    };

    for i in 0..3 {
        let j = (i + 1) % 3;
        let (da, db) = (dists[i], dists[j]);

        if da.abs() < ON_PLANE_TOLERANCE {
            push(frame.to_plane(&verts[i]));
        }
        if da.abs() >= ON_PLANE_TOLERANCE && db.abs() >= ON_PLANE_TOLERANCE && da * db < 0.0 {
            let t = da / (da - db);
            let p = Point3::from(verts[i].coords + (verts[j] - verts[i]) * t);
            push(frame.to_plane(&p));
        }
    }

    match points.as_slice() {
        [a, b] => Some((*a, *b)),
        _ => None,
    }
}

/// Chain unordered section segments into closed contours.
///
/// Segments are undirected for chaining purposes. A chain that dead-ends
/// indicates an open shell and fails the whole section.
fn chain_segments(segments: Vec<(Point2<f64>, Point2<f64>)>) -> Result<Vec<Contour>> {
    if segments.is_empty() {
        return Ok(Vec::new());
    }

    // Endpoint -> indices of incident segments
    let mut incident: FxHashMap<QKey, SmallVec<[usize; 2]>> = FxHashMap::default();
    for (i, (a, b)) in segments.iter().enumerate() {
        incident.entry(quantize(a)).or_default().push(i);
        incident.entry(quantize(b)).or_default().push(i);
    }

    let mut used = vec![false; segments.len()];
    let mut contours = Vec::new();

    for start in 0..segments.len() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let (first, second) = segments[start];
        let start_key = quantize(&first);
        let mut contour: Contour = vec![first, second];
        let mut cursor = quantize(&second);

        while cursor != start_key {
            let next = incident
                .get(&cursor)
                .and_then(|ids| ids.iter().find(|&&i| !used[i]))
                .copied();

            let Some(i) = next else {
                return Err(Error::OperationIncomplete(format!(
                    "section contour did not close ({} segments chained)",
                    contour.len() - 1
                )));
            };

            used[i] = true;
            let (a, b) = segments[i];
            let (qa, qb) = (quantize(&a), quantize(&b));
            let (next_point, next_key) = if qa == cursor { (b, qb) } else { (a, qa) };
            contour.push(next_point);
            cursor = next_key;
        }

        // The walk re-reaches the start vertex; drop the duplicate
        contour.pop();

        if contour.len() >= 3 && compute_signed_area(&contour).abs() > MIN_CONTOUR_AREA {
            contours.push(contour);
        }
    }

    Ok(contours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;
    use approx::assert_relative_eq;

    fn section_area(contours: &[Contour]) -> f64 {
        contours
            .iter()
            .map(|c| compute_signed_area(c).abs())
            .sum()
    }

    #[test]
    fn test_section_misses_solid() {
        let wall = Solid::from_box(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.2, 3.0));
        let frame =
            SheetFrame::from_direction(Point3::new(0.0, 5.0, 0.0), Vector3::x()).unwrap();
        let contours = cross_section(&wall, &frame).unwrap();
        assert!(contours.is_empty());
    }

    #[test]
    fn test_section_through_box() {
        // Wall from x in [2, 4], z in [0, 3]; plane x-z at y = 0.1
        let wall = Solid::from_box(Point3::new(2.0, 0.0, 0.0), Point3::new(4.0, 0.2, 3.0));
        let frame =
            SheetFrame::from_direction(Point3::new(0.0, 0.1, 0.0), Vector3::x()).unwrap();

        let contours = cross_section(&wall, &frame).unwrap();
        assert_eq!(contours.len(), 1);
        assert_relative_eq!(section_area(&contours), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_section_plane_coordinates_track_frame_origin() {
        let wall = Solid::from_box(Point3::new(2.0, 0.0, 1.0), Point3::new(4.0, 0.2, 3.0));
        let frame =
            SheetFrame::from_direction(Point3::new(1.0, 0.1, 2.0), Vector3::x()).unwrap();

        let contours = cross_section(&wall, &frame).unwrap();
        assert_eq!(contours.len(), 1);

        let min_u = contours[0].iter().map(|p| p.x).fold(f64::MAX, f64::min);
        let max_w = contours[0].iter().map(|p| p.y).fold(f64::MIN, f64::max);
        // u measured from frame origin x = 1, w from origin z = 2
        assert_relative_eq!(min_u, 1.0, epsilon = 1e-9);
        assert_relative_eq!(max_w, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_section_two_disjoint_walls() {
        let mut wall = Solid::from_box(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.2, 3.0));
        let other = Solid::from_box(Point3::new(5.0, 0.0, 0.0), Point3::new(6.0, 0.2, 3.0));

        let offset = wall.positions.len() as u32;
        wall.positions.extend(other.positions.iter().copied());
        wall.triangles
            .extend(other.triangles.iter().map(|t| {
                [t[0] + offset, t[1] + offset, t[2] + offset]
            }));

        let frame =
            SheetFrame::from_direction(Point3::new(0.0, 0.1, 0.0), Vector3::x()).unwrap();
        let contours = cross_section(&wall, &frame).unwrap();
        assert_eq!(contours.len(), 2);
        assert_relative_eq!(section_area(&contours), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_open_shell_fails() {
        // A single quad (two triangles) crossing the plane: section is one
        // open segment chain, which must be reported, not silently closed.
        let shell = Solid::from_parts(
            vec![
                Point3::new(0.0, -1.0, 0.0),
                Point3::new(1.0, -1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, -1.0, 2.0),
                Point3::new(1.0, -1.0, 2.0),
            ],
            vec![[0, 1, 5], [0, 5, 4], [1, 2, 5]],
        );
        let frame =
            SheetFrame::from_direction(Point3::new(0.0, 0.0, 0.0), Vector3::x()).unwrap();
        assert!(matches!(
            cross_section(&shell, &frame),
            Err(Error::OperationIncomplete(_))
        ));
    }
}
