// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-to-solid distance queries
//!
//! The probe-direction heuristic needs one thing from a slab: how far a test
//! point sits from its surface. Distance is the minimum over all triangles,
//! with the per-triangle closest point found by Voronoi-region classification.

use crate::solid::Solid;
use crate::{Point3, Vector3};

/// Minimum unsigned distance from a point to the solid's surface.
///
/// Returns `f64::INFINITY` for an empty solid.
pub fn distance_to_solid(point: &Point3<f64>, solid: &Solid) -> f64 {
    let mut best = f64::INFINITY;
    for (v0, v1, v2) in solid.triangles_iter() {
        let closest = closest_point_on_triangle(point, &v0, &v1, &v2);
        let d = (point - closest).norm();
        if d < best {
            best = d;
        }
    }
    best
}

/// Closest point on triangle (a, b, c) to point p.
///
/// Classifies p against the triangle's Voronoi regions: vertex, edge, or
/// face interior.
pub fn closest_point_on_triangle(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
) -> Point3<f64> {
    let ab: Vector3<f64> = b - a;
    let ac: Vector3<f64> = c - a;
    let ap: Vector3<f64> = p - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return *a;
    }

    let bp: Vector3<f64> = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return *b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return Point3::from(a.coords + ab * v);
    }

    let cp: Vector3<f64> = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return *c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return Point3::from(a.coords + ac * w);
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return Point3::from(b.coords + (c - b) * w);
    }

    // Face interior
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    Point3::from(a.coords + ab * v + ac * w)
}
