// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar regions
//!
//! A [`Region`] is the 2D footprint of a probe sheet (or what remains of one
//! after wall subtraction): a list of shapes, each an outer contour plus
//! holes. Unlike a single profile, a remainder can split into several
//! disconnected pieces, so the shape list is first-class here.

use crate::Point2;

/// A closed 2D contour
pub type Contour = Vec<Point2<f64>>;

/// Minimum area threshold - regions smaller than this are considered degenerate
pub const MIN_AREA_THRESHOLD: f64 = 1e-10;

/// One connected piece: outer boundary plus holes
#[derive(Debug, Clone)]
pub struct Shape {
    /// Outer boundary (counter-clockwise)
    pub outer: Contour,
    /// Holes (clockwise)
    pub holes: Vec<Contour>,
}

impl Shape {
    /// Enclosed area (outer minus holes)
    pub fn area(&self) -> f64 {
        let outer = compute_signed_area(&self.outer).abs();
        let holes: f64 = self
            .holes
            .iter()
            .map(|h| compute_signed_area(h).abs())
            .sum();
        (outer - holes).max(0.0)
    }
}

/// A planar region: zero or more shapes
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub shapes: Vec<Shape>,
}

impl Region {
    /// Create an empty (degenerate) region
    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Create an axis-aligned rectangle `[0, width] x [0, height]`
    pub fn rect(width: f64, height: f64) -> Self {
        Self {
            shapes: vec![Shape {
                outer: vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(width, 0.0),
                    Point2::new(width, height),
                    Point2::new(0.0, height),
                ],
                holes: Vec::new(),
            }],
        }
    }

    /// Total enclosed area
    pub fn area(&self) -> f64 {
        self.shapes.iter().map(Shape::area).sum()
    }

    /// Check whether the region carries no meaningful surface.
    /// Mirrors the empty-solid precondition on 3D solids.
    pub fn is_degenerate(&self) -> bool {
        self.area() <= MIN_AREA_THRESHOLD
    }

    /// Iterate over every contour (outers and holes alike)
    pub fn contours(&self) -> impl Iterator<Item = &Contour> + '_ {
        self.shapes
            .iter()
            .flat_map(|s| std::iter::once(&s.outer).chain(s.holes.iter()))
    }

    /// Iterate over every boundary vertex
    pub fn vertices(&self) -> impl Iterator<Item = &Point2<f64>> + '_ {
        self.contours().flatten()
    }

    /// Iterate over every boundary edge (closing edges included)
    pub fn boundary_edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        self.contours().flat_map(|c| {
            let n = c.len();
            (0..n).map(move |i| (c[i], c[(i + 1) % n]))
        })
    }
}

/// Compute the signed area of a 2D contour
/// Positive = counter-clockwise, Negative = clockwise
pub fn compute_signed_area(contour: &[Point2<f64>]) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let n = contour.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area += contour[i].x * contour[j].y;
        area -= contour[j].x * contour[i].y;
    }

    area * 0.5
}

/// Ensure contour has counter-clockwise winding (positive area)
pub fn ensure_ccw(contour: &[Point2<f64>]) -> Contour {
    if compute_signed_area(contour) < 0.0 {
        contour.iter().rev().copied().collect()
    } else {
        contour.to_vec()
    }
}

/// Ensure contour has clockwise winding (for holes)
pub fn ensure_cw(contour: &[Point2<f64>]) -> Contour {
    if compute_signed_area(contour) > 0.0 {
        contour.iter().rev().copied().collect()
    } else {
        contour.to_vec()
    }
}

/// Check if a contour is valid (has area, not degenerate)
pub fn is_valid_contour(contour: &[Point2<f64>]) -> bool {
    contour.len() >= 3 && compute_signed_area(contour).abs() > MIN_AREA_THRESHOLD
}
