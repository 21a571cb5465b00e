// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar vertical sheets
//!
//! A [`Sheet`] is a zero-thickness surface: a planar [`Region`] embedded in a
//! vertical [`SheetFrame`]. Probes are born as single-rectangle sheets; wall
//! subtraction carves them into arbitrary multi-shape remainders while the
//! frame stays put.

use crate::error::{Error, Result};
use crate::frame::SheetFrame;
use crate::region::{Region, MIN_AREA_THRESHOLD};
use crate::{Point3, Vector3};

/// A planar region embedded in a vertical plane
#[derive(Debug, Clone)]
pub struct Sheet {
    pub frame: SheetFrame,
    pub region: Region,
}

impl Sheet {
    /// Extrude the segment `start -> end` upward by `height`, producing a
    /// vertical rectangle sheet. The segment must be horizontal and
    /// non-degenerate.
    pub fn extrude_segment(start: Point3<f64>, end: Point3<f64>, height: f64) -> Result<Self> {
        if (start.z - end.z).abs() > 1e-9 {
            return Err(Error::Degenerate(format!(
                "sheet segment is not horizontal: dz = {}",
                (start.z - end.z).abs()
            )));
        }
        if height <= 0.0 {
            return Err(Error::Degenerate(format!(
                "sheet height must be positive, got {height}"
            )));
        }

        let direction: Vector3<f64> = end - start;
        let length = Vector3::new(direction.x, direction.y, 0.0).norm();
        if length * height <= MIN_AREA_THRESHOLD {
            return Err(Error::Degenerate(format!(
                "sheet segment too short: length = {length}"
            )));
        }

        let frame = SheetFrame::from_direction(start, direction)?;
        Ok(Self {
            frame,
            region: Region::rect(length, height),
        })
    }

    /// Same frame, different region
    pub fn with_region(&self, region: Region) -> Self {
        Self {
            frame: self.frame,
            region,
        }
    }

    /// Same frame, empty region
    pub fn empty_like(&self) -> Self {
        self.with_region(Region::empty())
    }

    /// Surface area of the sheet
    #[inline]
    pub fn area(&self) -> f64 {
        self.region.area()
    }

    /// Check whether the sheet carries no meaningful surface
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.region.is_degenerate()
    }

    /// Boundary segments of the sheet in world coordinates
    pub fn boundary_segments(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.region.boundary_edges().map(|(a, b)| {
            (
                self.frame.to_world(a.x, a.y),
                self.frame.to_world(b.x, b.y),
            )
        })
    }

    /// Boundary vertices of the sheet in world coordinates
    pub fn boundary_vertices(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.region
            .vertices()
            .map(|p| self.frame.to_world(p.x, p.y))
    }
}
