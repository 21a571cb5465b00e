// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertical plane frames
//!
//! A [`SheetFrame`] pins a vertical plane in world space: an origin, a
//! horizontal unit tangent (the plane's u axis) and an implicit w axis that
//! is always world +Z. Probe sheets live in these frames, and all boolean
//! work happens in (u, w) plane coordinates.

use crate::error::{Error, Result};
use crate::{Point2, Point3, Vector3};

/// Minimum horizontal extent for a direction to define a frame
const MIN_TANGENT_LENGTH: f64 = 1e-9;

/// An orthonormal frame for a vertical plane.
///
/// `tangent` is a horizontal unit vector (z = 0); the second plane axis is
/// world +Z. `normal()` is the tangent rotated -90 degrees in the XY plane,
/// completing a right-handed (tangent, +Z, normal) triad.
#[derive(Debug, Clone, Copy)]
pub struct SheetFrame {
    pub origin: Point3<f64>,
    pub tangent: Vector3<f64>,
}

impl SheetFrame {
    /// Build a frame from an origin and a (not necessarily unit) horizontal
    /// direction. The direction's z component is dropped before normalizing.
    pub fn from_direction(origin: Point3<f64>, direction: Vector3<f64>) -> Result<Self> {
        let horizontal = Vector3::new(direction.x, direction.y, 0.0);
        let tangent = horizontal.try_normalize(MIN_TANGENT_LENGTH).ok_or_else(|| {
            Error::Degenerate("frame direction has no horizontal component".to_string())
        })?;
        Ok(Self { origin, tangent })
    }

    /// Horizontal unit normal of the plane
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        Vector3::new(self.tangent.y, -self.tangent.x, 0.0)
    }

    /// Map plane coordinates (u along tangent, w along +Z) to world space
    #[inline]
    pub fn to_world(&self, u: f64, w: f64) -> Point3<f64> {
        Point3::from(self.origin.coords + self.tangent * u + Vector3::z() * w)
    }

    /// Project a world point into plane coordinates, discarding the
    /// out-of-plane component
    #[inline]
    pub fn to_plane(&self, p: &Point3<f64>) -> Point2<f64> {
        let d = p - self.origin;
        Point2::new(d.dot(&self.tangent), d.z)
    }

    /// Signed distance of a world point from the plane
    #[inline]
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        (p - self.origin).dot(&self.normal())
    }
}
