// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Audit input model
//!
//! The pipeline consumes a flat building model: slab solids whose top edges
//! get audited, and wall solids that may shield them. How the solids were
//! produced (IFC, scene files, tests) is not this crate's concern.

use crate::error::{Error, Result};
use slabguard_geometry::{Point3, Solid, Vector3};

/// A floor slab whose top boundary edges are audit candidates
#[derive(Debug, Clone)]
pub struct Slab {
    pub name: String,
    pub solid: Solid,
    top_elevation: f64,
}

impl Slab {
    /// Wrap a slab solid, caching its top elevation.
    /// Fails on solids without geometry.
    pub fn new(name: impl Into<String>, solid: Solid) -> Result<Self> {
        let name = name.into();
        let bounds = solid
            .bounds()
            .ok_or_else(|| Error::EmptySolid(format!("slab '{name}' has no geometry")))?;
        Ok(Self {
            name,
            solid,
            top_elevation: bounds.top(),
        })
    }

    /// Elevation of the slab's walking surface
    #[inline]
    pub fn top_elevation(&self) -> f64 {
        self.top_elevation
    }
}

/// A wall solid that may shield slab edges
#[derive(Debug, Clone)]
pub struct Wall {
    pub name: String,
    pub solid: Solid,
}

impl Wall {
    pub fn new(name: impl Into<String>, solid: Solid) -> Self {
        Self {
            name: name.into(),
            solid,
        }
    }
}

/// The complete audit input
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub slabs: Vec<Slab>,
    pub walls: Vec<Wall>,
}

/// One top boundary edge of a slab
#[derive(Debug, Clone, Copy)]
pub struct BoundaryEdge {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl BoundaryEdge {
    /// Parametric midpoint of the edge
    #[inline]
    pub fn midpoint(&self) -> Point3<f64> {
        Point3::from((self.start.coords + self.end.coords) * 0.5)
    }

    /// Edge vector
    #[inline]
    pub fn direction(&self) -> Vector3<f64> {
        self.end - self.start
    }

    /// Horizontal length of the edge
    #[inline]
    pub fn length(&self) -> f64 {
        let d = self.direction();
        Vector3::new(d.x, d.y, 0.0).norm()
    }
}
