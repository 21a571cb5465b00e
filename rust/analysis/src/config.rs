// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Audit parameters
//!
//! The geometric constants mirror common site-safety practice: probes are
//! one metre tall (the minimum height a wall must reach to count as
//! protection), stand 5 cm off the slab edge, and skip 15 cm at each edge
//! end to avoid corner artifacts from abutting walls.

/// Minimum wall height to count as fall protection, and probe height (m)
pub const MIN_WALL_HEIGHT: f64 = 1.0;

/// Horizontal standoff of the probe from the slab edge (m)
pub const OFFSET: f64 = 0.05;

/// Length trimmed from each end of an edge before probing (m)
pub const LENGTH_DIFF: f64 = OFFSET * 3.0;

/// Distance below which the direction test point counts as inside the slab (m)
pub const DIST_THRESHOLD: f64 = OFFSET - 0.01;

/// Vertical tolerance for matching elevations (m)
pub const Z_TOLERANCE: f64 = 1e-3;

/// Fall height above which a guard rail is required (m above site level)
const GUARD_RAIL_HEIGHT: f64 = 2.0;

/// Fall height above which scaffolding is required (m above site level)
const SCAFFOLD_HEIGHT: f64 = 3.0;

/// Per-run audit configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditConfig {
    /// Terrain elevation around the building; fall heights are measured
    /// against this, not against absolute zero
    pub site_elevation: f64,
}

impl AuditConfig {
    pub fn new(site_elevation: f64) -> Self {
        Self { site_elevation }
    }

    /// Absolute elevation above which unprotected edges need a guard rail
    #[inline]
    pub fn guard_rail_limit(&self) -> f64 {
        self.site_elevation + GUARD_RAIL_HEIGHT
    }

    /// Absolute elevation above which unprotected edges need scaffolding
    #[inline]
    pub fn scaffold_limit(&self) -> f64 {
        self.site_elevation + SCAFFOLD_HEIGHT
    }
}
