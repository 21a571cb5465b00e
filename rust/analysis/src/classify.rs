// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elevation classification
//!
//! An unprotected edge's required protection depends on its fall height
//! above site level: from three metres up scaffolding, from two a guard
//! rail, below that nothing is reported.

use crate::config::AuditConfig;
use slabguard_geometry::Point3;
use std::fmt;

/// Protection measure required at an unprotected edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtectionCategory {
    GuardRail,
    Scaffolding,
}

impl fmt::Display for ProtectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Report labels follow German site-safety terminology
        match self {
            ProtectionCategory::GuardRail => write!(f, "Gelaender"),
            ProtectionCategory::Scaffolding => write!(f, "Geruest"),
        }
    }
}

/// Classify an edge elevation, or `None` when it is low enough to need no
/// protection. The bands are half-open: the scaffold limit itself already
/// needs scaffolding.
pub fn classify(elevation: f64, config: &AuditConfig) -> Option<ProtectionCategory> {
    if elevation >= config.scaffold_limit() {
        Some(ProtectionCategory::Scaffolding)
    } else if elevation >= config.guard_rail_limit() {
        Some(ProtectionCategory::GuardRail)
    } else {
        None
    }
}

/// An unprotected segment together with its required protection
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedSegment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub category: ProtectionCategory,
}

impl ClassifiedSegment {
    /// Zero-length segments mark safe/unsafe transition points
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}
