// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene file format
//!
//! A scene is a small JSON document listing box solids:
//!
//! ```json
//! {
//!   "site_elevation": 0.0,
//!   "slabs": [{ "name": "OG1", "min": [0, 0, 2.7], "max": [10, 5, 3.0] }],
//!   "walls": [{ "name": "parapet", "min": [-0.3, -0.3, 3.0], "max": [10.3, 0.0, 4.1] }]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use slabguard_analysis::{Model, Slab, Wall};
use slabguard_geometry::{Point3, Solid};
use std::path::Path;

/// An axis-aligned box solid in a scene file
#[derive(Debug, Clone, Deserialize)]
pub struct SolidSpec {
    pub name: String,
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl SolidSpec {
    fn to_solid(&self) -> Solid {
        Solid::from_box(
            Point3::new(self.min[0], self.min[1], self.min[2]),
            Point3::new(self.max[0], self.max[1], self.max[2]),
        )
    }
}

/// A building scene as read from disk
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub site_elevation: f64,
    #[serde(default)]
    pub slabs: Vec<SolidSpec>,
    #[serde(default)]
    pub walls: Vec<SolidSpec>,
}

impl Scene {
    /// Load a scene from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scene file {}", path.display()))
    }

    /// Build the audit model from the scene
    pub fn to_model(&self) -> Result<Model> {
        let slabs = self
            .slabs
            .iter()
            .map(|s| {
                Slab::new(s.name.clone(), s.to_solid())
                    .with_context(|| format!("slab '{}'", s.name))
            })
            .collect::<Result<Vec<_>>>()?;

        let walls = self
            .walls
            .iter()
            .map(|w| Wall::new(w.name.clone(), w.to_solid()))
            .collect();

        Ok(Model { slabs, walls })
    }
}
