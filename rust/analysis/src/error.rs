// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while auditing a model
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate edge: {0}")]
    DegenerateEdge(String),

    #[error("Empty solid: {0}")]
    EmptySolid(String),

    #[error(transparent)]
    Geometry(#[from] slabguard_geometry::Error),
}
