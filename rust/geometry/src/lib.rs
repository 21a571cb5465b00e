//! Slabguard Geometry
//!
//! Solid-modeling primitives for fall-edge auditing: triangle-mesh solids,
//! vertical sheet frames, plane cross-sections, 2D overlay booleans via
//! i_overlay and earcutr tessellation for viewer output.

pub mod bool2d;
pub mod distance;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod region;
pub mod section;
pub mod sheet;
pub mod solid;
pub mod tessellate;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use bool2d::{difference, subtract_contours};
pub use distance::distance_to_solid;
pub use error::{Error, Result};
pub use frame::SheetFrame;
pub use mesh::Mesh;
pub use region::{Contour, Region, Shape};
pub use section::cross_section;
pub use sheet::Sheet;
pub use solid::{Aabb, EdgeUse, Solid};
pub use tessellate::tessellate_sheet;
