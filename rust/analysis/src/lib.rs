//! Slabguard Analysis
//!
//! Fall-edge audit pipeline for building models: extracts the top boundary
//! edges of floor slabs, probes them with vertical sheets, subtracts
//! shielding walls and classifies the exposed remainders by fall height.

pub mod boundary;
pub mod classify;
pub mod config;
pub mod edges;
pub mod error;
pub mod key;
pub mod model;
pub mod pipeline;
pub mod probe;
pub mod shielding;

// Re-export the geometry point types for convenience
pub use slabguard_geometry::{Point3, Vector3};

pub use boundary::{extract_unsafe_segments, UnsafeSegment};
pub use classify::{classify, ClassifiedSegment, ProtectionCategory};
pub use config::AuditConfig;
pub use edges::extract_top_edges;
pub use error::{Error, Result};
pub use model::{BoundaryEdge, Model, Slab, Wall};
pub use pipeline::{audit_model, audit_model_with, AuditOutcome, EdgeAudit};
pub use probe::{build_probe, DirectionResolver, DistanceDirectionResolver, Probe};
pub use shielding::{resolve_shielding, ShieldingOutcome};
