// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The audit pipeline
//!
//! Ties the stages together: top edges per slab, one probe per edge, wall
//! shielding, boundary extraction, elevation classification. Edges are
//! independent once collected, so the per-edge work runs on rayon and the
//! results are merged under a global segment-identity set. Canonical
//! segment orientation keeps the merge independent of scheduling order.

use crate::boundary::extract_unsafe_segments;
use crate::classify::{classify, ClassifiedSegment};
use crate::config::AuditConfig;
use crate::edges::extract_top_edges;
use crate::key::segment_key;
use crate::model::{BoundaryEdge, Model};
use crate::probe::{build_probe, DirectionResolver, DistanceDirectionResolver, Probe};
use crate::shielding::resolve_shielding;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use slabguard_geometry::Sheet;
use tracing::{info, warn};

/// Everything the pipeline learned about one slab edge
#[derive(Debug, Clone)]
pub struct EdgeAudit {
    pub slab_index: usize,
    pub edge: BoundaryEdge,
    pub probe: Probe,
    pub safe_sheet: Sheet,
    pub unsafe_sheet: Sheet,
    pub segments: Vec<ClassifiedSegment>,
}

/// The merged result of auditing a model
#[derive(Debug, Clone, Default)]
pub struct AuditOutcome {
    /// Per-edge details, in slab/edge discovery order
    pub edges: Vec<EdgeAudit>,
    /// Deduplicated classified segments across all edges
    pub segments: Vec<ClassifiedSegment>,
    /// Edges rejected as degenerate (too short to probe)
    pub skipped_edges: usize,
}

impl AuditOutcome {
    /// Unique endpoints of the classified segments, for marker visualization.
    /// Transition points contribute their single location once.
    pub fn qualifying_endpoints(&self) -> Vec<slabguard_geometry::Point3<f64>> {
        let mut seen = FxHashSet::default();
        let mut points = Vec::new();
        for segment in &self.segments {
            for p in [segment.start, segment.end] {
                if seen.insert(crate::key::point_key(&p)) {
                    points.push(p);
                }
            }
        }
        points
    }
}

/// Audit every slab edge of a model with the default direction resolver
pub fn audit_model(model: &Model, config: &AuditConfig) -> AuditOutcome {
    audit_model_with(model, config, &DistanceDirectionResolver::default())
}

/// Audit every slab edge of a model
pub fn audit_model_with(
    model: &Model,
    config: &AuditConfig,
    resolver: &dyn DirectionResolver,
) -> AuditOutcome {
    let items: Vec<(usize, BoundaryEdge)> = model
        .slabs
        .iter()
        .enumerate()
        .flat_map(|(slab_index, slab)| {
            extract_top_edges(slab)
                .into_iter()
                .map(move |edge| (slab_index, edge))
        })
        .collect();

    info!(
        slabs = model.slabs.len(),
        walls = model.walls.len(),
        edges = items.len(),
        "starting edge audit"
    );

    let audits: Vec<Option<EdgeAudit>> = items
        .par_iter()
        .map(|(slab_index, edge)| audit_edge(model, config, resolver, *slab_index, edge))
        .collect();

    let mut outcome = AuditOutcome::default();
    let mut seen = FxHashSet::default();

    for audit in audits {
        let Some(audit) = audit else {
            outcome.skipped_edges += 1;
            continue;
        };
        for segment in &audit.segments {
            if seen.insert(segment_key(&segment.start, &segment.end)) {
                outcome.segments.push(*segment);
            }
        }
        outcome.edges.push(audit);
    }

    info!(
        audited = outcome.edges.len(),
        skipped = outcome.skipped_edges,
        segments = outcome.segments.len(),
        "edge audit finished"
    );

    outcome
}

/// Run the full per-edge stage chain. Returns `None` for degenerate edges.
fn audit_edge(
    model: &Model,
    config: &AuditConfig,
    resolver: &dyn DirectionResolver,
    slab_index: usize,
    edge: &BoundaryEdge,
) -> Option<EdgeAudit> {
    let slab = &model.slabs[slab_index];

    let probe = match build_probe(edge, slab, resolver) {
        Ok(probe) => probe,
        Err(e) => {
            warn!(slab = %slab.name, error = %e, "skipping edge");
            return None;
        }
    };

    let shielding = resolve_shielding(&probe, &model.walls);
    let raw = extract_unsafe_segments(&shielding, edge.midpoint().z);

    let segments: Vec<ClassifiedSegment> = raw
        .into_iter()
        .filter_map(|(start, end)| {
            classify(start.z, config).map(|category| ClassifiedSegment {
                start,
                end,
                category,
            })
        })
        .collect();

    if !segments.is_empty() {
        warn!(
            slab = %slab.name,
            count = segments.len(),
            "unprotected edge segments found"
        );
    }

    Some(EdgeAudit {
        slab_index,
        edge: *edge,
        probe,
        safe_sheet: shielding.safe_sheet,
        unsafe_sheet: shielding.unsafe_sheet,
        segments,
    })
}
