// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end audit scenarios on small synthetic buildings

use approx::assert_relative_eq;
use slabguard_analysis::{
    audit_model, AuditConfig, Model, ProtectionCategory, Slab, Wall,
};
use slabguard_geometry::{Point3, Solid};

fn storey_slab() -> Slab {
    // 10 m x 5 m slab, walking surface at 3.0 m
    Slab::new(
        "OG1",
        Solid::from_box(Point3::new(0.0, 0.0, 2.7), Point3::new(10.0, 5.0, 3.0)),
    )
    .unwrap()
}

#[test]
fn bare_storey_slab_exposes_every_edge() {
    let model = Model {
        slabs: vec![storey_slab()],
        walls: Vec::new(),
    };
    let outcome = audit_model(&model, &AuditConfig::default());

    assert_eq!(outcome.edges.len(), 4);
    assert_eq!(outcome.segments.len(), 4);

    for segment in &outcome.segments {
        // 3 m is exactly the scaffold limit, which is inclusive
        assert_eq!(segment.category, ProtectionCategory::Scaffolding);
        assert_relative_eq!(segment.start.z, 3.0);
        assert_relative_eq!(segment.end.z, 3.0);
    }

    // The front edge runs along y = 0: its probe stands 5 cm outside and
    // 15 cm in from both corners
    let front = outcome
        .segments
        .iter()
        .find(|s| (s.start.y + 0.05).abs() < 1e-9)
        .expect("front edge segment");
    assert_relative_eq!(front.start.x, 0.15);
    assert_relative_eq!(front.end.x, 9.85);
}

#[test]
fn half_covering_parapet_splits_front_edge() {
    let parapet = Wall::new(
        "parapet",
        Solid::from_box(Point3::new(-0.3, -0.3, 3.0), Point3::new(5.0, 0.0, 4.1)),
    );
    let model = Model {
        slabs: vec![storey_slab()],
        walls: vec![parapet],
    };
    let outcome = audit_model(&model, &AuditConfig::default());

    // Front edge: one exposed run right of the parapet plus a transition
    // marker where shielding ends
    let front: Vec<_> = outcome
        .segments
        .iter()
        .filter(|s| (s.start.y + 0.05).abs() < 1e-9)
        .collect();

    let run = front
        .iter()
        .find(|s| !s.is_point())
        .expect("exposed front run");
    assert_relative_eq!(run.start.x, 5.0);
    assert_relative_eq!(run.end.x, 9.85);

    let marker = front
        .iter()
        .find(|s| s.is_point())
        .expect("transition marker");
    assert_relative_eq!(marker.start.x, 5.0);
    assert_relative_eq!(marker.start.z, 3.0);
}

#[test]
fn parapet_shorter_than_probe_leaves_elevated_markers() {
    // 0.8 m parapet: the lower probe band is covered, the upper 0.2 m stays
    // exposed. Nothing of the exposed remainder touches slab height any
    // more, so no runs are reported; the safe/unsafe transition along the
    // parapet crown is marked instead.
    let parapet = Wall::new(
        "low parapet",
        Solid::from_box(Point3::new(-0.3, -0.3, 3.0), Point3::new(10.3, 0.0, 3.8)),
    );
    let model = Model {
        slabs: vec![storey_slab()],
        walls: vec![parapet],
    };
    let outcome = audit_model(&model, &AuditConfig::default());

    let front: Vec<_> = outcome
        .segments
        .iter()
        .filter(|s| (s.start.y + 0.05).abs() < 1e-9)
        .collect();

    assert!(front.iter().all(|s| s.is_point()));
    assert_eq!(front.len(), 2);
    for marker in front {
        assert_relative_eq!(marker.start.z, 3.8);
        assert_eq!(marker.category, ProtectionCategory::Scaffolding);
    }
}

#[test]
fn full_height_parapet_clears_front_edge() {
    let parapet = Wall::new(
        "parapet",
        Solid::from_box(Point3::new(-0.3, -0.3, 3.0), Point3::new(10.3, 0.0, 4.1)),
    );
    let model = Model {
        slabs: vec![storey_slab()],
        walls: vec![parapet],
    };
    let outcome = audit_model(&model, &AuditConfig::default());

    assert!(outcome
        .segments
        .iter()
        .all(|s| (s.start.y + 0.05).abs() > 1e-9));
}

#[test]
fn classification_tracks_storey_height() {
    let ground = Slab::new(
        "EG",
        Solid::from_box(Point3::new(0.0, 0.0, 1.2), Point3::new(10.0, 5.0, 1.5)),
    )
    .unwrap();
    let mezzanine = Slab::new(
        "mezzanine",
        Solid::from_box(Point3::new(0.0, 0.0, 2.2), Point3::new(10.0, 5.0, 2.5)),
    )
    .unwrap();
    let roof = Slab::new(
        "roof",
        Solid::from_box(Point3::new(0.0, 0.0, 5.7), Point3::new(10.0, 5.0, 6.0)),
    )
    .unwrap();
    let model = Model {
        slabs: vec![ground, mezzanine, roof],
        walls: Vec::new(),
    };
    let outcome = audit_model(&model, &AuditConfig::default());

    for segment in &outcome.segments {
        match segment.start.z {
            z if (z - 1.5).abs() < 1e-9 => unreachable!("low edge must not be reported"),
            z if (z - 2.5).abs() < 1e-9 => {
                assert_eq!(segment.category, ProtectionCategory::GuardRail)
            }
            z if (z - 6.0).abs() < 1e-9 => {
                assert_eq!(segment.category, ProtectionCategory::Scaffolding)
            }
            z => panic!("unexpected segment elevation {z}"),
        }
    }

    // The ground slab contributes no segments at all
    assert_eq!(outcome.segments.len(), 8);
}

#[test]
fn raised_terrain_downgrades_findings() {
    let model = Model {
        slabs: vec![storey_slab()],
        walls: Vec::new(),
    };

    // At 3 m fall height the default config wants scaffolding; with the
    // terrain raised 1.5 m the effective fall is below every threshold
    let outcome = audit_model(&model, &AuditConfig::new(1.5));
    assert!(outcome.segments.is_empty());
    assert_eq!(outcome.edges.len(), 4);
}

#[test]
fn wall_away_from_edges_changes_nothing() {
    let interior = Wall::new(
        "interior",
        Solid::from_box(Point3::new(2.0, 2.0, 3.0), Point3::new(8.0, 2.2, 5.0)),
    );
    let bare = Model {
        slabs: vec![storey_slab()],
        walls: Vec::new(),
    };
    let with_wall = Model {
        slabs: vec![storey_slab()],
        walls: vec![interior],
    };

    let a = audit_model(&bare, &AuditConfig::default());
    let b = audit_model(&with_wall, &AuditConfig::default());
    assert_eq!(a.segments.len(), b.segments.len());
}

#[test]
fn repeated_runs_are_deterministic() {
    let parapet = Wall::new(
        "parapet",
        Solid::from_box(Point3::new(-0.3, -0.3, 3.0), Point3::new(5.0, 0.0, 4.1)),
    );
    let model = Model {
        slabs: vec![storey_slab()],
        walls: vec![parapet],
    };

    let first = audit_model(&model, &AuditConfig::default());
    for _ in 0..4 {
        let again = audit_model(&model, &AuditConfig::default());
        assert_eq!(first.segments.len(), again.segments.len());
        for (a, b) in first.segments.iter().zip(&again.segments) {
            assert_relative_eq!(a.start.x, b.start.x);
            assert_relative_eq!(a.end.x, b.end.x);
            assert_eq!(a.category, b.category);
        }
    }
}
