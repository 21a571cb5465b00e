// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Millimetre-quantized identity keys
//!
//! Segment and vertex identity across edges and threads is decided on
//! coordinates rounded to 1 mm. The canonical segment key sorts its two
//! endpoint keys, so the same physical segment found from two different
//! slabs (or traversed in opposite directions) collapses to one entry.

use slabguard_geometry::Point3;

/// Quantization scale: 1 mm
const KEY_SCALE: f64 = 1e3;

pub type PointKey = (i64, i64, i64);
pub type SegmentKey = (PointKey, PointKey);

/// Round a coordinate to 3 decimals
#[inline]
pub fn round3(v: f64) -> f64 {
    (v * KEY_SCALE).round() / KEY_SCALE
}

/// Round a point to 3 decimals per coordinate
#[inline]
pub fn round_point(p: &Point3<f64>) -> Point3<f64> {
    Point3::new(round3(p.x), round3(p.y), round3(p.z))
}

/// Quantized identity of a point
#[inline]
pub fn point_key(p: &Point3<f64>) -> PointKey {
    (
        (p.x * KEY_SCALE).round() as i64,
        (p.y * KEY_SCALE).round() as i64,
        (p.z * KEY_SCALE).round() as i64,
    )
}

/// Quantized identity of a point's horizontal position
#[inline]
pub fn xy_key(p: &Point3<f64>) -> (i64, i64) {
    (
        (p.x * KEY_SCALE).round() as i64,
        (p.y * KEY_SCALE).round() as i64,
    )
}

/// Orientation-independent identity of a segment
#[inline]
pub fn segment_key(a: &Point3<f64>, b: &Point3<f64>) -> SegmentKey {
    let (ka, kb) = (point_key(a), point_key(b));
    if ka <= kb {
        (ka, kb)
    } else {
        (kb, ka)
    }
}

/// Reorient a segment so its endpoint keys are in sorted order.
/// Makes emission independent of traversal direction.
#[inline]
pub fn canonical_orientation(
    a: Point3<f64>,
    b: Point3<f64>,
) -> (Point3<f64>, Point3<f64>) {
    if point_key(&a) <= point_key(&b) {
        (a, b)
    } else {
        (b, a)
    }
}
