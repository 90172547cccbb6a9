//! Closest-point query between two finite 3D segments.
//!
//! This is the narrow-phase primitive for capsule-capsule proximity:
//! the distance between two capsule axes, together with the parametric
//! location of the closest points, determines contact depth and where
//! along each link the response is applied.
//!
//! The implementation is the standard clamped quadratic minimization
//! over the segment parameters, with explicit branches for degenerate
//! (zero-length) segments so a fully collapsed link never divides by zero.

use corda_types::constants::DEGENERATE_AXIS_THRESHOLD;
use corda_types::Scalar;

use crate::Vec3;

/// Result of a segment-segment closest-point query.
#[derive(Debug, Clone, Copy)]
pub struct SegmentClosest {
    /// Parametric position of the closest point on segment A, in `[0, 1]`.
    pub s: Scalar,
    /// Parametric position of the closest point on segment B, in `[0, 1]`.
    pub t: Scalar,
    /// Closest point on segment A.
    pub on_a: Vec3,
    /// Closest point on segment B.
    pub on_b: Vec3,
    /// Separating distance between the two closest points.
    pub distance: Scalar,
}

/// Computes the closest points between segments `[p1, q1]` and `[p2, q2]`.
///
/// Degenerate segments (length below the collapse threshold) fall back to
/// point-segment or point-point distance; the returned parameters are then
/// pinned to `0` on the degenerate side.
pub fn closest_points(p1: Vec3, q1: Vec3, p2: Vec3, q2: Vec3) -> SegmentClosest {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;

    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    let (s, t) = if a <= DEGENERATE_AXIS_THRESHOLD && e <= DEGENERATE_AXIS_THRESHOLD {
        // Both segments collapse to points.
        (0.0, 0.0)
    } else if a <= DEGENERATE_AXIS_THRESHOLD {
        // Segment A collapses: project p1 onto segment B.
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(r);
        if e <= DEGENERATE_AXIS_THRESHOLD {
            // Segment B collapses: project p2 onto segment A.
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            // General case: minimize over the unclamped line pair, then
            // clamp s and recompute t (and clamp again if needed).
            let b = d1.dot(d2);
            let denom = a * e - b * b;

            // Parallel segments have denom == 0; any s works, pick 0.
            let mut s = if denom > DEGENERATE_AXIS_THRESHOLD {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let mut t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }

            (s, t)
        }
    };

    let on_a = p1 + d1 * s;
    let on_b = p2 + d2 * t;
    SegmentClosest {
        s,
        t,
        on_a,
        on_b,
        distance: (on_a - on_b).length(),
    }
}
