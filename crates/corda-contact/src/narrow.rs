//! Capsule-capsule narrow phase for link pairs.
//!
//! A link's axis joins the centroids of its two triangular cross-sections.
//! Two links collide when the minimum distance between their axis segments
//! drops below the sum of the capsule radii (`2·rad` for a uniform-radius
//! object). The query runs on *predicted* positions: contact is evaluated
//! fresh every step against the configuration the integrator proposes.

use corda_dynamics::MassPoint;
use corda_math::{closest_points, Vec3};
use corda_types::constants::EPSILON;
use corda_types::Scalar;

/// A detected contact between two links.
///
/// Carries the geometric data the response phase needs: where along each
/// axis the contact sits, the contact normal, and how deep the overlap is.
#[derive(Debug, Clone, Copy)]
pub struct LinkContact {
    /// Parametric contact position along link A's axis, in `[0, 1]`.
    pub s: Scalar,
    /// Parametric contact position along link B's axis, in `[0, 1]`.
    pub t: Scalar,
    /// Unit contact normal pointing from link B toward link A.
    pub normal: Vec3,
    /// Penetration depth `2·rad − d`, strictly positive.
    pub penetration: Scalar,
    /// Axis-to-axis separation at the closest points.
    pub distance: Scalar,
}

/// Centroid of the triangle formed by three points, at predicted positions.
#[inline]
pub(crate) fn triangle_centroid(points: &[MassPoint], corners: [usize; 3]) -> Vec3 {
    (points[corners[0]].predicted_position()
        + points[corners[1]].predicted_position()
        + points[corners[2]].predicted_position())
        / 3.0
}

/// Tests two links for capsule overlap.
///
/// `a` and `b` each name six points: the corners of the link's first
/// cross-section followed by the corners of its second. Returns `None`
/// when the axes are separated by at least `2·rad` — a non-colliding
/// pair contributes nothing.
///
/// Collapsed axes (coincident centroids) are legal input and fall back
/// to point-segment distance inside the closest-point query. When the
/// axes intersect exactly, the normal degenerates; the tie-break below
/// picks the axes' common perpendicular, which is deterministic for a
/// given input configuration.
pub fn link_proximity(
    points: &[MassPoint],
    a: [usize; 6],
    b: [usize; 6],
    rad: Scalar,
) -> Option<LinkContact> {
    let ci = triangle_centroid(points, [a[0], a[1], a[2]]);
    let cip1 = triangle_centroid(points, [a[3], a[4], a[5]]);
    let cj = triangle_centroid(points, [b[0], b[1], b[2]]);
    let cjp1 = triangle_centroid(points, [b[3], b[4], b[5]]);

    let closest = closest_points(ci, cip1, cj, cjp1);

    if closest.distance >= 2.0 * rad {
        return None;
    }

    let normal = if closest.distance > EPSILON {
        (closest.on_a - closest.on_b) / closest.distance
    } else {
        // Exact intersection: use the common perpendicular of the axes,
        // falling back to a fixed direction when they are also parallel.
        let perpendicular = (cip1 - ci).cross(cjp1 - cj);
        let len = perpendicular.length();
        if len > EPSILON {
            perpendicular / len
        } else {
            Vec3::Y
        }
    };

    Some(LinkContact {
        s: closest.s,
        t: closest.t,
        normal,
        penetration: 2.0 * rad - closest.distance,
        distance: closest.distance,
    })
}
