//! Contact response for a colliding link pair.
//!
//! The response has three channels, written into the twelve involved
//! points' accumulators and consumed by the driver at different times:
//!
//! - `df` — penalty force ∝ penetration plus Coulomb friction, applied
//!   as force next step (one-step latency: every pair of the current
//!   configuration is gathered before any force is consumed)
//! - `v_res` — restitution velocity canceling the approaching normal
//!   component of the relative contact velocity, applied to `v⁺`
//! - `dr` — displacement correction resolving residual overlap that
//!   force integration alone would not remove within one step
//!
//! Forces are spread over each link's corners with weights `(1−s)/3` and
//! `s/3` (mirrored with `t` on the other side), so the six weights on a
//! side sum to one and the pair's force contributions cancel exactly.
//! Velocity and displacement corrections use the same weights but are
//! rescaled by the distribution's contraction factor, so the *interpolated
//! contact point* quantities change by the intended amount.

use corda_dynamics::MassPoint;
use corda_math::Vec3;
use corda_types::constants::EPSILON;
use corda_types::Scalar;

use crate::narrow::link_proximity;

/// Coefficients of the contact response model.
///
/// These are configuration, not constants: penalty stiffness trades
/// response strength against integration stability, and the right values
/// depend on timestep and mass distribution.
#[derive(Debug, Clone, Copy)]
pub struct ResponseParams {
    /// Penalty stiffness: normal force per meter of penetration.
    pub stiffness: Scalar,
    /// Restitution coefficient in `[0, 1]`; zero is perfectly inelastic.
    pub restitution: Scalar,
    /// Fraction of the penetration resolved by displacement each step.
    pub displacement_relaxation: Scalar,
}

impl Default for ResponseParams {
    fn default() -> Self {
        Self {
            stiffness: 1.0e3,
            restitution: 0.0,
            displacement_relaxation: 0.5,
        }
    }
}

/// Summary of one resolved pair, for telemetry and stats.
#[derive(Debug, Clone, Copy)]
pub struct PairResolution {
    /// Penetration depth at the contact.
    pub penetration: Scalar,
    /// Magnitude of the penalty normal force.
    pub normal_force: Scalar,
}

/// Per-corner distribution weights for one link: `(1−u)/3` on the first
/// cross-section, `u/3` on the second. The six weights sum to one.
#[inline]
fn corner_weights(u: Scalar) -> [Scalar; 6] {
    let near = (1.0 - u) / 3.0;
    let far = u / 3.0;
    [near, near, near, far, far, far]
}

/// Contraction factor of the corner distribution: adding `w_k · Δ` to the
/// corners changes the interpolated contact-point value by this multiple
/// of `Δ`.
#[inline]
fn contraction(u: Scalar) -> Scalar {
    ((1.0 - u) * (1.0 - u) + u * u) / 3.0
}

/// Velocity of the contact point on one link: the section-centroid
/// velocities interpolated by the axis parameter, at predicted velocities.
fn contact_velocity(points: &[MassPoint], link: [usize; 6], u: Scalar) -> Vec3 {
    let near = (points[link[0]].predicted_velocity()
        + points[link[1]].predicted_velocity()
        + points[link[2]].predicted_velocity())
        / 3.0;
    let far = (points[link[3]].predicted_velocity()
        + points[link[4]].predicted_velocity()
        + points[link[5]].predicted_velocity())
        / 3.0;
    near * (1.0 - u) + far * u
}

/// Detects and resolves contact between two links.
///
/// `a` and `b` each name six points in `points`: the corners of the
/// link's two triangular cross-sections. The twelve indices must be
/// distinct (candidate pairs exclude links sharing a cross-section).
/// `rad` is the capsule radius, `mu` the Coulomb friction coefficient.
///
/// A non-colliding pair is an identity operation. For a colliding pair,
/// contributions are *added* to the twelve points' `df`, `v_res`, and
/// `dr` accumulators — never overwritten — so multiple pairs sharing a
/// point combine correctly regardless of evaluation order. No mass is
/// inspected here: anchored points receive their writes like any other,
/// and the integrator discards them.
pub fn resolve_link_pair(
    points: &mut [MassPoint],
    a: [usize; 6],
    b: [usize; 6],
    rad: Scalar,
    mu: Scalar,
    params: &ResponseParams,
) -> Option<PairResolution> {
    debug_assert!(rad > 0.0, "contact radius must be positive");
    debug_assert!(mu >= 0.0, "friction coefficient must be non-negative");
    debug_assert!(
        a.iter().all(|i| !b.contains(i)),
        "link pair must not share points"
    );

    let contact = link_proximity(points, a, b, rad)?;
    let n = contact.normal;

    // Relative velocity of the contact points, A relative to B. The
    // normal points B → A, so approach shows up as a negative component.
    let v_rel = contact_velocity(points, a, contact.s) - contact_velocity(points, b, contact.t);
    let v_normal = v_rel.dot(n);

    // Penalty normal force plus Coulomb friction opposing relative slip,
    // capped at mu times the normal force magnitude.
    let normal_force = params.stiffness * contact.penetration;
    let mut force = normal_force * n;

    let v_tangent = v_rel - v_normal * n;
    let slip = v_tangent.length();
    if mu > 0.0 && slip > EPSILON {
        force += -(mu * normal_force) * (v_tangent / slip);
    }

    // Restitution: cancel (or reflect, for restitution > 0) the normal
    // approach velocity. Only when approaching — separating contacts
    // must not be pulled back together.
    let kappa = contraction(contact.s) + contraction(contact.t);
    let restitution_delta = if v_normal < 0.0 {
        -(1.0 + params.restitution) * v_normal / kappa
    } else {
        0.0
    };

    // Displacement: push the two contact points apart so their relative
    // separation grows by the configured fraction of the penetration.
    let displacement_delta = params.displacement_relaxation * contact.penetration / kappa;

    let weights_a = corner_weights(contact.s);
    let weights_b = corner_weights(contact.t);

    for (k, &idx) in a.iter().enumerate() {
        let w = weights_a[k];
        let point = &mut points[idx];
        point.add_deferred_force(w * force);
        point.add_restitution_velocity(w * restitution_delta * n);
        point.add_displacement(w * displacement_delta * n);
    }
    for (k, &idx) in b.iter().enumerate() {
        let w = weights_b[k];
        let point = &mut points[idx];
        point.add_deferred_force(-w * force);
        point.add_restitution_velocity(-w * restitution_delta * n);
        point.add_displacement(-w * displacement_delta * n);
    }

    Some(PairResolution {
        penetration: contact.penetration,
        normal_force,
    })
}
