//! A 3D point endowed with a mass.
//!
//! A mass point is described by its position, mass, force and velocity.
//! For compatibility with multi-stage integration schemes it stores the
//! position and velocity at three consecutive time instances: `t - dt`,
//! `t` and `t + dt`. Collision handling and constraint reinforcement
//! write into three additive accumulators: a displacement buffer `dr`,
//! a restitution velocity buffer `v_res`, and a deferred force buffer
//! `df` that becomes the applied force of the *next* step. The deferral
//! gives the collision pass a full view of the current configuration
//! before any of its force contributions are consumed.

use std::fmt;

use corda_math::Vec3;
use corda_types::Scalar;

/// A particle with three-time-level state and per-step accumulators.
///
/// A mass of `0.0` is the anchored-point sentinel: the point never moves
/// under integration or correction, but still participates as collision
/// geometry and still receives accumulator writes.
#[derive(Debug, Clone)]
pub struct MassPoint {
    // ─── Positions: previous, current, predicted, rest ───
    r: Vec3,
    r_minus: Vec3,
    r_plus: Vec3,
    r0: Vec3,

    // ─── Velocities, same time levels ───
    v: Vec3,
    v_minus: Vec3,
    v_plus: Vec3,
    v0: Vec3,

    // ─── Collision and constraint accumulators ───
    /// Restitution velocity correction, applied to `v_plus`.
    v_res: Vec3,
    /// Net applied force, consumed by the integrator this step.
    f: Vec3,
    /// Displacement correction, applied to `r_plus`.
    dr: Vec3,
    /// Force contributions deferred to the next step's `f`.
    df: Vec3,

    /// Mass concentration at this point (kilograms). Zero means anchored.
    mass: Scalar,
}

impl MassPoint {
    /// Creates a static mass point at the given position.
    ///
    /// All three position levels and the rest position are set to `pos`;
    /// velocities, forces, and accumulators start at zero. The mass starts
    /// at zero (anchored) until [`set_mass`](Self::set_mass) is called.
    pub fn new(pos: Vec3) -> Self {
        Self {
            r: pos,
            r_minus: pos,
            r_plus: pos,
            r0: pos,
            v: Vec3::ZERO,
            v_minus: Vec3::ZERO,
            v_plus: Vec3::ZERO,
            v0: Vec3::ZERO,
            v_res: Vec3::ZERO,
            f: Vec3::ZERO,
            dr: Vec3::ZERO,
            df: Vec3::ZERO,
            mass: 0.0,
        }
    }

    // ─── Read access ──────────────────────────────────────────────

    /// Current position `r`.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.r
    }

    /// Previous-step position `r⁻`.
    #[inline]
    pub fn previous_position(&self) -> Vec3 {
        self.r_minus
    }

    /// Predicted next-step position `r⁺`.
    #[inline]
    pub fn predicted_position(&self) -> Vec3 {
        self.r_plus
    }

    /// Rest (reference) position `r0`, fixed at construction.
    #[inline]
    pub fn rest_position(&self) -> Vec3 {
        self.r0
    }

    /// Current velocity `v`.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.v
    }

    /// Previous-step velocity `v⁻`.
    #[inline]
    pub fn previous_velocity(&self) -> Vec3 {
        self.v_minus
    }

    /// Predicted next-step velocity `v⁺`.
    #[inline]
    pub fn predicted_velocity(&self) -> Vec3 {
        self.v_plus
    }

    /// Rest (reference) velocity `v0`, fixed at construction.
    #[inline]
    pub fn rest_velocity(&self) -> Vec3 {
        self.v0
    }

    /// Net applied force for this step.
    #[inline]
    pub fn force(&self) -> Vec3 {
        self.f
    }

    /// Deferred force accumulator (next step's `f`).
    #[inline]
    pub fn deferred_force(&self) -> Vec3 {
        self.df
    }

    /// Displacement correction accumulator.
    #[inline]
    pub fn displacement(&self) -> Vec3 {
        self.dr
    }

    /// Restitution velocity accumulator.
    #[inline]
    pub fn restitution_velocity(&self) -> Vec3 {
        self.v_res
    }

    /// Mass in kilograms.
    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Whether this point is kinematically fixed (`mass == 0`).
    #[inline]
    pub fn is_anchored(&self) -> bool {
        self.mass == 0.0
    }

    // ─── Per-step lifecycle ───────────────────────────────────────

    /// Replaces the mass. A value of zero anchors the point.
    pub fn set_mass(&mut self, mass: Scalar) {
        self.mass = mass;
    }

    /// Resets the force accumulator: `f ← df; df ← 0`.
    ///
    /// Must run exactly once per step, before any force accumulation.
    /// The handover is what defers collision forces by one step.
    pub fn reset_force(&mut self) {
        self.f = self.df;
        self.df = Vec3::ZERO;
    }

    /// Resets the displacement accumulator.
    pub fn reset_displacement(&mut self) {
        self.dr = Vec3::ZERO;
    }

    /// Resets the restitution velocity accumulator.
    pub fn reset_restitution_velocity(&mut self) {
        self.v_res = Vec3::ZERO;
    }

    /// Adds an external force contribution to `f`.
    pub fn add_external_force(&mut self, force: Vec3) {
        self.f += force;
    }

    /// Adds a viscous damping force `-b·v` to `f`.
    pub fn add_damping_force(&mut self, b: Scalar) {
        self.f += -b * self.v;
    }

    /// Adds a collision force contribution to the deferred buffer `df`.
    pub fn add_deferred_force(&mut self, force: Vec3) {
        self.df += force;
    }

    /// Adds a displacement correction contribution to `dr`.
    pub fn add_displacement(&mut self, displacement: Vec3) {
        self.dr += displacement;
    }

    /// Adds a restitution velocity contribution to `v_res`.
    pub fn add_restitution_velocity(&mut self, velocity: Vec3) {
        self.v_res += velocity;
    }

    /// Corrects the predicted position by the accumulated displacement.
    ///
    /// Calling twice without an intervening reset double-applies.
    pub fn correct_position(&mut self) {
        self.r_plus += self.dr;
    }

    /// Corrects the predicted velocity by the accumulated restitution velocity.
    pub fn correct_velocity(&mut self) {
        self.v_plus += self.v_res;
    }

    /// Writes the predicted state directly. Used by the integrator after
    /// force integration; anchored points must be written with their
    /// current position and zero velocity.
    pub fn set_predicted(&mut self, r_plus: Vec3, v_plus: Vec3) {
        self.r_plus = r_plus;
        self.v_plus = v_plus;
    }

    /// Synchronizes positions and velocities by rolling the three time
    /// levels forward: `r⁻ ← r; r ← r⁺` and `v⁻ ← v; v ← v⁺`.
    ///
    /// Must run after all corrections for the step and before the next
    /// step's force accumulation.
    pub fn synchronize(&mut self) {
        self.r_minus = self.r;
        self.r = self.r_plus;
        self.v_minus = self.v;
        self.v = self.v_plus;
    }

    /// Adds `offset` directly to the current position.
    ///
    /// Out-of-band mutation for setup and testing, not part of the
    /// regular step cycle.
    pub fn perturb(&mut self, offset: Vec3) {
        self.r += offset;
    }
}

/// Diagnostic rendering: current position followed by rest position.
impl fmt::Display for MassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) -- ({}, {}, {})",
            self.r.x, self.r.y, self.r.z, self.r0.x, self.r0.y, self.r0.z
        )
    }
}
