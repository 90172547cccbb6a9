//! Reference time-stepping driver.
//!
//! The Corda core defines *per-point lifecycle hooks*; any Verlet-family
//! integrator can drive them. This module provides a symplectic Euler
//! driver so the phase-ordering contract is exercised end to end:
//!
//! 1. `begin_step` — reset all accumulators (strict barrier)
//! 2. `accumulate_external` — gravity and damping into `f`
//! 3. `predict` — integrate `f` into `v⁺`, `r⁺`
//! 4. *(collision resolution runs here, writing `df`, `dr`, `v_res`)*
//! 5. `finish_step` — apply corrections, then roll the time levels
//!    forward (strict barrier)
//!
//! No collision evaluation may start before phase 1 completes, and
//! phase 5 may not run before all evaluations for the step complete.

use corda_math::Vec3;

use crate::config::SimConfig;
use crate::point::MassPoint;

/// Symplectic Euler driver over a slice of mass points.
pub struct Stepper {
    config: SimConfig,
}

impl Stepper {
    /// Creates a driver from a validated configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Borrow the driver's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Phase 1: reset the force, displacement, and restitution
    /// accumulators on every point. `f` picks up the previous step's
    /// deferred collision forces here.
    pub fn begin_step(&self, points: &mut [MassPoint]) {
        for point in points.iter_mut() {
            point.reset_force();
            point.reset_displacement();
            point.reset_restitution_velocity();
        }
    }

    /// Phase 2: accumulate gravity and viscous damping into `f`.
    ///
    /// Gravity scales with the point mass, so anchored points (zero mass)
    /// receive no weight.
    pub fn accumulate_external(&self, points: &mut [MassPoint]) {
        let g = Vec3::from_array(self.config.gravity);
        for point in points.iter_mut() {
            point.add_external_force(point.mass() * g);
            point.add_damping_force(self.config.damping);
        }
    }

    /// Phase 3: predict `v⁺` and `r⁺` from the accumulated force.
    ///
    /// Anchored points keep their current position and zero predicted
    /// velocity — this is the integrator's half of the anchoring
    /// contract; the collision routine itself never checks masses.
    pub fn predict(&self, points: &mut [MassPoint]) {
        let dt = self.config.dt;
        for point in points.iter_mut() {
            if point.is_anchored() {
                point.set_predicted(point.position(), Vec3::ZERO);
                continue;
            }
            let v_plus = point.velocity() + dt * point.force() / point.mass();
            let r_plus = point.position() + dt * v_plus;
            point.set_predicted(r_plus, v_plus);
        }
    }

    /// Phase 5: apply the accumulated corrections to the predicted state,
    /// then roll the three time levels forward.
    ///
    /// Anchored points skip the corrections (their accumulators may hold
    /// writes from the collision pass, which are discarded) but still
    /// synchronize so their history stays consistent.
    pub fn finish_step(&self, points: &mut [MassPoint]) {
        for point in points.iter_mut() {
            if !point.is_anchored() {
                point.correct_position();
                point.correct_velocity();
            }
            point.synchronize();
        }
    }
}
