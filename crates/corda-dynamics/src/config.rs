//! Simulation configuration.
//!
//! Parameters that control time stepping and contact response.
//! Contact stiffness, restitution, and displacement relaxation are
//! configuration, not constants — the response model is a penalty
//! formulation and the right coefficients depend on the scene.

use serde::{Deserialize, Serialize};

use corda_types::{CordaError, CordaResult, Scalar};

/// Configuration for the simulation driver and contact response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Integration timestep (seconds).
    pub dt: Scalar,

    /// Gravity vector `[gx, gy, gz]` in m/s².
    pub gravity: [Scalar; 3],

    /// Viscous damping coefficient `b` (force is `-b·v`).
    pub damping: Scalar,

    /// Contact radius of the volumetric links (meters).
    pub contact_radius: Scalar,

    /// Coulomb friction coefficient `mu` for link-link contact.
    pub friction: Scalar,

    /// Penalty stiffness: contact force per meter of penetration.
    pub contact_stiffness: Scalar,

    /// Restitution coefficient in `[0, 1]`. Zero cancels the approaching
    /// normal velocity exactly; one reflects it.
    pub restitution: Scalar,

    /// Fraction of the residual penetration resolved by direct
    /// displacement correction each step, in `[0, 1]`.
    pub displacement_relaxation: Scalar,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: corda_types::constants::DEFAULT_DT,
            gravity: [0.0, -corda_types::constants::GRAVITY, 0.0],
            damping: 0.01,
            contact_radius: corda_types::constants::DEFAULT_CONTACT_RADIUS,
            friction: corda_types::constants::DEFAULT_FRICTION,
            contact_stiffness: 1.0e3,
            restitution: 0.0,
            displacement_relaxation: 0.5,
        }
    }
}

impl SimConfig {
    /// Validates the configuration, failing fast on caller contract
    /// violations (zero radius, negative friction, non-finite values)
    /// rather than producing silently wrong physics.
    pub fn validate(&self) -> CordaResult<()> {
        let finite = self.dt.is_finite()
            && self.gravity.iter().all(|g| g.is_finite())
            && self.damping.is_finite()
            && self.contact_radius.is_finite()
            && self.friction.is_finite()
            && self.contact_stiffness.is_finite()
            && self.restitution.is_finite()
            && self.displacement_relaxation.is_finite();
        if !finite {
            return Err(CordaError::InvalidConfig(
                "Configuration contains non-finite values".into(),
            ));
        }
        if self.dt <= 0.0 {
            return Err(CordaError::InvalidConfig(format!(
                "Timestep must be positive, got {}",
                self.dt
            )));
        }
        if self.contact_radius <= 0.0 {
            return Err(CordaError::InvalidConfig(format!(
                "Contact radius must be positive, got {}",
                self.contact_radius
            )));
        }
        if self.friction < 0.0 {
            return Err(CordaError::InvalidConfig(format!(
                "Friction coefficient must be non-negative, got {}",
                self.friction
            )));
        }
        if self.contact_stiffness < 0.0 {
            return Err(CordaError::InvalidConfig(format!(
                "Contact stiffness must be non-negative, got {}",
                self.contact_stiffness
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(CordaError::InvalidConfig(format!(
                "Restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }
        if !(0.0..=1.0).contains(&self.displacement_relaxation) {
            return Err(CordaError::InvalidConfig(format!(
                "Displacement relaxation must be in [0, 1], got {}",
                self.displacement_relaxation
            )));
        }
        Ok(())
    }
}
