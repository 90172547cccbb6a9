//! Physical constants and simulation defaults.

use crate::scalar::Scalar;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: Scalar = 9.8;

/// Default integration timestep (seconds).
pub const DEFAULT_DT: Scalar = 1.0e-3;

/// Default contact radius of a volumetric link (meters).
pub const DEFAULT_CONTACT_RADIUS: Scalar = 0.01;

/// Default Coulomb friction coefficient for link-link contact.
pub const DEFAULT_FRICTION: Scalar = 0.3;

/// Epsilon for floating-point comparisons.
pub const EPSILON: Scalar = 1.0e-12;

/// Squared-length threshold below which a segment axis is treated
/// as degenerate (a fully collapsed link).
pub const DEGENERATE_AXIS_THRESHOLD: Scalar = 1.0e-18;
