//! Scalar type alias for the simulation.
//!
//! Using `f64` — cable dynamics with penalty contact is stiff, and the
//! solver runs CPU-side where double precision costs little.

/// The floating-point type used throughout the simulation.
///
/// Set to `f64`. Change to `f32` for a GPU-friendly single-precision
/// build (expect looser contact tolerances).
pub type Scalar = f64;
