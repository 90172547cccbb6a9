//! # corda-dynamics
//!
//! Per-point simulation state and time stepping for the Corda
//! deformable linear object simulator.
//!
//! ## Key Types
//!
//! - [`MassPoint`] — a particle with positions and velocities at three
//!   consecutive time levels plus the per-step accumulators that collision
//!   resolution writes into
//! - [`Chain`] — the owning structure: mass points grouped into triangular
//!   cross-sections, with link views over consecutive section pairs
//! - [`SimConfig`] — serde-backed simulation parameters
//! - [`Stepper`] — reference symplectic driver exercising the per-point
//!   lifecycle hooks in their contractual order

pub mod chain;
pub mod config;
pub mod point;
pub mod stepper;

pub use chain::Chain;
pub use config::SimConfig;
pub use point::MassPoint;
pub use stepper::Stepper;
