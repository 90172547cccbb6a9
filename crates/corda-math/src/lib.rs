//! # corda-math
//!
//! Linear algebra primitives for the Corda simulator.
//!
//! Provides:
//! - Re-exports of `glam` double-precision types (`DVec3` as the canonical
//!   [`Vec3`])
//! - Closest-point queries between finite segments, the geometric primitive
//!   behind link-link capsule collision

pub mod segment;

pub use segment::{closest_points, SegmentClosest};

// Re-export glam's double-precision vector as the canonical math type.
pub use glam::DVec3 as Vec3;
