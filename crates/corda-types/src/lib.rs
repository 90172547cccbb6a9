//! # corda-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Corda deformable linear object (DLO) simulator.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Corda crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{CordaError, CordaResult};
pub use ids::{LinkId, PointId, SectionId};
pub use scalar::Scalar;
