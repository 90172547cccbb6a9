//! # corda-contact
//!
//! Link-link collision detection and response for the Corda DLO simulator.
//!
//! Each volumetric link is a capped cylinder whose axis joins the centroids
//! of two consecutive triangular cross-sections. Candidate link pairs arrive
//! from an external broad phase; this crate covers:
//!
//! 1. **Narrow phase** — capsule-capsule proximity via segment closest points
//! 2. **Coloring** — greedy graph coloring of pairs into batches that share
//!    no mass point, so batches can resolve concurrently without write races
//! 3. **Response** — penalty force, Coulomb friction, restitution velocity,
//!    and displacement correction accumulated into the twelve involved points
//!
//! All response writes are additive; contributions from simultaneously
//! colliding pairs combine independently of evaluation order.

pub mod coloring;
pub mod narrow;
pub mod pipeline;
pub mod response;

pub use narrow::{link_proximity, LinkContact};
pub use pipeline::{ContactPipeline, ContactStepResult};
pub use response::{resolve_link_pair, PairResolution, ResponseParams};
