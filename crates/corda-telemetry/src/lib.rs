//! # corda-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (step timing, contact counts, energy) that can be consumed by
//! pluggable sinks (in-memory buffers for tests, `tracing` for logs).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
