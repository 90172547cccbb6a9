//! Simulation event types.
//!
//! Structured events emitted by the simulation driver at phase
//! boundaries. Events are lightweight value types carrying just enough
//! data for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the driver.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub step: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Target simulation time for this step (seconds).
        sim_time: f64,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the entire step (seconds).
        wall_time: f64,
    },

    /// Link-link contact resolution completed.
    ContactResolution {
        /// Number of candidate pairs tested.
        pairs_tested: u32,
        /// Number of pairs resolved as actual contacts.
        contacts_resolved: u32,
        /// Number of conflict-free batches used.
        batch_count: u32,
        /// Deepest penetration seen (meters).
        max_penetration: f64,
    },

    /// Energy snapshot at the current state.
    Energy {
        /// Kinetic energy (joules).
        kinetic: f64,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u32, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
