//! Contact pipeline: color candidate pairs, then resolve batch by batch.
//!
//! The pipeline sits between the external broad phase (which proposes
//! candidate link pairs) and the driver's correction phase. Batches are
//! resolved in color order; within a batch no two pairs share a mass
//! point, so a batch admits parallel execution and the final accumulated
//! state does not depend on the order pairs are evaluated in.

use corda_dynamics::Chain;
use corda_types::{PointId, Scalar};

use crate::coloring::{color_pairs, LinkPair};
use crate::response::{resolve_link_pair, ResponseParams};

/// Link-link contact resolution over a set of candidate pairs.
pub struct ContactPipeline {
    /// Coulomb friction coefficient for link-link contact.
    friction: Scalar,
    /// Response model coefficients.
    params: ResponseParams,
}

/// Summary of one contact resolution pass.
#[derive(Debug, Clone, Default)]
pub struct ContactStepResult {
    /// Number of candidate pairs tested.
    pub pairs_tested: u32,
    /// Number of pairs found in contact and resolved.
    pub contacts_resolved: u32,
    /// Number of color batches used.
    pub batch_count: u32,
    /// Deepest penetration seen this pass.
    pub max_penetration: Scalar,
    /// Sum of penalty normal force magnitudes.
    pub total_normal_force: Scalar,
}

impl ContactPipeline {
    /// Creates a pipeline with the given friction coefficient and
    /// response parameters.
    pub fn new(friction: Scalar, params: ResponseParams) -> Self {
        Self { friction, params }
    }

    /// Resolves all candidate pairs against the chain's predicted state.
    ///
    /// Must run strictly between the driver's accumulator-reset phase and
    /// its correction phase. Contributions land additively in the involved
    /// points' `df`, `v_res`, and `dr` accumulators; the chain's point
    /// positions are not touched here.
    pub fn resolve(&self, chain: &mut Chain, candidates: &[LinkPair]) -> ContactStepResult {
        let (sorted_pairs, batch_offsets) = color_pairs(candidates, chain.link_count());

        let mut result = ContactStepResult {
            pairs_tested: candidates.len() as u32,
            batch_count: batch_offsets.len().saturating_sub(1) as u32,
            ..ContactStepResult::default()
        };

        let rad = chain.contact_radius();

        for window in batch_offsets.windows(2) {
            // Pairs inside this batch touch disjoint point sets; they are
            // resolved sequentially here but may run concurrently.
            for &(la, lb) in &sorted_pairs[window[0]..window[1]] {
                let a = chain.link_points(la).map(PointId::index);
                let b = chain.link_points(lb).map(PointId::index);
                if let Some(resolution) = resolve_link_pair(
                    chain.points_mut(),
                    a,
                    b,
                    rad,
                    self.friction,
                    &self.params,
                ) {
                    result.contacts_resolved += 1;
                    result.max_penetration = result.max_penetration.max(resolution.penetration);
                    result.total_normal_force += resolution.normal_force;
                }
            }
        }

        result
    }
}
