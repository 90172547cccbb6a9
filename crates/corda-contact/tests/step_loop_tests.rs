//! Full step-loop tests: reset → external forces → predict → contact
//! resolution → correct → synchronize, with telemetry on the side.

use corda_contact::{ContactPipeline, ResponseParams};
use corda_dynamics::{Chain, SimConfig, Stepper};
use corda_math::Vec3;
use corda_telemetry::{EventBus, EventKind, SimulationEvent, VecSink};
use corda_types::SectionId;

/// A rod whose contact radius is fat enough that links two apart overlap.
fn overlapping_rod() -> Chain {
    Chain::rod(6, 0.1, 0.02, 0.12, 0.01).unwrap()
}

#[test]
fn fat_rod_resolves_self_contacts() {
    let mut chain = overlapping_rod();
    let pairs = chain.candidate_pairs(2);
    assert!(!pairs.is_empty());

    // Prediction phase: predicted state mirrors the rest configuration.
    let config = SimConfig {
        gravity: [0.0, 0.0, 0.0],
        damping: 0.0,
        ..SimConfig::default()
    };
    let stepper = Stepper::new(config);
    stepper.begin_step(chain.points_mut());
    stepper.predict(chain.points_mut());

    let pipeline = ContactPipeline::new(0.3, ResponseParams::default());
    let result = pipeline.resolve(&mut chain, &pairs);

    assert_eq!(result.pairs_tested, pairs.len() as u32);
    assert!(result.contacts_resolved > 0);
    assert!(result.batch_count > 0);
    assert!(result.max_penetration > 0.0);

    // Contact forces landed in the deferred accumulators.
    let total_deferred: f64 = chain
        .points()
        .iter()
        .map(|p| p.deferred_force().length())
        .sum();
    assert!(total_deferred > 0.0);

    // Newton's third law over the whole chain: pairwise contributions
    // cancel, so the net deferred force is zero.
    let net: Vec3 = chain
        .points()
        .iter()
        .map(|p| p.deferred_force())
        .fold(Vec3::ZERO, |acc, f| acc + f);
    assert!(net.length() < 1e-9);
}

#[test]
fn anchored_rod_hangs_without_drifting_its_anchor() {
    let config = SimConfig {
        contact_radius: 0.005,
        ..SimConfig::default()
    };
    let stepper = Stepper::new(config);
    let pipeline = ContactPipeline::new(0.3, ResponseParams::default());

    // Thin rod: no self-contact; first section welded in place.
    let mut chain = Chain::rod(4, 0.1, 0.02, 0.005, 0.01).unwrap();
    chain.anchor_section(SectionId(0));
    let pairs = chain.candidate_pairs(2);
    let anchor_rest: Vec<Vec3> = chain.section_points(SectionId(0))
        .iter()
        .map(|&id| chain.points()[id.index()].rest_position())
        .collect();

    for _ in 0..20 {
        stepper.begin_step(chain.points_mut());
        stepper.accumulate_external(chain.points_mut());
        stepper.predict(chain.points_mut());
        pipeline.resolve(&mut chain, &pairs);
        stepper.finish_step(chain.points_mut());
    }

    // Anchor invariance: r == r0 for the anchored section.
    for (k, &id) in chain.section_points(SectionId(0)).iter().enumerate() {
        assert_eq!(chain.points()[id.index()].position(), anchor_rest[k]);
        assert_eq!(chain.points()[id.index()].velocity(), Vec3::ZERO);
    }

    // The free end picked up downward velocity under gravity.
    let tip = chain.section_points(SectionId(3));
    assert!(chain.points()[tip[0].index()].velocity().y < 0.0);
}

#[test]
fn step_loop_emits_contact_telemetry() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));

    let config = SimConfig {
        gravity: [0.0, 0.0, 0.0],
        damping: 0.0,
        ..SimConfig::default()
    };
    let dt = config.dt;
    let stepper = Stepper::new(config);
    let pipeline = ContactPipeline::new(0.3, ResponseParams::default());

    let mut chain = overlapping_rod();
    let pairs = chain.candidate_pairs(2);

    for step in 0..3u32 {
        bus.emit(SimulationEvent::new(
            step,
            EventKind::StepBegin {
                sim_time: step as f64 * dt,
            },
        ));

        stepper.begin_step(chain.points_mut());
        stepper.accumulate_external(chain.points_mut());
        stepper.predict(chain.points_mut());
        let result = pipeline.resolve(&mut chain, &pairs);
        stepper.finish_step(chain.points_mut());

        bus.emit(SimulationEvent::new(
            step,
            EventKind::ContactResolution {
                pairs_tested: result.pairs_tested,
                contacts_resolved: result.contacts_resolved,
                batch_count: result.batch_count,
                max_penetration: result.max_penetration,
            },
        ));
        bus.emit(SimulationEvent::new(
            step,
            EventKind::Energy {
                kinetic: chain.kinetic_energy(),
            },
        ));
        bus.flush();
    }

    let sink = bus
        .sink(0)
        .and_then(|s| s.as_any().downcast_ref::<VecSink>())
        .unwrap();
    assert_eq!(sink.events.len(), 9);
    let contact_events = sink
        .events
        .iter()
        .filter(|e| matches!(e.kind, EventKind::ContactResolution { .. }))
        .count();
    assert_eq!(contact_events, 3);
}

#[test]
fn resolution_stats_are_stable_across_candidate_order() {
    let pairs_forward = {
        let mut chain = overlapping_rod();
        let stepper = Stepper::new(SimConfig::default());
        stepper.begin_step(chain.points_mut());
        stepper.predict(chain.points_mut());
        let pairs = chain.candidate_pairs(2);
        let pipeline = ContactPipeline::new(0.3, ResponseParams::default());
        pipeline.resolve(&mut chain, &pairs)
    };

    let pairs_reversed = {
        let mut chain = overlapping_rod();
        let stepper = Stepper::new(SimConfig::default());
        stepper.begin_step(chain.points_mut());
        stepper.predict(chain.points_mut());
        let mut pairs = chain.candidate_pairs(2);
        pairs.reverse();
        let pipeline = ContactPipeline::new(0.3, ResponseParams::default());
        pipeline.resolve(&mut chain, &pairs)
    };

    assert_eq!(
        pairs_forward.contacts_resolved,
        pairs_reversed.contacts_resolved
    );
    assert_eq!(pairs_forward.pairs_tested, pairs_reversed.pairs_tested);
    assert!(
        (pairs_forward.max_penetration - pairs_reversed.max_penetration).abs() < 1e-12
    );
}
