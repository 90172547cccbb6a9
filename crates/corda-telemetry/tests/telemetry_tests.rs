//! Integration tests for corda-telemetry.

use corda_telemetry::{EventBus, EventKind, SimulationEvent, VecSink};

#[test]
fn bus_delivers_events_to_sinks_on_flush() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    assert_eq!(bus.sink_count(), 1);

    bus.emit(SimulationEvent::new(0, EventKind::StepBegin { sim_time: 0.0 }));
    bus.emit(SimulationEvent::new(
        0,
        EventKind::ContactResolution {
            pairs_tested: 10,
            contacts_resolved: 2,
            batch_count: 3,
            max_penetration: 0.01,
        },
    ));
    bus.flush();

    let sink = bus
        .sink(0)
        .and_then(|s| s.as_any().downcast_ref::<VecSink>())
        .unwrap();
    assert_eq!(sink.events.len(), 2);
    assert!(matches!(sink.events[0].kind, EventKind::StepBegin { .. }));
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(SimulationEvent::new(3, EventKind::Energy { kinetic: 1.5 }));
    bus.flush();

    let sink = bus
        .sink(0)
        .and_then(|s| s.as_any().downcast_ref::<VecSink>())
        .unwrap();
    assert!(sink.events.is_empty());
}

#[test]
fn event_serialization_roundtrip() {
    let event = SimulationEvent::new(
        7,
        EventKind::ContactResolution {
            pairs_tested: 5,
            contacts_resolved: 1,
            batch_count: 2,
            max_penetration: 0.002,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.step, 7);
    assert!(matches!(
        recovered.kind,
        EventKind::ContactResolution {
            contacts_resolved: 1,
            ..
        }
    ));
}
