//! Assignment and tracking behaviour through the public API.

use std::cell::Cell;
use std::sync::{Arc, Barrier};
use std::thread;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use secure360::experiment::{
    assign_group, Group, MemorySink, MemoryStore, NullSink, Tracker, STORAGE_KEY,
};

// =============================================================================
// Assignment
// =============================================================================

#[test]
fn repeated_reads_return_the_first_assignment() {
    let store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mut draw = move || rng.gen::<f64>();

    let first = assign_group(&store, &mut draw).unwrap();
    for _ in 0..100 {
        assert_eq!(assign_group(&store, &mut draw).unwrap(), first);
    }
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some(first.as_str()));
}

#[test]
fn tracker_group_never_changes_within_a_session() {
    let store = MemoryStore::new();
    let tracker = Tracker::start(&store, &mut || 0.8, Arc::new(NullSink));

    // Another writer changing storage mid-session does not leak in.
    store.clear();
    let _ = assign_group(&store, &mut || 0.1);

    for _ in 0..10 {
        assert_eq!(tracker.group(), Group::B);
    }
}

#[test]
fn persisted_group_does_not_draw() {
    for group in Group::all() {
        let store = MemoryStore::with_entry(STORAGE_KEY, group.as_str());
        let draws = Cell::new(0);
        let mut rng = || {
            draws.set(draws.get() + 1);
            0.5
        };

        let tracker = Tracker::start(&store, &mut rng, Arc::new(NullSink));
        assert_eq!(tracker.group(), group);
        assert_eq!(draws.get(), 0);
    }
}

#[test]
fn invalid_persisted_values_are_reassigned() {
    for corrupt in ["", "C", "ab", "{\"group\": \"A\"}", "[\"B\"]", " B "] {
        let store = MemoryStore::with_entry(STORAGE_KEY, corrupt);
        let draws = Cell::new(0);
        let mut rng = || {
            draws.set(draws.get() + 1);
            0.2
        };

        assert_eq!(assign_group(&store, &mut rng), Ok(Group::A));
        assert_eq!(draws.get(), 1, "{corrupt:?} should trigger one draw");
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("A"));
    }
}

#[test]
fn cleared_storage_restarts_the_lifecycle() {
    let store = MemoryStore::new();
    assert_eq!(assign_group(&store, &mut || 0.1), Ok(Group::A));

    store.clear();
    assert_eq!(assign_group(&store, &mut || 0.9), Ok(Group::B));
}

#[test]
fn fresh_sessions_split_evenly() {
    const SESSIONS: usize = 10_000;
    // Chi-square critical value, one degree of freedom, p = 0.001.
    const CRITICAL: f64 = 10.828;

    let mut rng = StdRng::seed_from_u64(0x360);
    let mut draw = move || rng.gen::<f64>();

    let mut counts = [0usize; 2];
    for _ in 0..SESSIONS {
        let store = MemoryStore::new();
        match assign_group(&store, &mut draw).unwrap() {
            Group::A => counts[0] += 1,
            Group::B => counts[1] += 1,
        }
    }

    let expected = SESSIONS as f64 / 2.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| (observed as f64 - expected).powi(2) / expected)
        .sum();
    assert!(
        chi_square < CRITICAL,
        "split {counts:?} gives chi-square {chi_square:.3}"
    );
}

#[test]
fn concurrent_first_visits_agree() {
    for _ in 0..50 {
        let store = Arc::new(MemoryStore::new());
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = [0.1, 0.9]
            .into_iter()
            .map(|sample| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    Tracker::start(store.as_ref(), &mut || sample, Arc::new(NullSink)).group()
                })
            })
            .collect();

        let groups: Vec<Group> = handles
            .into_iter()
            .map(|handle| handle.join().expect("tracker thread panicked"))
            .collect();

        assert_eq!(groups[0], groups[1]);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some(groups[0].as_str()));
    }
}

// =============================================================================
// Event recording
// =============================================================================

#[test]
fn cta_click_is_tagged_with_group_and_time() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "B");
    let sink = Arc::new(MemorySink::new());
    let tracker = Tracker::start(&store, &mut || 0.0, sink.clone());

    let before = Utc::now();
    tracker.record("cta_click", json!({ "location": "hero" }));

    let events = sink.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.name(), "cta_click");
    assert_eq!(event.group(), Group::B);
    assert!(event.timestamp() >= before);
    assert!(event.timestamp() <= Utc::now());
    assert_eq!(event.property("location"), Some(&json!("hero")));
}

#[test]
fn reserved_properties_cannot_be_overridden() {
    let store = MemoryStore::new();
    let sink = Arc::new(MemorySink::new());
    let tracker = Tracker::start(&store, &mut || 0.3, sink.clone());

    let before = Utc::now();
    tracker.record(
        "cta_click",
        json!({
            "location": "hero",
            "group": "B",
            "timestamp": "2000-01-01T00:00:00Z",
            "event": "something_else",
        }),
    );

    let event = &sink.events()[0];
    assert_eq!(event.name(), "cta_click");
    assert_eq!(event.group(), Group::A);
    assert!(event.timestamp() >= before);

    let wire = serde_json::to_value(event).unwrap();
    assert_eq!(wire["event"], "cta_click");
    assert_eq!(wire["group"], "A");
    assert_eq!(wire["location"], "hero");
    assert_ne!(wire["timestamp"], "2000-01-01T00:00:00Z");
}

#[test]
fn every_event_in_a_session_shares_the_group() {
    let store = MemoryStore::new();
    let sink = Arc::new(MemorySink::new());
    let tracker = Tracker::start(&store, &mut || 0.6, sink.clone());

    tracker.record("nav_click", json!({ "section": "features" }));
    tracker.record("demo_click", json!({ "demo_type": "general" }));
    tracker.record("product_info_click", json!({ "product": "TAPO C210 Pan/Tilt" }));
    tracker.record("form_submit", json!({ "has_phone": false, "has_message": true }));

    let events = sink.events();
    assert_eq!(events.len(), 4);
    assert!(events.iter().all(|event| event.group() == tracker.group()));
}
