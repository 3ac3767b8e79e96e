//! # Property-Based Tests
//!
//! Invariants of time bucketing, the event builder and the curve engine
//! checked over generated inputs.

use glucose_core::{
    build_events, builtin_catalog, end_of_day, glycation, index_to_time, run, simulate_day,
    time_to_index, Action, Boundary, ItemKind, SimulationSettings,
};
use proptest::collection::vec;
use proptest::prelude::*;

const FOOD_IDS: [u32; 6] = [18, 20, 21, 77, 111, 121];
const EXERCISE_IDS: [u32; 4] = [2, 3, 4, 6];

fn granularity() -> impl Strategy<Value = u32> {
    prop_oneof![Just(5u32), Just(10), Just(15), Just(20), Just(30), 1u32..=60]
}

fn action() -> impl Strategy<Value = Action> {
    (
        0u32..24,
        0u32..60,
        any::<bool>(),
        0usize..4,
        // Volumes large enough to span a bucket at up to 60 min granularity
        1.0f64..3.0,
    )
        .prop_map(|(hh, mm, is_food, pick, volume)| {
            let time = format!("{:02}:{:02}", hh, mm);
            if is_food {
                Action::new(time, ItemKind::Food, FOOD_IDS[pick], volume)
            } else {
                Action::new(time, ItemKind::Exercise, EXERCISE_IDS[pick], volume)
            }
        })
}

proptest! {
    /// Bucket index → clock → bucket index is exact.
    #[test]
    fn index_round_trips_through_clock(g in granularity(), i in 0usize..1440) {
        let end = end_of_day(g).unwrap();
        let i = i % (end + 1);
        prop_assert_eq!(time_to_index(&index_to_time(i, g), g).unwrap(), i);
    }

    /// Clock → bucket → clock is exact for multiples of the granularity.
    #[test]
    fn aligned_clock_round_trips(g in granularity(), minutes in 0u32..1440) {
        let aligned = minutes - minutes % g;
        let clock = format!("{:02}:{:02}", aligned / 60, aligned % 60);
        let index = time_to_index(&clock, g).unwrap();
        prop_assert_eq!(index_to_time(index, g), clock);
    }

    /// Same actions always give the same sorted events.
    #[test]
    fn event_builder_is_deterministic(actions in vec(action(), 0..12), g in granularity()) {
        let catalog = builtin_catalog().unwrap();
        let first = build_events(catalog, &actions, g).unwrap();
        let second = build_events(catalog, &actions, g).unwrap();

        prop_assert_eq!(first.len(), actions.len() * 2);
        prop_assert!(first.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        prop_assert_eq!(first, second);
    }

    /// Begin and end events balance out.
    #[test]
    fn events_come_in_pairs(actions in vec(action(), 1..12), g in granularity()) {
        let catalog = builtin_catalog().unwrap();
        let events = build_events(catalog, &actions, g).unwrap();

        let begins = events.iter().filter(|e| e.boundary == Boundary::Begin).count();
        let ends = events.iter().filter(|e| e.boundary == Boundary::End).count();
        prop_assert_eq!(begins, ends);
    }

    /// The series covers every bucket of the day exactly once.
    #[test]
    fn series_is_contiguous(actions in vec(action(), 0..12), g in granularity()) {
        let catalog = builtin_catalog().unwrap();
        let events = build_events(catalog, &actions, g).unwrap();
        let curve = run(&events, g).unwrap();

        prop_assert_eq!(curve.samples.len(), end_of_day(g).unwrap());
        for (i, sample) in curve.samples.iter().enumerate() {
            prop_assert_eq!(sample.index, i);
        }
        prop_assert_eq!(curve.markers.len(), events.len());
    }

    /// Lowering the threshold never lowers the glycation count.
    #[test]
    fn glycation_is_monotone(actions in vec(action(), 0..12), low in 0.0f64..400.0, delta in 0.0f64..200.0) {
        let catalog = builtin_catalog().unwrap();
        let settings = SimulationSettings { granularity_minutes: 10, ..SimulationSettings::default() };
        let report = simulate_day(catalog, &actions, &settings).unwrap();

        let high = low + delta;
        prop_assert!(glycation(&report.samples, 10, low) >= glycation(&report.samples, 10, high));
    }
}

#[test]
fn reference_clock_values() {
    assert_eq!(time_to_index("00:00", 30).unwrap(), 0);
    assert_eq!(time_to_index("02:45", 30).unwrap(), 5);
    assert_eq!(time_to_index("24:00", 30).unwrap(), 48);
    assert_eq!(index_to_time(5, 30), "02:30");
    assert_eq!(index_to_time(48, 30), "24:00");
}
