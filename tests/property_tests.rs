//! Property-based tests for the intersection state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated operation scripts.

use crosslight::builder::standard_intersection;
use crosslight::{Color, CycleOutcome, EventJournal, Intersection, Mode, PhasePair};
use proptest::prelude::*;

/// One externally drivable operation.
#[derive(Clone, Debug)]
enum Op {
    Cycle,
    Emergency(bool),
}

fn apply(intersection: &mut Intersection, op: &Op) {
    match op {
        Op::Cycle => {
            intersection.cycle();
        }
        Op::Emergency(active) => {
            intersection.set_emergency_mode(*active);
        }
    }
}

prop_compose! {
    fn arbitrary_color()(variant in 0..3u8) -> Color {
        match variant {
            0 => Color::Red,
            1 => Color::Yellow,
            _ => Color::Green,
        }
    }
}

prop_compose! {
    fn arbitrary_op()(variant in 0..3u8) -> Op {
        match variant {
            0 => Op::Cycle,
            1 => Op::Emergency(true),
            _ => Op::Emergency(false),
        }
    }
}

proptest! {
    #[test]
    fn reachable_states_stay_inside_the_table(
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut intersection = standard_intersection();

        for op in &ops {
            apply(&mut intersection, op);
            let status = intersection.status().unwrap();
            match status.mode {
                Mode::Normal => prop_assert!(status.phase().is_canonical()),
                Mode::Emergency => prop_assert_eq!(status.phase(), PhasePair::ALL_RED),
            }
        }
    }

    #[test]
    fn identical_scripts_produce_identical_sessions(
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut first = standard_intersection();
        let mut second = standard_intersection();

        for op in &ops {
            apply(&mut first, op);
            apply(&mut second, op);
        }

        prop_assert_eq!(first.status().unwrap(), second.status().unwrap());

        let first_events: Vec<_> = first.journal().records().iter().map(|r| r.event).collect();
        let second_events: Vec<_> = second.journal().records().iter().map(|r| r.event).collect();
        prop_assert_eq!(first_events, second_events);
    }

    #[test]
    fn four_more_cycles_land_on_the_same_phase(lead in 0..8usize) {
        let mut intersection = standard_intersection();
        for _ in 0..lead {
            intersection.cycle();
        }
        let before = intersection.status().unwrap().phase();

        for _ in 0..4 {
            intersection.cycle();
        }

        prop_assert_eq!(intersection.status().unwrap().phase(), before);
    }

    #[test]
    fn emergency_dominates_any_number_of_cycles(cycles in 0..20usize) {
        let mut intersection = standard_intersection();
        intersection.set_emergency_mode(true);

        for _ in 0..cycles {
            prop_assert_eq!(intersection.cycle(), CycleOutcome::Blocked);
        }

        prop_assert_eq!(intersection.status().unwrap().phase(), PhasePair::ALL_RED);
    }

    #[test]
    fn repeated_activation_matches_single_activation(repeats in 1..5usize) {
        let mut once = standard_intersection();
        once.set_emergency_mode(true);

        let mut many = standard_intersection();
        for _ in 0..repeats {
            many.set_emergency_mode(true);
        }

        prop_assert_eq!(once.status().unwrap(), many.status().unwrap());
    }

    #[test]
    fn any_corrupt_pair_recovers_to_the_cycle_start(
        ns in arbitrary_color(),
        ew in arbitrary_color(),
    ) {
        let found = PhasePair::new(ns, ew);
        prop_assume!(!found.is_canonical());

        let mut intersection = standard_intersection();
        let mut head = intersection.take_north_south().unwrap();
        head.set_color(ns);
        intersection.set_north_south(head);
        let mut head = intersection.take_east_west().unwrap();
        head.set_color(ew);
        intersection.set_east_west(head);

        prop_assert_eq!(intersection.cycle(), CycleOutcome::Recovered { found });
        prop_assert_eq!(intersection.status().unwrap().phase(), PhasePair::START);
    }

    #[test]
    fn color_tokens_parse_case_insensitively(
        color in arbitrary_color(),
        upper_mask in 0..64u8,
    ) {
        let token: String = color
            .name()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if upper_mask >> (i % 6) & 1 == 1 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();

        prop_assert_eq!(token.parse::<Color>().unwrap(), color);
    }

    #[test]
    fn journal_roundtrip_serialization(
        ops in prop::collection::vec(arbitrary_op(), 0..10)
    ) {
        let mut intersection = standard_intersection();
        for op in &ops {
            apply(&mut intersection, op);
        }

        let json = serde_json::to_string(intersection.journal()).unwrap();
        let deserialized: EventJournal = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized.len(), intersection.journal().len());
    }
}
