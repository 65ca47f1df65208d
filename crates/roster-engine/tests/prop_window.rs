//! Property-based tests for cell parsing and window intersection.
//!
//! These check invariants that should hold for any well-formed window, not
//! just the specific examples in `window_tests.rs` and `parser_tests.rs`.

use proptest::prelude::*;
use roster_engine::availability::{parse_cell, Availability};
use roster_engine::error::CellError;
use roster_engine::window::{intersect, TimeWindow};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Minute of day, 00:00 through 23:59.
fn arb_minute() -> impl Strategy<Value = u32> {
    0u32..(24 * 60)
}

/// A valid (start < end) window.
fn arb_window() -> impl Strategy<Value = TimeWindow> {
    (arb_minute(), arb_minute())
        .prop_filter("start and end must differ", |(a, b)| a != b)
        .prop_map(|(a, b)| {
            let (lo, hi) = (a.min(b), a.max(b));
            TimeWindow::from_hm((lo / 60, lo % 60), (hi / 60, hi % 60)).unwrap()
        })
}

fn token(start: u32, end: u32) -> String {
    format!(
        "{:02}:{:02}-{:02}:{:02}",
        start / 60,
        start % 60,
        end / 60,
        end % 60
    )
}

// ---------------------------------------------------------------------------
// Parser properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn valid_tokens_parse_to_exact_window(a in arb_minute(), b in arb_minute()) {
        prop_assume!(a < b);
        let parsed = parse_cell(&token(a, b));
        let expected = TimeWindow::from_hm((a / 60, a % 60), (b / 60, b % 60)).unwrap();
        prop_assert_eq!(parsed, Availability::Available { window: expected });
    }

    #[test]
    fn inverted_or_empty_tokens_are_malformed(a in arb_minute(), b in arb_minute()) {
        prop_assume!(a >= b);
        let parsed = parse_cell(&token(a, b));
        let is_empty_window = matches!(
            parsed,
            Availability::Malformed { error: CellError::EmptyWindow { .. } }
        );
        prop_assert!(is_empty_window);
    }

    #[test]
    fn parse_never_panics_on_arbitrary_text(raw in ".{0,24}") {
        let _ = parse_cell(&raw);
    }
}

// ---------------------------------------------------------------------------
// Intersection properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn intersect_is_commutative(a in arb_window(), b in arb_window(), c in arb_window()) {
        let abc = intersect(&[a, b, c]);
        prop_assert_eq!(abc, intersect(&[c, b, a]));
        prop_assert_eq!(abc, intersect(&[b, a, c]));
        prop_assert_eq!(abc, intersect(&[a, c, b]));
    }

    #[test]
    fn intersect_is_associative(a in arb_window(), b in arb_window(), c in arb_window()) {
        let flat = intersect(&[a, b, c]);
        let left = a.intersection(&b).and_then(|ab| ab.intersection(&c));
        let right = b.intersection(&c).and_then(|bc| a.intersection(&bc));
        prop_assert_eq!(flat, left);
        prop_assert_eq!(flat, right);
    }

    #[test]
    fn intersection_is_contained_in_every_input(windows in prop::collection::vec(arb_window(), 1..8)) {
        if let Some(common) = intersect(&windows) {
            for w in &windows {
                prop_assert!(w.contains(&common));
            }
        }
    }

    #[test]
    fn single_window_intersects_to_itself(a in arb_window()) {
        prop_assert_eq!(intersect(&[a]), Some(a));
    }
}
