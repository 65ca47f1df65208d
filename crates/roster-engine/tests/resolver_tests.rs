//! Tests for the priority-ordered day decision.

use roster_engine::availability::{PersonAvailability, Role};
use roster_engine::error::RosterError;
use roster_engine::resolver::{resolve, Decision, ScheduleStatus, Shortfall, Substitution};
use roster_engine::window::TimeWindow;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn mains(cells: [&str; 5]) -> Vec<PersonAvailability> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| PersonAvailability::parse(&format!("Main{}", i + 1), Role::Main, cell))
        .collect()
}

fn subs(cells: &[&str]) -> Vec<PersonAvailability> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| PersonAvailability::parse(&format!("Sub{}", i + 1), Role::Sub, cell))
        .collect()
}

fn coach(cell: &str) -> PersonAvailability {
    PersonAvailability::parse("Coach", Role::Coach, cell)
}

fn w(s: &str) -> TimeWindow {
    TimeWindow::parse(s).unwrap()
}

fn swap(sub: &str, replaces: &str) -> Substitution {
    Substitution {
        sub: sub.to_string(),
        replaces: replaces.to_string(),
    }
}

const ALL: &str = "09:00-12:00";

// ── Off day ─────────────────────────────────────────────────────────────────

#[test]
fn off_day_wins_over_full_availability() {
    let r = resolve(&mains([ALL; 5]), &[], &coach(ALL), true).unwrap();
    assert_eq!(r.decision, Decision::OffDay);
    assert_eq!(r.decision.status(), ScheduleStatus::OffDay);
    assert_eq!(r.decision.window(), None);
}

#[test]
fn off_day_wins_even_when_nobody_is_available() {
    let r = resolve(&mains(["x"; 5]), &subs(&["x"]), &coach("x"), true).unwrap();
    assert_eq!(r.decision, Decision::OffDay);
    assert!(r.decision.substitutions().is_empty());
}

// ── Full roster ─────────────────────────────────────────────────────────────

#[test]
fn everyone_available_same_window_is_full_roster() {
    let r = resolve(&mains([ALL; 5]), &[], &coach(ALL), false).unwrap();
    assert_eq!(r.decision, Decision::FullRoster { window: w(ALL) });
    assert_eq!(r.available_mains, 5);
    assert!(r.unavailable_mains.is_empty());
}

#[test]
fn full_roster_window_includes_coach() {
    let r = resolve(
        &mains([
            "18:00-23:00",
            "18:00-23:00",
            "17:00-22:00",
            "18:30-23:30",
            "16:00-23:00",
        ]),
        &[],
        &coach("19:00-21:30"),
        false,
    )
    .unwrap();
    assert_eq!(r.decision.window(), Some(w("19:00-21:30")));
}

#[test]
fn full_roster_ignores_available_subs() {
    let r = resolve(&mains([ALL; 5]), &subs(&[ALL, ALL]), &coach(ALL), false).unwrap();
    assert_eq!(r.decision.status(), ScheduleStatus::FullRoster);
    assert!(r.decision.substitutions().is_empty());
    assert_eq!(r.available_subs, 2);
}

#[test]
fn everyone_available_but_disjoint_is_not_enough() {
    let r = resolve(
        &mains(["08:00-09:00", "10:00-11:00", ALL, ALL, ALL]),
        &[],
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(r.decision.status(), ScheduleStatus::NotEnough);
    assert_eq!(r.decision.window(), None);
    assert_eq!(
        r.decision.shortfalls(),
        &[Shortfall::NoCommonWindow {
            latest_start: "Main2".to_string(),
            earliest_end: "Main1".to_string(),
        }]
    );
}

#[test]
fn all_mains_available_but_coach_absent_is_not_enough() {
    let r = resolve(&mains([ALL; 5]), &subs(&[ALL]), &coach("x"), false).unwrap();
    assert_eq!(
        r.decision,
        Decision::NotEnough {
            shortfalls: vec![Shortfall::CoachUnavailable {
                coach: "Coach".to_string()
            }]
        }
    );
}

// ── With subs ───────────────────────────────────────────────────────────────

#[test]
fn one_absent_main_covered_by_overlapping_sub() {
    let r = resolve(
        &mains([ALL, "x", ALL, ALL, ALL]),
        &subs(&["10:00-13:00"]),
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(
        r.decision,
        Decision::WithSubs {
            window: w("10:00-12:00"),
            substitutions: vec![swap("Sub1", "Main2")],
        }
    );
    assert_eq!(r.unavailable_mains, vec!["Main2"]);
    assert_eq!(r.available_mains, 4);
}

#[test]
fn subs_fill_gaps_in_declared_order() {
    let r = resolve(
        &mains(["x", ALL, "x", ALL, ALL]),
        &subs(&["x", ALL, ALL, ALL]),
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(
        r.decision.substitutions(),
        &[swap("Sub2", "Main1"), swap("Sub3", "Main3")]
    );
    assert_eq!(r.available_subs, 3);
}

#[test]
fn first_available_sub_is_chosen_even_if_later_sub_has_wider_window() {
    let r = resolve(
        &mains([ALL, ALL, ALL, ALL, "x"]),
        &subs(&["11:00-12:00", "08:00-13:00"]),
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(
        r.decision,
        Decision::WithSubs {
            window: w("11:00-12:00"),
            substitutions: vec![swap("Sub1", "Main5")],
        }
    );
}

#[test]
fn malformed_main_is_replaced_like_an_absent_one() {
    let r = resolve(
        &mains([ALL, ALL, "later", ALL, ALL]),
        &subs(&[ALL]),
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(r.decision.status(), ScheduleStatus::WithSubs);
    assert_eq!(r.unavailable_mains, vec!["Main3"]);
}

#[test]
fn covered_but_no_shared_window_is_not_enough() {
    let r = resolve(
        &mains([ALL, "x", ALL, ALL, ALL]),
        &subs(&["14:00-16:00"]),
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(r.decision.status(), ScheduleStatus::NotEnough);
    assert_eq!(
        r.decision.shortfalls(),
        &[Shortfall::NoCommonWindow {
            latest_start: "Sub1".to_string(),
            earliest_end: "Main1".to_string(),
        }]
    );
}

// ── Not enough ──────────────────────────────────────────────────────────────

#[test]
fn two_absent_mains_one_sub_is_not_enough() {
    let r = resolve(
        &mains(["x", ALL, "x", ALL, ALL]),
        &subs(&[ALL, "x"]),
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(r.unavailable_mains, vec!["Main1", "Main3"]);
    assert_eq!(r.available_subs, 1);
    assert_eq!(
        r.decision,
        Decision::NotEnough {
            shortfalls: vec![Shortfall::MissingCover {
                uncovered: vec!["Main3".to_string()]
            }]
        }
    );
    assert!(r.decision.substitutions().is_empty());
}

#[test]
fn malformed_sub_does_not_count_as_cover() {
    let r = resolve(
        &mains([ALL, "x", ALL, ALL, ALL]),
        &subs(&["whenever"]),
        &coach(ALL),
        false,
    )
    .unwrap();
    assert_eq!(r.available_subs, 0);
    assert_eq!(r.decision.status(), ScheduleStatus::NotEnough);
}

#[test]
fn coach_unavailable_blocks_even_with_full_cover() {
    let r = resolve(
        &mains([ALL, "x", ALL, ALL, ALL]),
        &subs(&[ALL]),
        &coach("X"),
        false,
    )
    .unwrap();
    assert_eq!(
        r.decision.shortfalls(),
        &[Shortfall::CoachUnavailable {
            coach: "Coach".to_string()
        }]
    );
}

#[test]
fn malformed_coach_is_treated_as_unavailable() {
    let r = resolve(&mains([ALL; 5]), &[], &coach("21:00-18:00"), false).unwrap();
    assert_eq!(r.decision.status(), ScheduleStatus::NotEnough);
    assert!(matches!(
        r.decision.shortfalls(),
        [Shortfall::CoachUnavailable { .. }]
    ));
}

#[test]
fn coach_and_cover_shortfalls_are_both_reported() {
    let r = resolve(&mains(["x", "x", ALL, ALL, ALL]), &[], &coach("x"), false).unwrap();
    assert_eq!(
        r.decision.shortfalls(),
        &[
            Shortfall::CoachUnavailable {
                coach: "Coach".to_string()
            },
            Shortfall::MissingCover {
                uncovered: vec!["Main1".to_string(), "Main2".to_string()]
            },
        ]
    );
}

// ── Structural errors and determinism ───────────────────────────────────────

#[test]
fn four_mains_is_a_structural_error() {
    let four: Vec<PersonAvailability> = mains([ALL; 5]).into_iter().take(4).collect();
    let err = resolve(&four, &[], &coach(ALL), false).unwrap_err();
    assert_eq!(
        err,
        RosterError::IncompleteRoster {
            expected: 5,
            actual: 4
        }
    );
}

#[test]
fn six_mains_is_a_structural_error() {
    let mut six = mains([ALL; 5]);
    six.push(PersonAvailability::parse("Main6", Role::Main, ALL));
    assert!(matches!(
        resolve(&six, &[], &coach(ALL), false),
        Err(RosterError::IncompleteRoster { actual: 6, .. })
    ));
}

#[test]
fn repeated_resolution_is_identical() {
    let m = mains(["x", ALL, "10:00-11:30", "x", ALL]);
    let s = subs(&["x", "09:30-12:00", "malformed", ALL]);
    let c = coach("09:00-11:00");
    let first = resolve(&m, &s, &c, false).unwrap();
    let second = resolve(&m, &s, &c, false).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.decision.window(), Some(w("10:00-11:00")));
}
