//! Whole-day roster resolution.
//!
//! Rules are evaluated in a fixed priority order and the first match wins:
//!
//! 1. [`Decision::OffDay`] — the day is flagged as a rest day.
//! 2. [`Decision::FullRoster`] — every main and the coach are available and
//!    share a common window.
//! 3. [`Decision::WithSubs`] — every absent main is covered by a distinct
//!    available sub (declared order), the coach is available, and everyone
//!    taking part shares a common window.
//! 4. [`Decision::NotEnough`] — anything else, with the reasons attached.
//!
//! Malformed cells are treated exactly like unavailable ones for every role.

use serde::Serialize;

use crate::availability::PersonAvailability;
use crate::error::{Result, RosterError};
use crate::roster::MAIN_ROSTER_SIZE;
use crate::window::{intersect, TimeWindow};

/// The day's overall playability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    OffDay,
    FullRoster,
    WithSubs,
    NotEnough,
}

/// An activated sub and the main player they stand in for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub sub: String,
    pub replaces: String,
}

/// A reason the day could not be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shortfall {
    /// The coach is unavailable or their cell is malformed.
    CoachUnavailable { coach: String },
    /// Mains left without a sub once every available sub was assigned.
    MissingCover { uncovered: Vec<String> },
    /// Everyone needed is available, but their windows do not overlap.
    /// Names the participant starting latest and the one ending earliest.
    NoCommonWindow {
        latest_start: String,
        earliest_end: String,
    },
}

/// The rule that matched, carrying only the data that rule produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    OffDay,
    FullRoster {
        window: TimeWindow,
    },
    WithSubs {
        window: TimeWindow,
        substitutions: Vec<Substitution>,
    },
    NotEnough {
        shortfalls: Vec<Shortfall>,
    },
}

impl Decision {
    pub fn status(&self) -> ScheduleStatus {
        match self {
            Decision::OffDay => ScheduleStatus::OffDay,
            Decision::FullRoster { .. } => ScheduleStatus::FullRoster,
            Decision::WithSubs { .. } => ScheduleStatus::WithSubs,
            Decision::NotEnough { .. } => ScheduleStatus::NotEnough,
        }
    }

    /// The common window, present only for playable days.
    pub fn window(&self) -> Option<TimeWindow> {
        match self {
            Decision::FullRoster { window } | Decision::WithSubs { window, .. } => Some(*window),
            _ => None,
        }
    }

    pub fn substitutions(&self) -> &[Substitution] {
        match self {
            Decision::WithSubs { substitutions, .. } => substitutions.as_slice(),
            _ => &[],
        }
    }

    pub fn shortfalls(&self) -> &[Shortfall] {
        match self {
            Decision::NotEnough { shortfalls } => shortfalls.as_slice(),
            _ => &[],
        }
    }
}

/// Resolver output: the decision plus head counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub decision: Decision,
    pub available_mains: usize,
    pub available_subs: usize,
    /// Mains that are unavailable or malformed, in roster order.
    pub unavailable_mains: Vec<String>,
}

/// Resolve one day from already-parsed availability records.
///
/// `subs` must be in declared roster order; that order decides which sub
/// covers which gap.
///
/// # Errors
/// Returns `RosterError::IncompleteRoster` unless exactly
/// [`MAIN_ROSTER_SIZE`] main records are given. "No overlap" and "not enough
/// people" are [`Decision::NotEnough`], never errors.
pub fn resolve(
    mains: &[PersonAvailability],
    subs: &[PersonAvailability],
    coach: &PersonAvailability,
    off_day: bool,
) -> Result<Resolution> {
    if mains.len() != MAIN_ROSTER_SIZE {
        return Err(RosterError::IncompleteRoster {
            expected: MAIN_ROSTER_SIZE,
            actual: mains.len(),
        });
    }

    let unavailable_mains: Vec<String> = mains
        .iter()
        .filter(|m| !m.is_available())
        .map(|m| m.name.clone())
        .collect();
    let available_mains = mains.len() - unavailable_mains.len();
    let available_subs = subs.iter().filter(|s| s.is_available()).count();

    let decision = if off_day {
        Decision::OffDay
    } else {
        decide(mains, subs, coach)
    };

    log::debug!(
        "resolved {:?}: {} mains available, {} subs available, window {:?}",
        decision.status(),
        available_mains,
        available_subs,
        decision.window().map(|w| w.to_string())
    );

    Ok(Resolution {
        decision,
        available_mains,
        available_subs,
        unavailable_mains,
    })
}

fn decide(
    mains: &[PersonAvailability],
    subs: &[PersonAvailability],
    coach: &PersonAvailability,
) -> Decision {
    let gaps: Vec<&PersonAvailability> = mains.iter().filter(|m| !m.is_available()).collect();

    // First available sub fills the first open gap; zip stops at whichever runs out.
    let covered: Vec<(&PersonAvailability, &PersonAvailability)> = gaps
        .iter()
        .copied()
        .zip(subs.iter().filter(|s| s.is_available()))
        .collect();

    let mut shortfalls = Vec::new();
    if !coach.is_available() {
        shortfalls.push(Shortfall::CoachUnavailable {
            coach: coach.name.clone(),
        });
    }
    if covered.len() < gaps.len() {
        shortfalls.push(Shortfall::MissingCover {
            uncovered: gaps[covered.len()..]
                .iter()
                .map(|m| m.name.clone())
                .collect(),
        });
    }
    if !shortfalls.is_empty() {
        return Decision::NotEnough { shortfalls };
    }

    let participants: Vec<&PersonAvailability> = mains
        .iter()
        .filter(|m| m.is_available())
        .chain(covered.iter().map(|&(_, sub)| sub))
        .chain(std::iter::once(coach))
        .collect();

    let common = intersect(
        participants
            .iter()
            .copied()
            .filter_map(PersonAvailability::window),
    );

    match common {
        Some(window) if covered.is_empty() => Decision::FullRoster { window },
        Some(window) => Decision::WithSubs {
            window,
            substitutions: covered
                .iter()
                .map(|(main, sub)| Substitution {
                    sub: sub.name.clone(),
                    replaces: main.name.clone(),
                })
                .collect(),
        },
        None => Decision::NotEnough {
            shortfalls: vec![no_common_window(&participants)],
        },
    }
}

/// Name the pair that rules out any overlap. Ties go to the earlier participant.
fn no_common_window(participants: &[&PersonAvailability]) -> Shortfall {
    let windowed = || {
        participants
            .iter()
            .filter_map(|p| p.window().map(|w| (p.name.as_str(), *w)))
    };

    let latest_start = windowed()
        .reduce(|best, cur| if cur.1.start() > best.1.start() { cur } else { best })
        .map(|(name, _)| name.to_string())
        .unwrap_or_default();
    let earliest_end = windowed()
        .reduce(|best, cur| if cur.1.end() < best.1.end() { cur } else { best })
        .map(|(name, _)| name.to_string())
        .unwrap_or_default();

    Shortfall::NoCommonWindow {
        latest_start,
        earliest_end,
    }
}
