//! Day schedule assembly: raw day row in, [`ScheduleResult`] out.
//!
//! This module carries no decision logic of its own. It checks the shape of
//! the day row, parses every cell, hands the records to the
//! [`resolver`](crate::resolver), and formats the outcome.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::{PersonAvailability, Role};
use crate::error::{CellError, Result, RosterError};
use crate::resolver::{self, Decision, Resolution, ScheduleStatus, Shortfall, Substitution};
use crate::roster::{Roster, MAIN_ROSTER_SIZE};
use crate::window::TimeWindow;

const DATE_LABEL_FORMAT: &str = "%a, %b %-d";

/// One unparsed day row as stored by the host application.
///
/// Cells line up positionally with the [`Roster`]: `mains[i]` belongs to
/// `roster.mains[i]`, `subs[i]` to `roster.subs[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInput {
    pub date: NaiveDate,
    pub mains: Vec<String>,
    #[serde(default)]
    pub subs: Vec<String>,
    pub coach: String,
    /// Any non-blank reason marks the day as an off day.
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
}

impl DayInput {
    pub fn is_off_day(&self) -> bool {
        non_blank(self.reason.as_deref()).is_some()
    }
}

/// A malformed cell, echoed back so the caller can flag the data-entry error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellWarning {
    pub name: String,
    pub role: Role,
    pub raw_value: String,
    pub error: CellError,
}

/// Final, immutable outcome for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    pub date: NaiveDate,
    pub date_label: String,
    pub status: ScheduleStatus,
    pub common_time_range: Option<TimeWindow>,
    pub available_mains: usize,
    pub available_subs: usize,
    pub unavailable_mains: Vec<String>,
    pub required_subs: Vec<Substitution>,
    pub shortfalls: Vec<Shortfall>,
    pub reason: Option<String>,
    pub focus: Option<String>,
    pub message: String,
    pub warnings: Vec<CellWarning>,
}

/// Resolve a single day against the roster.
///
/// # Errors
/// - `RosterError::InvalidRoster` if the roster fails [`Roster::validate`].
/// - `RosterError::IncompleteRoster` if the day does not have exactly
///   [`MAIN_ROSTER_SIZE`] main cells.
/// - `RosterError::SubSlotMismatch` if the day's sub cells do not match the
///   roster's sub list.
pub fn resolve_day(roster: &Roster, day: &DayInput) -> Result<ScheduleResult> {
    roster.validate()?;
    resolve_validated(roster, day)
}

/// Resolve consecutive days, stopping at the first structural error.
///
/// The roster is validated once for the whole run, so an invalid roster is
/// rejected even when `days` is empty.
pub fn resolve_days(roster: &Roster, days: &[DayInput]) -> Result<Vec<ScheduleResult>> {
    roster.validate()?;
    days.iter().map(|day| resolve_validated(roster, day)).collect()
}

fn resolve_validated(roster: &Roster, day: &DayInput) -> Result<ScheduleResult> {
    if day.mains.len() != MAIN_ROSTER_SIZE {
        return Err(RosterError::IncompleteRoster {
            expected: MAIN_ROSTER_SIZE,
            actual: day.mains.len(),
        });
    }
    if day.subs.len() != roster.subs.len() {
        return Err(RosterError::SubSlotMismatch {
            expected: roster.subs.len(),
            actual: day.subs.len(),
        });
    }

    let mains = parse_slots(&roster.mains, &day.mains, Role::Main);
    let subs = parse_slots(&roster.subs, &day.subs, Role::Sub);
    let coach = PersonAvailability::parse(&roster.coach, Role::Coach, &day.coach);

    let resolution = resolver::resolve(&mains, &subs, &coach, day.is_off_day())?;

    let warnings = mains
        .iter()
        .chain(subs.iter())
        .chain(std::iter::once(&coach))
        .filter_map(|p| {
            p.availability.error().map(|error| CellWarning {
                name: p.name.clone(),
                role: p.role,
                raw_value: p.raw_value.clone(),
                error: error.clone(),
            })
        })
        .collect();

    Ok(assemble(day, resolution, warnings))
}

fn parse_slots(names: &[String], cells: &[String], role: Role) -> Vec<PersonAvailability> {
    names
        .iter()
        .zip(cells)
        .map(|(name, cell)| PersonAvailability::parse(name, role, cell))
        .collect()
}

fn assemble(day: &DayInput, resolution: Resolution, warnings: Vec<CellWarning>) -> ScheduleResult {
    let reason = non_blank(day.reason.as_deref()).map(str::to_string);
    let focus = non_blank(day.focus.as_deref()).map(str::to_string);
    let message = status_message(&resolution.decision, reason.as_deref());

    let Resolution {
        decision,
        available_mains,
        available_subs,
        unavailable_mains,
    } = resolution;

    ScheduleResult {
        date: day.date,
        date_label: day.date.format(DATE_LABEL_FORMAT).to_string(),
        status: decision.status(),
        common_time_range: decision.window(),
        available_mains,
        available_subs,
        unavailable_mains,
        required_subs: decision.substitutions().to_vec(),
        shortfalls: decision.shortfalls().to_vec(),
        reason,
        focus,
        message,
        warnings,
    }
}

/// Human-readable summary of a decision.
pub fn status_message(decision: &Decision, reason: Option<&str>) -> String {
    match decision {
        Decision::OffDay => match reason {
            Some(reason) => format!("Off day: {}", reason),
            None => "Off day".to_string(),
        },
        Decision::FullRoster { window } => {
            format!("Full roster available {}", window)
        }
        Decision::WithSubs {
            window,
            substitutions,
        } => {
            let swaps: Vec<String> = substitutions
                .iter()
                .map(|s| format!("{} for {}", s.sub, s.replaces))
                .collect();
            format!("Playing with subs ({}) {}", swaps.join(", "), window)
        }
        Decision::NotEnough { shortfalls } => {
            let parts: Vec<String> = shortfalls.iter().map(describe_shortfall).collect();
            format!("Not enough players: {}", parts.join("; "))
        }
    }
}

fn describe_shortfall(shortfall: &Shortfall) -> String {
    match shortfall {
        Shortfall::CoachUnavailable { coach } => format!("coach {} unavailable", coach),
        Shortfall::MissingCover { uncovered } => {
            format!("no sub available for {}", uncovered.join(", "))
        }
        Shortfall::NoCommonWindow {
            latest_start,
            earliest_end,
        } => format!(
            "no common window ({} starts after {} ends)",
            latest_start, earliest_end
        ),
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
