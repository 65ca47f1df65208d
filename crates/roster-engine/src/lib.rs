//! # roster-engine
//!
//! Deterministic roster availability resolution for team practice scheduling.
//!
//! Given five main players, an ordered list of substitutes, and a coach, each
//! with a raw availability cell for the day (`x` or `HH:MM-HH:MM`), the engine
//! decides whether the team can practice, which subs are needed, and the
//! window in which everyone taking part is free.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roster_engine::{resolve_day, DayInput, Roster, ScheduleStatus};
//!
//! let roster = Roster::new(
//!     vec!["Ana".into(), "Ben".into(), "Cy".into(), "Dee".into(), "Eli".into()],
//!     vec!["Sam".into()],
//!     "Coach",
//! );
//! let day = DayInput {
//!     date: NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
//!     mains: vec!["18:00-22:00".into(), "x".into(), "18:00-21:00".into(),
//!                 "17:00-23:00".into(), "18:30-22:00".into()],
//!     subs: vec!["19:00-23:00".into()],
//!     coach: "18:00-22:00".into(),
//!     reason: None,
//!     focus: Some("Retakes".into()),
//! };
//!
//! let result = resolve_day(&roster, &day).unwrap();
//! assert_eq!(result.status, ScheduleStatus::WithSubs);
//! assert_eq!(result.common_time_range.unwrap().to_string(), "19:00-21:00");
//! assert_eq!(result.message, "Playing with subs (Sam for Ben) 19:00-21:00");
//! ```
//!
//! ## Modules
//!
//! - [`availability`] — raw cell → unavailable / available window / malformed
//! - [`window`] — time window validation and intersection
//! - [`resolver`] — priority-ordered day decision and sub selection
//! - [`schedule`] — day row in, formatted `ScheduleResult` out
//! - [`roster`] — roster composition and validation
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod resolver;
pub mod roster;
pub mod schedule;
pub mod window;

pub use availability::{parse_cell, Availability, PersonAvailability, Role};
pub use error::{CellError, RosterError};
pub use resolver::{resolve, Decision, Resolution, ScheduleStatus, Shortfall, Substitution};
pub use roster::{Roster, MAIN_ROSTER_SIZE};
pub use schedule::{resolve_day, resolve_days, CellWarning, DayInput, ScheduleResult};
pub use window::{intersect, TimeWindow};
