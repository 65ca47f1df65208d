//! Error types for roster-engine operations.

use chrono::NaiveTime;
use serde::Serialize;
use thiserror::Error;

/// Errors that abort resolution of a day (or reject a roster outright).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The day row does not carry exactly one cell per main-roster slot.
    #[error("Incomplete roster: expected {expected} main-player cells, got {actual}")]
    IncompleteRoster { expected: usize, actual: usize },

    /// The day row's sub cells do not line up with the configured sub list.
    #[error("Sub slot mismatch: roster declares {expected} subs, day row has {actual} cells")]
    SubSlotMismatch { expected: usize, actual: usize },

    /// A window was constructed with `start >= end`.
    #[error("Invalid time window: start {start} must be before end {end}")]
    InvalidWindow { start: NaiveTime, end: NaiveTime },

    /// The roster configuration itself is unusable.
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),
}

/// Why a single availability cell could not be parsed.
///
/// These never abort a day; the person is treated as unavailable and the
/// error is echoed back as a data-quality warning.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellError {
    #[error("cell is empty")]
    Empty,

    #[error("unrecognized availability '{token}' (expected 'x' or HH:MM-HH:MM)")]
    UnrecognizedFormat { token: String },

    #[error("'{token}' is not a valid clock time")]
    InvalidTime { token: String },

    #[error("window {start}-{end} is empty or inverted")]
    EmptyWindow { start: String, end: String },
}

/// Convenience alias used throughout roster-engine.
pub type Result<T> = std::result::Result<T, RosterError>;
