//! Per-person availability parsing.
//!
//! Converts a raw day-sheet cell into one of three closed outcomes:
//! unavailable (`x`), available within a [`TimeWindow`], or malformed.
//! Malformed cells are never guessed into either of the other two states;
//! the caller decides how to treat them (the resolver treats them as absent).

use serde::Serialize;

use crate::error::CellError;
use crate::window::TimeWindow;

/// Which part of the roster a person belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Main,
    Sub,
    Coach,
}

/// Outcome of parsing one availability cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Availability {
    /// Explicitly marked unavailable (`x` / `X`).
    Unavailable,
    /// Available within the given window.
    Available { window: TimeWindow },
    /// The cell could not be parsed.
    Malformed { error: CellError },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }

    pub fn window(&self) -> Option<&TimeWindow> {
        match self {
            Availability::Available { window } => Some(window),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CellError> {
        match self {
            Availability::Malformed { error } => Some(error),
            _ => None,
        }
    }
}

/// Parse a raw cell value.
///
/// - `x` or `X` (after trimming) is unavailable.
/// - `HH:MM-HH:MM` with `start < end` is available.
/// - Everything else, including an inverted window, is malformed.
pub fn parse_cell(raw: &str) -> Availability {
    let token = raw.trim();
    if token.is_empty() {
        return Availability::Malformed {
            error: CellError::Empty,
        };
    }
    if token.eq_ignore_ascii_case("x") {
        return Availability::Unavailable;
    }
    match TimeWindow::parse(token) {
        Ok(window) => Availability::Available { window },
        Err(error) => Availability::Malformed { error },
    }
}

/// One person's parsed availability for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonAvailability {
    pub name: String,
    pub role: Role,
    pub availability: Availability,
    /// The cell exactly as supplied, for data-quality reporting.
    pub raw_value: String,
}

impl PersonAvailability {
    pub fn parse(name: &str, role: Role, raw: &str) -> Self {
        let availability = parse_cell(raw);
        match &availability {
            Availability::Malformed { error } => {
                log::warn!("{:?} {} has malformed availability {:?}: {}", role, name, raw, error);
            }
            other => {
                log::debug!("{:?} {} parsed as {:?}", role, name, other);
            }
        }
        Self {
            name: name.to_string(),
            role,
            availability,
            raw_value: raw.to_string(),
        }
    }

    /// Available with a valid window. Malformed cells count as unavailable.
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    pub fn window(&self) -> Option<&TimeWindow> {
        self.availability.window()
    }

    pub fn is_malformed(&self) -> bool {
        self.availability.error().is_some()
    }
}
