//! Roster composition supplied by the host application.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Number of main-roster slots every day row must fill.
pub const MAIN_ROSTER_SIZE: usize = 5;

/// Who plays which role. Sub order is the tie-break order for substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub mains: Vec<String>,
    #[serde(default)]
    pub subs: Vec<String>,
    pub coach: String,
}

impl Roster {
    pub fn new(mains: Vec<String>, subs: Vec<String>, coach: impl Into<String>) -> Self {
        Self {
            mains,
            subs,
            coach: coach.into(),
        }
    }

    /// Check that the roster has exactly [`MAIN_ROSTER_SIZE`] mains and that
    /// every name is non-blank and unique across the whole roster.
    pub fn validate(&self) -> Result<()> {
        if self.mains.len() != MAIN_ROSTER_SIZE {
            return Err(RosterError::InvalidRoster(format!(
                "expected {} mains, found {}",
                MAIN_ROSTER_SIZE,
                self.mains.len()
            )));
        }

        let mut seen = HashSet::new();
        for name in self.names() {
            if name.trim().is_empty() {
                return Err(RosterError::InvalidRoster("blank player name".to_string()));
            }
            if !seen.insert(name) {
                return Err(RosterError::InvalidRoster(format!(
                    "'{}' appears more than once",
                    name
                )));
            }
        }
        Ok(())
    }

    /// All names in declared order: mains, subs, then the coach.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.mains
            .iter()
            .chain(self.subs.iter())
            .map(String::as_str)
            .chain(std::iter::once(self.coach.as_str()))
    }
}
