//! Time window algebra over same-day wall-clock times.
//!
//! A [`TimeWindow`] is a half-open `[start, end)` span with minute resolution.
//! Zero-length and inverted windows are not representable: every constructor
//! enforces `start < end`.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{CellError, Result, RosterError};

const CLOCK_FORMAT: &str = "%H:%M";

/// A non-empty wall-clock window within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeWindow {
    /// Build a window, truncating both bounds to the minute.
    ///
    /// # Errors
    /// Returns `RosterError::InvalidWindow` if `start >= end` after truncation.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let start = truncate_to_minute(start);
        let end = truncate_to_minute(end);
        if start >= end {
            return Err(RosterError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a window from hour/minute pairs, e.g. `from_hm((18, 0), (21, 0))`.
    ///
    /// Returns `None` for out-of-range clock values or an empty window.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        let start = NaiveTime::from_hms_opt(start.0, start.1, 0)?;
        let end = NaiveTime::from_hms_opt(end.0, end.1, 0)?;
        Self::new(start, end).ok()
    }

    /// Parse an `HH:MM-HH:MM` token.
    ///
    /// Surrounding whitespace is trimmed. Both clocks take exactly two hour
    /// and two minute digits, with no spaces around the dash.
    pub fn parse(raw: &str) -> std::result::Result<Self, CellError> {
        let token = raw.trim();
        let unrecognized = || CellError::UnrecognizedFormat {
            token: token.to_string(),
        };

        let (start_str, end_str) = token.split_once('-').ok_or_else(unrecognized)?;

        let (start_hm, end_hm) = match (split_clock(start_str), split_clock(end_str)) {
            (Some(s), Some(e)) => (s, e),
            _ => return Err(unrecognized()),
        };

        let start = clock_time(start_hm).ok_or_else(|| CellError::InvalidTime {
            token: start_str.to_string(),
        })?;
        let end = clock_time(end_hm).ok_or_else(|| CellError::InvalidTime {
            token: end_str.to_string(),
        })?;

        if start >= end {
            return Err(CellError::EmptyWindow {
                start: start_str.to_string(),
                end: end_str.to_string(),
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the window in whole minutes. Always positive.
    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }

    /// Two windows overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Windows that merely touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this window.
    pub fn contains(&self, other: &TimeWindow) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The overlapping part of two windows, or `None` if they do not overlap.
    pub fn intersection(&self, other: &TimeWindow) -> Option<TimeWindow> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TimeWindow { start, end })
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(CLOCK_FORMAT),
            self.end.format(CLOCK_FORMAT)
        )
    }
}

impl Serialize for TimeWindow {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TimeWindow", 2)?;
        state.serialize_field("start", &self.start.format(CLOCK_FORMAT).to_string())?;
        state.serialize_field("end", &self.end.format(CLOCK_FORMAT).to_string())?;
        state.end()
    }
}

/// Intersect any number of windows: `{max(starts), min(ends)}` when that is
/// non-empty.
///
/// Returns `None` both when the windows share no common time and when no
/// windows are given. The result does not depend on input order, and a single
/// window intersects to itself.
pub fn intersect<'a, I>(windows: I) -> Option<TimeWindow>
where
    I: IntoIterator<Item = &'a TimeWindow>,
{
    let mut iter = windows.into_iter();
    let first = *iter.next()?;
    iter.try_fold(first, |acc, w| acc.intersection(w))
}

fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

/// Split `HH:MM` into numeric parts without range-checking them.
fn split_clock(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.split_once(':')?;
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(h) || !all_digits(m) || h.len() != 2 || m.len() != 2 {
        return None;
    }
    Some((h.parse().ok()?, m.parse().ok()?))
}

fn clock_time((hour, minute): (u32, u32)) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}
