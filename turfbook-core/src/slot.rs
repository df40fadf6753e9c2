//! Half-open time-of-day slots.
//!
//! A `TimeSlot` is a `[start, end)` interval of wall-clock time within a
//! single day. Touching boundaries do not overlap: `[09:00,10:00)` and
//! `[10:00,11:00)` are compatible.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// A half-open `[start, end)` interval of time-of-day.
///
/// Construction enforces `start < end`, so an inverted or empty slot is
/// unrepresentable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> LedgerResult<Self> {
        if start >= end {
            return Err(LedgerError::InvalidRange { start, end });
        }
        Ok(TimeSlot { start, end })
    }

    /// Parse a slot from two `HH:MM` strings.
    pub fn parse(from: &str, to: &str) -> LedgerResult<Self> {
        let start = parse_time(from)?;
        let end = parse_time(to)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether two slots intersect under half-open semantics.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Parse an `HH:MM` wall-clock time.
fn parse_time(s: &str) -> LedgerResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| LedgerError::Parse(format!("Invalid time '{}'. Expected HH:MM", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(from: &str, to: &str) -> TimeSlot {
        TimeSlot::parse(from, to).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            TimeSlot::parse("10:00", "09:00"),
            Err(LedgerError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_empty_range() {
        assert!(matches!(
            TimeSlot::parse("10:00", "10:00"),
            Err(LedgerError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(TimeSlot::parse("9am", "10:00").is_err());
        assert!(TimeSlot::parse("25:00", "26:00").is_err());
    }

    #[test]
    fn touching_boundaries_do_not_overlap() {
        let morning = slot("09:00", "10:00");
        let next = slot("10:00", "11:00");
        assert!(!morning.overlaps(&next));
        assert!(!next.overlaps(&morning));
    }

    #[test]
    fn partial_intersection_overlaps() {
        let long = slot("09:00", "10:30");
        let late = slot("10:00", "11:00");
        assert!(long.overlaps(&late));
        assert!(late.overlaps(&long));
    }

    #[test]
    fn containment_overlaps() {
        let outer = slot("08:00", "12:00");
        let inner = slot("09:00", "10:00");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn display_round_trips_format() {
        assert_eq!(slot("09:00", "10:30").to_string(), "09:00-10:30");
    }
}
