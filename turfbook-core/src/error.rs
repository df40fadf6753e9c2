//! Error types for the turfbook ledger.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::slot::TimeSlot;

/// Errors that can occur in ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid time range: start {start} must be before end {end}")]
    InvalidRange { start: NaiveTime, end: NaiveTime },

    #[error("Slot {slot} on {date} is already booked at venue '{venue_id}'")]
    SlotTaken {
        venue_id: String,
        date: NaiveDate,
        slot: TimeSlot,
    },

    #[error("Reservation not found: {0}")]
    NotFound(String),

    #[error("Reservation starting at {starts_at} is within the one-hour cancellation cutoff")]
    CutoffViolation { starts_at: NaiveDateTime },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
