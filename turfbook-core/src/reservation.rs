//! The reservation record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slot::TimeSlot;

/// A confirmed claim on a venue's time slot for a specific date, made on
/// behalf of a group.
///
/// Reservations are immutable after creation; cancellation deletes the
/// record rather than transitioning it to a retained terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub venue_id: String,
    pub requester_id: String,
    /// The group the booking is made on behalf of. Membership is vouched
    /// for upstream; the ledger takes it as given.
    pub group_id: String,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub status: ReservationStatus,
    /// Creation timestamp, used for display ordering only.
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Confirmed,
}

impl Reservation {
    /// Build a fresh CONFIRMED reservation with a generated id.
    pub fn new(
        venue_id: &str,
        requester_id: &str,
        group_id: &str,
        date: NaiveDate,
        slot: TimeSlot,
        created_at: NaiveDateTime,
    ) -> Self {
        Reservation {
            id: Uuid::new_v4().to_string(),
            venue_id: venue_id.to_string(),
            requester_id: requester_id.to_string(),
            group_id: group_id.to_string(),
            date,
            slot,
            status: ReservationStatus::Confirmed,
            created_at,
        }
    }

    /// The wall-clock moment this reservation begins.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.slot.start())
    }
}
