//! The booking ledger.
//!
//! One collection of reservations, two questions: "is this slot free?" and
//! "what has this requester booked?". The ledger owns the check-then-insert
//! sequence so a conflicting booking fails with `SlotTaken` instead of
//! silently double-booking. Within one process, holding `&mut self` across
//! the check and the insert makes the pair atomic; nothing here coordinates
//! concurrent processes sharing the same store root.

use chrono::{Duration, NaiveDate};

use crate::clock::Clock;
use crate::error::{LedgerError, LedgerResult};
use crate::reservation::Reservation;
use crate::slot::TimeSlot;
use crate::store::ReservationStore;

/// Cancellation is refused within this many minutes of the reservation
/// start.
pub const CANCEL_CUTOFF_MINUTES: i64 = 60;

pub struct BookingLedger<S: ReservationStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: ReservationStore, C: Clock> BookingLedger<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        BookingLedger { store, clock }
    }

    /// Whether `candidate` is free on `date` at the given venue.
    ///
    /// Pure read: repeated calls with no intervening mutation return the
    /// same answer. Operating-hours constraints are the caller's concern.
    pub fn check_availability(
        &self,
        venue_id: &str,
        date: NaiveDate,
        candidate: &TimeSlot,
    ) -> LedgerResult<bool> {
        let day = self.store.venue_day(venue_id, date)?;
        Ok(!day.iter().any(|r| r.slot.overlaps(candidate)))
    }

    /// Book a slot for a group.
    ///
    /// The overlap check runs against the venue bucket inside this same
    /// call, so a caller racing another writer in this process gets
    /// `SlotTaken` rather than a double booking. The `group_id` is taken
    /// on trust; membership is vouched for upstream.
    pub fn create_reservation(
        &mut self,
        venue_id: &str,
        requester_id: &str,
        group_id: &str,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> LedgerResult<Reservation> {
        let day = self.store.venue_day(venue_id, date)?;
        if day.iter().any(|r| r.slot.overlaps(&slot)) {
            return Err(LedgerError::SlotTaken {
                venue_id: venue_id.to_string(),
                date,
                slot,
            });
        }

        let reservation =
            Reservation::new(venue_id, requester_id, group_id, date, slot, self.clock.now());
        self.store.insert(&reservation)?;
        Ok(reservation)
    }

    /// The requester's upcoming reservations at one venue, ordered by date
    /// then start time.
    ///
    /// Reservations whose start lies strictly in the past are filtered out
    /// but not deleted; `purge_expired` does the reaping.
    pub fn list_reservations(
        &self,
        requester_id: &str,
        venue_id: &str,
    ) -> LedgerResult<Vec<Reservation>> {
        let now = self.clock.now();

        let mut reservations: Vec<Reservation> = self
            .store
            .requester_index(requester_id)?
            .into_iter()
            .filter(|r| r.venue_id == venue_id)
            .filter(|r| r.starts_at() >= now)
            .collect();

        reservations.sort_by_key(|r| (r.date, r.slot.start()));
        Ok(reservations)
    }

    /// All reservations for a venue on one date, ordered by start time.
    /// Backs the venue's booking grid.
    pub fn venue_day(&self, venue_id: &str, date: NaiveDate) -> LedgerResult<Vec<Reservation>> {
        let mut day = self.store.venue_day(venue_id, date)?;
        day.sort_by_key(|r| r.slot.start());
        Ok(day)
    }

    /// Cancel a reservation, removing it from both the venue bucket and
    /// the requester index.
    ///
    /// Fails with `NotFound` when no reservation with that id exists for
    /// the venue/requester pair, and with `CutoffViolation` (no mutation)
    /// when "now" is not strictly more than one hour before the
    /// reservation's start.
    pub fn cancel_reservation(
        &mut self,
        reservation_id: &str,
        venue_id: &str,
        requester_id: &str,
    ) -> LedgerResult<Reservation> {
        let reservation = self
            .store
            .requester_index(requester_id)?
            .into_iter()
            .find(|r| r.id == reservation_id && r.venue_id == venue_id)
            .ok_or_else(|| LedgerError::NotFound(reservation_id.to_string()))?;

        let starts_at = reservation.starts_at();
        if starts_at - self.clock.now() <= Duration::minutes(CANCEL_CUTOFF_MINUTES) {
            return Err(LedgerError::CutoffViolation { starts_at });
        }

        self.store.remove(&reservation)?;
        Ok(reservation)
    }

    /// Delete every reservation whose start lies strictly in the past.
    /// Returns the number removed.
    pub fn purge_expired(&mut self) -> LedgerResult<usize> {
        let now = self.clock.now();

        let expired: Vec<Reservation> = self
            .store
            .all()?
            .into_iter()
            .filter(|r| r.starts_at() < now)
            .collect();

        for reservation in &expired {
            self.store.remove(reservation)?;
        }
        Ok(expired.len())
    }
}
