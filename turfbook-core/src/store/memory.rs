//! In-memory reservation store.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::ReservationStore;
use crate::error::LedgerResult;
use crate::reservation::Reservation;

/// A `ReservationStore` held entirely in memory. Used by tests and by
/// embedders that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    venues: HashMap<(String, NaiveDate), Vec<Reservation>>,
    requesters: HashMap<String, Vec<Reservation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationStore for MemoryStore {
    fn venue_day(&self, venue_id: &str, date: NaiveDate) -> LedgerResult<Vec<Reservation>> {
        Ok(self
            .venues
            .get(&(venue_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }

    fn requester_index(&self, requester_id: &str) -> LedgerResult<Vec<Reservation>> {
        Ok(self.requesters.get(requester_id).cloned().unwrap_or_default())
    }

    fn insert(&mut self, reservation: &Reservation) -> LedgerResult<()> {
        self.venues
            .entry((reservation.venue_id.clone(), reservation.date))
            .or_default()
            .push(reservation.clone());
        self.requesters
            .entry(reservation.requester_id.clone())
            .or_default()
            .push(reservation.clone());
        Ok(())
    }

    fn remove(&mut self, reservation: &Reservation) -> LedgerResult<()> {
        if let Some(bucket) = self
            .venues
            .get_mut(&(reservation.venue_id.clone(), reservation.date))
        {
            bucket.retain(|r| r.id != reservation.id);
        }
        if let Some(index) = self.requesters.get_mut(&reservation.requester_id) {
            index.retain(|r| r.id != reservation.id);
        }
        Ok(())
    }

    fn all(&self) -> LedgerResult<Vec<Reservation>> {
        Ok(self.venues.values().flatten().cloned().collect())
    }
}
