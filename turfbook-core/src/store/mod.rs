//! Reservation storage.
//!
//! The ledger reads and writes reservations through the `ReservationStore`
//! trait. `FileStore` keeps JSON documents on disk; `MemoryStore` backs
//! tests and embedders that don't need persistence.
//!
//! Every store maintains two views of the same collection: a bucket per
//! `(venue_id, date)` for overlap queries, and an index per requester for
//! the "my bookings" view. Insert and remove touch both, so a reservation
//! appears in exactly one venue bucket and exactly one requester index.

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::reservation::Reservation;

pub trait ReservationStore {
    /// All reservations for one venue on one date.
    fn venue_day(&self, venue_id: &str, date: NaiveDate) -> LedgerResult<Vec<Reservation>>;

    /// All reservations made by one requester, across venues and dates.
    fn requester_index(&self, requester_id: &str) -> LedgerResult<Vec<Reservation>>;

    /// Add a reservation to its venue bucket and its requester index.
    fn insert(&mut self, reservation: &Reservation) -> LedgerResult<()>;

    /// Remove a reservation from both views. Removing a reservation that
    /// is no longer present is not an error.
    fn remove(&mut self, reservation: &Reservation) -> LedgerResult<()>;

    /// Every reservation in the store, in no particular order.
    fn all(&self) -> LedgerResult<Vec<Reservation>>;
}
