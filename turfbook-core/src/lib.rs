//! Core types and logic for the turfbook ledger.
//!
//! This crate provides everything the CLI builds on:
//! - `Reservation` and `TimeSlot` for the booking data model
//! - `BookingLedger` for availability checks, booking, cancellation
//! - `store` for the disk-backed and in-memory reservation stores

pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod reservation;
pub mod slot;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{LedgerError, LedgerResult};
pub use ledger::BookingLedger;
pub use reservation::{Reservation, ReservationStatus};
pub use slot::TimeSlot;
pub use store::{FileStore, MemoryStore, ReservationStore};
