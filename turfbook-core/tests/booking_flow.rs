//! End-to-end booking flow against a disk-backed ledger.

use chrono::NaiveDate;
use turfbook_core::clock::FixedClock;
use turfbook_core::{BookingLedger, FileStore, LedgerError, TimeSlot};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn slot(from: &str, to: &str) -> TimeSlot {
    TimeSlot::parse(from, to).unwrap()
}

#[test]
fn check_book_list_cancel_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let now = date("2025-06-10").and_hms_opt(8, 0, 0).unwrap();
    let mut ledger = BookingLedger::new(FileStore::open(dir.path()), FixedClock(now));

    let day = date("2025-06-12");
    let evening = slot("18:00", "19:00");

    assert!(ledger.check_availability("turf-a", day, &evening).unwrap());

    let reservation = ledger
        .create_reservation("turf-a", "user-1", "group-1", day, evening)
        .unwrap();

    assert!(!ledger.check_availability("turf-a", day, &evening).unwrap());

    let listed = ledger.list_reservations("user-1", "turf-a").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, reservation.id);

    ledger
        .cancel_reservation(&reservation.id, "turf-a", "user-1")
        .unwrap();

    assert!(ledger.check_availability("turf-a", day, &evening).unwrap());
    assert!(ledger.list_reservations("user-1", "turf-a").unwrap().is_empty());
}

#[test]
fn bookings_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let now = date("2025-06-10").and_hms_opt(8, 0, 0).unwrap();
    let day = date("2025-06-12");

    let reservation = {
        let mut ledger = BookingLedger::new(FileStore::open(dir.path()), FixedClock(now));
        ledger
            .create_reservation("turf-a", "user-1", "group-1", day, slot("18:00", "19:00"))
            .unwrap()
    };

    // A fresh store over the same root sees the booking
    let ledger = BookingLedger::new(FileStore::open(dir.path()), FixedClock(now));
    assert!(!ledger
        .check_availability("turf-a", day, &slot("18:30", "19:30"))
        .unwrap());

    let listed = ledger.list_reservations("user-1", "turf-a").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, reservation.id);
}

#[test]
fn double_booking_conflicts_on_disk_too() {
    let dir = tempfile::tempdir().unwrap();
    let now = date("2025-06-10").and_hms_opt(8, 0, 0).unwrap();
    let mut ledger = BookingLedger::new(FileStore::open(dir.path()), FixedClock(now));

    let day = date("2025-06-12");
    ledger
        .create_reservation("turf-a", "user-1", "group-1", day, slot("18:00", "19:30"))
        .unwrap();

    let err = ledger
        .create_reservation("turf-a", "user-2", "group-2", day, slot("19:00", "20:00"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::SlotTaken { .. }));
}

#[test]
fn purge_reaps_expired_bookings_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let now = date("2025-06-10").and_hms_opt(8, 0, 0).unwrap();
    let mut ledger = BookingLedger::new(FileStore::open(dir.path()), FixedClock(now));

    ledger
        .create_reservation("turf-a", "user-1", "group-1", date("2025-06-09"), slot("18:00", "19:00"))
        .unwrap();
    ledger
        .create_reservation("turf-a", "user-1", "group-1", date("2025-06-12"), slot("18:00", "19:00"))
        .unwrap();

    assert_eq!(ledger.purge_expired().unwrap(), 1);
    assert_eq!(ledger.list_reservations("user-1", "turf-a").unwrap().len(), 1);
}
