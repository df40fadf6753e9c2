pub mod book;
pub mod bookings;
pub mod cancel;
pub mod check;
pub mod config;
pub mod list;
pub mod purge;

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use turfbook_core::config::TurfbookConfig;
use turfbook_core::{BookingLedger, FileStore, SystemClock};

/// The ledger every subcommand operates on.
pub type Ledger = BookingLedger<FileStore, SystemClock>;

/// Open the ledger at `dir`, or at the configured ledger_dir when no
/// override is given.
pub fn open_ledger(dir: Option<&Path>) -> Result<Ledger> {
    let root = match dir {
        Some(d) => d.to_path_buf(),
        None => TurfbookConfig::load()?.data_path(),
    };

    Ok(BookingLedger::new(FileStore::open(root), SystemClock))
}

/// Parse a YYYY-MM-DD date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
