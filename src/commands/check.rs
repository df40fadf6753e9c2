use anyhow::Result;
use owo_colors::OwoColorize;
use turfbook_core::TimeSlot;

use super::{Ledger, parse_date};

pub fn run(ledger: Ledger, venue: &str, date: &str, from: &str, to: &str) -> Result<()> {
    let date = parse_date(date)?;
    let slot = TimeSlot::parse(from, to)?;

    if ledger.check_availability(venue, date, &slot)? {
        println!(
            "{}",
            format!("Available: {} on {} at '{}'", slot, date, venue).green()
        );
    } else {
        println!(
            "{}",
            format!("Unavailable: {} on {} at '{}'", slot, date, venue).red()
        );
    }

    Ok(())
}
