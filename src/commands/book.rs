use anyhow::Result;
use owo_colors::OwoColorize;
use turfbook_core::TimeSlot;

use super::{Ledger, parse_date};

pub fn run(
    mut ledger: Ledger,
    venue: &str,
    requester: &str,
    group: &str,
    date: &str,
    from: &str,
    to: &str,
) -> Result<()> {
    let date = parse_date(date)?;
    let slot = TimeSlot::parse(from, to)?;

    let reservation = ledger.create_reservation(venue, requester, group, date, slot)?;

    println!(
        "{}",
        format!("Booked {} on {} at '{}'", slot, date, venue).green()
    );
    println!("  {}", format!("reservation id: {}", reservation.id).dimmed());

    Ok(())
}
