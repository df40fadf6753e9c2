use anyhow::Result;
use owo_colors::OwoColorize;

use super::{Ledger, parse_date};

pub fn run(ledger: Ledger, venue: &str, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let day = ledger.venue_day(venue, date)?;

    if day.is_empty() {
        println!("{}", format!("No bookings for '{}' on {}", venue, date).dimmed());
        return Ok(());
    }

    println!("{}", format!("{} on {}", venue, date).bold());
    for reservation in &day {
        let who = format!("{} [{}]", reservation.requester_id, reservation.group_id);
        println!("  {} {}", reservation.slot, who.dimmed());
    }

    Ok(())
}
