use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::Ledger;

pub fn run(
    mut ledger: Ledger,
    reservation_id: &str,
    venue: &str,
    requester: &str,
    yes: bool,
) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Cancel reservation {}?", reservation_id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    let reservation = ledger.cancel_reservation(reservation_id, venue, requester)?;

    println!(
        "{}",
        format!(
            "Cancelled {} on {} at '{}'",
            reservation.slot, reservation.date, reservation.venue_id
        )
        .green()
    );

    Ok(())
}
