use anyhow::Result;
use owo_colors::OwoColorize;

use super::Ledger;

pub fn run(mut ledger: Ledger) -> Result<()> {
    let removed = ledger.purge_expired()?;

    if removed == 0 {
        println!("{}", "No expired reservations".dimmed());
    } else {
        println!("{}", format!("Purged {} expired reservation(s)", removed).green());
    }

    Ok(())
}
