use anyhow::Result;

use super::Ledger;
use crate::render;

pub fn run(ledger: Ledger, requester: &str, venue: &str) -> Result<()> {
    let reservations = ledger.list_reservations(requester, venue)?;
    render::print_reservations(&reservations);
    Ok(())
}
