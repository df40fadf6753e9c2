//! Terminal output for reservation listings.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use turfbook_core::Reservation;

/// Print reservations grouped by day with a bold date header per group.
pub fn print_reservations(reservations: &[Reservation]) {
    if reservations.is_empty() {
        println!("{}", "No reservations found".dimmed());
        return;
    }

    let mut current_date: Option<NaiveDate> = None;

    for reservation in reservations {
        if current_date != Some(reservation.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(reservation.date).bold());
            current_date = Some(reservation.date);
        }

        let group_tag = format!("[{}]", reservation.group_id);
        println!(
            "  {} {} {} {}",
            reservation.slot,
            reservation.venue_id,
            group_tag.dimmed(),
            reservation.id.dimmed()
        );
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Jun 10")
fn format_date_label(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
