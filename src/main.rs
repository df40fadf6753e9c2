mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "turfbook")]
#[command(about = "Check, book and cancel turf reservations in your local ledger")]
struct Cli {
    /// Ledger root directory (defaults to the configured ledger_dir)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a slot is free at a venue
    Check {
        /// Venue id
        #[arg(short, long)]
        venue: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Slot start (HH:MM)
        #[arg(long)]
        from: String,

        /// Slot end (HH:MM, exclusive)
        #[arg(long)]
        to: String,
    },
    /// Book a slot on behalf of a group
    Book {
        /// Venue id
        #[arg(short, long)]
        venue: String,

        /// Requesting user id
        #[arg(short, long)]
        requester: String,

        /// Group the booking is made for
        #[arg(short, long)]
        group: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Slot start (HH:MM)
        #[arg(long)]
        from: String,

        /// Slot end (HH:MM, exclusive)
        #[arg(long)]
        to: String,
    },
    /// List a requester's upcoming reservations at a venue
    List {
        /// Requesting user id
        #[arg(short, long)]
        requester: String,

        /// Venue id
        #[arg(short, long)]
        venue: String,
    },
    /// Show all bookings for a venue on one date
    Bookings {
        /// Venue id
        #[arg(short, long)]
        venue: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },
    /// Cancel a reservation (allowed until one hour before it starts)
    Cancel {
        /// Reservation id
        reservation_id: String,

        /// Venue id
        #[arg(short, long)]
        venue: String,

        /// Requesting user id
        #[arg(short, long)]
        requester: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete reservations whose start time has passed
    Purge,
    /// Show configuration and ledger paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Config = cli.command {
        return commands::config::run();
    }

    let ledger = commands::open_ledger(cli.dir.as_deref())?;

    match cli.command {
        Commands::Check {
            venue,
            date,
            from,
            to,
        } => commands::check::run(ledger, &venue, &date, &from, &to),
        Commands::Book {
            venue,
            requester,
            group,
            date,
            from,
            to,
        } => commands::book::run(ledger, &venue, &requester, &group, &date, &from, &to),
        Commands::List { requester, venue } => commands::list::run(ledger, &requester, &venue),
        Commands::Bookings { venue, date } => commands::bookings::run(ledger, &venue, &date),
        Commands::Cancel {
            reservation_id,
            venue,
            requester,
            yes,
        } => commands::cancel::run(ledger, &reservation_id, &venue, &requester, yes),
        Commands::Purge => commands::purge::run(ledger),
        Commands::Config => unreachable!("handled above"),
    }
}
