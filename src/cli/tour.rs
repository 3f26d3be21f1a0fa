//! Tour CLI commands
//!
//! Implements CLI commands for creating, selecting and deleting tours.

use clap::Subcommand;

use crate::display::{format_tour_details, format_tour_list};
use crate::error::{TourError, TourResult};
use crate::services::TourService;
use crate::session::Session;

use super::parse_date;

/// Tour subcommands
#[derive(Subcommand)]
pub enum TourCommands {
    /// Create a new tour
    Create {
        /// Tour name
        name: String,
        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
        /// First day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<String>,
        /// Last day (YYYY-MM-DD), defaults to the start date
        #[arg(short, long)]
        end: Option<String>,
    },
    /// List all tours
    #[command(alias = "ls")]
    List,
    /// Switch the active tour
    Use {
        /// Tour name or ID
        tour: String,
    },
    /// Show tour details (defaults to the active tour)
    Show {
        /// Tour name or ID
        tour: Option<String>,
    },
    /// Delete a tour with all its members and expenses
    Delete {
        /// Tour name or ID
        tour: String,
    },
}

/// Handle a tour command
pub fn handle_tour_command(session: &mut Session, cmd: TourCommands) -> TourResult<()> {
    match cmd {
        TourCommands::Create {
            name,
            description,
            start,
            end,
        } => {
            let start = start.as_deref().map(parse_date).transpose()?;
            let end = end.as_deref().map(parse_date).transpose()?;

            let tour = TourService::new(session).create(&name, &description, start, end)?;
            println!("Created tour: {} ({})", tour.name, tour.id);
            println!("  Dates: {}", tour.date_range_label());
            if session.is_active(tour.id) {
                println!("  This is now the active tour.");
            }
        }

        TourCommands::List => {
            let active = session.active_id();
            print!("{}", format_tour_list(&session.tours(), active));
        }

        TourCommands::Use { tour } => {
            let tour = TourService::new(session).switch(&tour)?;
            println!("Active tour: {}", tour);
        }

        TourCommands::Show { tour } => {
            let tour = match tour {
                Some(identifier) => session
                    .find_tour(&identifier)
                    .ok_or_else(|| TourError::tour_not_found(&identifier))?,
                None => session.active_tour()?,
            };
            print!("{}", format_tour_details(tour));
        }

        TourCommands::Delete { tour } => {
            let deleted = TourService::new(session).delete(&tour)?;
            println!(
                "Deleted tour: {} ({} members, {} expenses)",
                deleted.name,
                deleted.members.len(),
                deleted.expenses.len()
            );
            match session.active_tour() {
                Ok(active) => println!("Active tour: {}", active),
                Err(_) => println!("No tours left."),
            }
        }
    }

    Ok(())
}
