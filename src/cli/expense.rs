//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and removing expenses.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{TourError, TourResult};
use crate::models::{ExpenseCategory, Money};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::session::Session;

use super::parse_date;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense on the active tour
    Add {
        /// Amount (e.g. "45.50")
        amount: String,
        /// Member who paid (name or ID)
        #[arg(short, long)]
        paid_by: String,
        /// Category: food, hotel, transport, tour, activity, shopping, entertainment, misc
        #[arg(short, long, default_value = "misc")]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Comma-separated participants (names or IDs); defaults to everyone
        #[arg(long, value_delimiter = ',')]
        participants: Vec<String>,
    },
    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Text to find in the description or category name
        #[arg(short, long)]
        search: Option<String>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a single expense
    Show {
        /// Expense ID
        expense: String,
    },
    /// Remove an expense
    Remove {
        /// Expense ID
        expense: String,
    },
}

fn parse_category(s: &str) -> TourResult<ExpenseCategory> {
    ExpenseCategory::parse(s)
        .ok_or_else(|| TourError::Validation(format!("Unknown category: {}", s)))
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut Session,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TourResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            paid_by,
            category,
            description,
            date,
            participants,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| TourError::Validation(e.to_string()))?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let input = CreateExpenseInput {
                description,
                amount,
                category: parse_category(&category)?,
                date,
                paid_by,
                participants: participants
                    .into_iter()
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect(),
            };

            let expense = ExpenseService::new(session).add(input)?;
            println!("Added expense: {} ({})", expense, expense.id);
            if let Some(share) = expense.share_per_person() {
                println!(
                    "  Split {} way(s): {} each",
                    expense.participants.len(),
                    crate::models::format_units(share, symbol)
                );
            }
        }

        ExpenseCommands::List {
            category,
            date,
            search,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(c) = category {
                filter = filter.category(parse_category(&c)?);
            }
            if let Some(d) = date {
                filter = filter.date(parse_date(&d)?);
            }
            if let Some(text) = search {
                filter = filter.search(text);
            }
            if let Some(n) = limit {
                filter = filter.limit(n);
            }

            let service = ExpenseService::new(session);
            let expenses = service.list(&filter)?;
            let tour = service.tour()?;
            print!(
                "{}",
                format_expense_list(tour, &expenses, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Show { expense } => {
            let service = ExpenseService::new(session);
            let found = service.find(&expense)?;
            print!("{}", format_expense_details(service.tour()?, found, symbol));
        }

        ExpenseCommands::Remove { expense } => {
            let removed = ExpenseService::new(session).remove(&expense)?;
            println!("Removed expense: {}", removed);
        }
    }

    Ok(())
}
