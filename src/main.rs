use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tour_splitter::cli::{
    handle_balances, handle_daily, handle_expense_command, handle_export_command,
    handle_member_command, handle_settle, handle_summary, handle_tour_command,
};
use tour_splitter::config::{paths::TourPaths, settings::Settings};
use tour_splitter::storage::{initialize_storage, seed_sample_tour, JsonTourStore, TourStore};
use tour_splitter::Session;

#[derive(Parser)]
#[command(
    name = "toursplit",
    version,
    about = "Split shared travel expenses and settle up",
    long_about = "tour-splitter tracks who paid what on a group trip, shows each \
                  member's balance, and suggests the fewest payments needed to \
                  settle up."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init {
        /// Seed the Bangkok sample tour when no tours exist
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Tour management commands
    #[command(subcommand)]
    Tour(tour_splitter::cli::TourCommands),

    /// Member management commands
    #[command(subcommand)]
    Member(tour_splitter::cli::MemberCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(tour_splitter::cli::ExpenseCommands),

    /// Show each member's paid, share and balance
    Balances,

    /// Suggest payments to settle all balances
    Settle,

    /// Show spending per day (Hotel and Transport excluded)
    Daily {
        /// Show the all-category trend instead
        #[arg(long)]
        trend: bool,
    },

    /// Show the tour dashboard
    Summary,

    /// Export the active tour
    #[command(subcommand)]
    Export(tour_splitter::cli::ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = TourPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("tour-splitter - Split shared travel expenses");
        println!();
        println!("Run 'toursplit --help' for usage information.");
        println!("Run 'toursplit init --sample' to try it with sample data.");
        return Ok(());
    };

    match command {
        Commands::Init { sample } => {
            println!("Initializing tour-splitter at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;

            if sample {
                let store = JsonTourStore::new(&paths);
                match seed_sample_tour(&store)? {
                    Some(_) => {
                        println!("Created sample tour: Bangkok Adventure 2025");
                        println!("Run 'toursplit balances' to see who owes whom.");
                    }
                    None => println!("Tours already exist; sample data not added."),
                }
            }
            println!("Initialization complete!");
        }
        Commands::Config => {
            println!("tour-splitter Configuration");
            println!("===========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);

            let store = JsonTourStore::new(&paths);
            println!();
            println!("Tours stored:      {}", store.load_tours().len());
        }
        Commands::Tour(cmd) => handle_tour_command(&mut open_session(&paths), cmd)?,
        Commands::Member(cmd) => handle_member_command(&mut open_session(&paths), cmd)?,
        Commands::Expense(cmd) => {
            handle_expense_command(&mut open_session(&paths), &settings, cmd)?
        }
        Commands::Balances => handle_balances(&open_session(&paths), &settings)?,
        Commands::Settle => handle_settle(&open_session(&paths), &settings)?,
        Commands::Daily { trend } => handle_daily(&open_session(&paths), &settings, trend)?,
        Commands::Summary => handle_summary(&open_session(&paths), &settings)?,
        Commands::Export(cmd) => {
            handle_export_command(&open_session(&paths), &paths, &settings, cmd)?
        }
    }

    Ok(())
}

fn open_session(paths: &TourPaths) -> Session {
    Session::open(Box::new(JsonTourStore::new(paths)))
}
