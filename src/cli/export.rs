//! Export CLI commands
//!
//! Writes the active tour to a file. Without `--output` the file lands in the
//! exports directory under a name derived from the tour name.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::paths::TourPaths;
use crate::config::settings::Settings;
use crate::error::TourResult;
use crate::export::{default_file_name, export_to_path, ExportFormat};
use crate::session::Session;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Plain-text report with balances, settlements and breakdowns
    Report {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Spreadsheet workbook (.xlsx)
    Workbook {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Expenses as CSV
    Csv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Full tour data as JSON
    Json {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Full tour data as YAML
    Yaml {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl ExportCommands {
    fn split(self) -> (ExportFormat, Option<PathBuf>) {
        match self {
            Self::Report { output } => (ExportFormat::Report, output),
            Self::Workbook { output } => (ExportFormat::Workbook, output),
            Self::Csv { output } => (ExportFormat::Csv, output),
            Self::Json { output } => (ExportFormat::Json, output),
            Self::Yaml { output } => (ExportFormat::Yaml, output),
        }
    }
}

/// Handle an export command
pub fn handle_export_command(
    session: &Session,
    paths: &TourPaths,
    settings: &Settings,
    cmd: ExportCommands,
) -> TourResult<()> {
    let tour = session.active_tour()?;
    let (format, output) = cmd.split();

    let path = output.unwrap_or_else(|| paths.exports_dir().join(default_file_name(tour, format)));
    let written = export_to_path(tour, format, settings, &path)?;

    println!("Exported {} to {}", tour.name, written.display());
    Ok(())
}
