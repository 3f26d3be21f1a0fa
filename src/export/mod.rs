//! Export module for tour-splitter
//!
//! Provides tour export in multiple formats:
//! - Report: plain-text summary for sharing
//! - Workbook: `.xlsx` spreadsheet with Summary, Members, Expenses and Settlements sheets
//! - CSV: flat expense list (spreadsheet-compatible)
//! - JSON / YAML: verbatim dump of the tour record
//!
//! Files are written atomically; a failed export leaves no partial file.

pub mod csv;
pub mod json;
pub mod report;
pub mod workbook;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::export_tour_json;
pub use self::report::export_tour_report;
pub use self::workbook::export_tour_workbook;
pub use self::yaml::export_tour_yaml;

use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::TourResult;
use crate::models::Tour;
use crate::storage::write_atomic;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Report,
    Workbook,
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Suffix appended to the tour's file stem
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Report => "_report.txt",
            Self::Workbook => "_workbook.xlsx",
            Self::Csv => "_expenses.csv",
            Self::Json => "_data.json",
            Self::Yaml => "_data.yaml",
        }
    }
}

/// File-safe version of a tour name: every non-alphanumeric becomes `_`
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "tour".to_string()
    } else {
        stem
    }
}

/// Default file name for exporting `tour` in `format`
pub fn default_file_name(tour: &Tour, format: ExportFormat) -> String {
    format!("{}{}", file_stem(&tour.name), format.file_suffix())
}

/// Export `tour` to `path`, replacing any existing file atomically
pub fn export_to_path(
    tour: &Tour,
    format: ExportFormat,
    settings: &Settings,
    path: &Path,
) -> TourResult<PathBuf> {
    write_atomic(path, |writer| match format {
        ExportFormat::Report => export_tour_report(tour, settings, writer),
        ExportFormat::Workbook => export_tour_workbook(tour, writer),
        ExportFormat::Csv => export_expenses_csv(tour, writer),
        ExportFormat::Json => export_tour_json(tour, writer, true),
        ExportFormat::Yaml => export_tour_yaml(tour, writer),
    })?;

    tracing::info!(path = %path.display(), format = ?format, "Exported tour");
    Ok(path.to_path_buf())
}
