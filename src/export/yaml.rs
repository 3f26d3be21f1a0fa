//! YAML Export functionality
//!
//! Human-readable dump of the tour record.

use std::io::Write;

use chrono::Utc;

use crate::error::{TourError, TourResult};
use crate::models::Tour;

/// Export a tour to YAML
pub fn export_tour_yaml<W: Write>(tour: &Tour, writer: &mut W) -> TourResult<()> {
    writeln!(writer, "# tour-splitter export: {}", tour.name)
        .and_then(|_| writeln!(writer, "# Generated: {}", Utc::now().format("%Y-%m-%d %H:%M UTC")))
        .and_then(|_| writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION")))
        .and_then(|_| writeln!(writer))
        .map_err(|e| TourError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, tour).map_err(|e| TourError::Export(e.to_string()))?;

    Ok(())
}
