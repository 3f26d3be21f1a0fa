//! JSON Export functionality
//!
//! Dumps the tour record verbatim: members, expenses and ids exactly as
//! stored.

use std::io::Write;

use crate::error::{TourError, TourResult};
use crate::models::Tour;

/// Export a tour to JSON
pub fn export_tour_json<W: Write>(tour: &Tour, writer: &mut W, pretty: bool) -> TourResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, tour)
    } else {
        serde_json::to_writer(&mut *writer, tour)
    }
    .map_err(|e| TourError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TourError::Export(e.to_string()))?;
    Ok(())
}
