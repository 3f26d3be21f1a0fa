//! CSV Export functionality
//!
//! One row per expense, spreadsheet-compatible. Participants are joined with
//! `;` so the column stays a single field.

use std::io::Write;

use crate::error::TourResult;
use crate::models::Tour;

/// Export a tour's expenses to CSV
pub fn export_expenses_csv<W: Write>(tour: &Tour, writer: W) -> TourResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record([
        "Date",
        "Description",
        "Category",
        "Amount",
        "Paid By",
        "Participants",
    ])?;

    for expense in &tour.expenses {
        let participants: Vec<&str> = expense
            .participants
            .iter()
            .filter_map(|id| tour.member_name(*id))
            .collect();

        csv.write_record([
            expense.date.format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            expense.category.to_string(),
            format!("{:.2}", expense.amount.as_units()),
            tour.member_name(expense.paid_by).unwrap_or("").to_string(),
            participants.join(";"),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
