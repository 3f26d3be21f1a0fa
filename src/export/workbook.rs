//! Spreadsheet workbook export
//!
//! Writes a minimal Office Open XML workbook (`.xlsx`) with four sheets:
//! Summary, Members, Expenses and Settlements. Text cells are inline strings,
//! so no shared-string table is needed.

use std::io::{Seek, Write};

use ::zip::write::FileOptions;
use ::zip::{CompressionMethod, ZipWriter};

use crate::engine::TourOverview;
use crate::error::TourResult;
use crate::models::Tour;

const SHEETS: [&str; 4] = ["Summary", "Members", "Expenses", "Settlements"];

const CONTENT_TYPES_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Cell::Number(n as f64)
    }
}

type Row = Vec<Cell>;

macro_rules! row {
    ($($cell:expr),* $(,)?) => {
        vec![$(Cell::from($cell)),*]
    };
}

/// Write the workbook for `tour` to `writer`
pub fn export_tour_workbook<W: Write + Seek>(tour: &Tour, writer: W) -> TourResult<()> {
    let overview = TourOverview::compute(tour);
    let sheets = [
        summary_sheet(tour, &overview),
        members_sheet(tour, &overview),
        expenses_sheet(tour),
        settlements_sheet(&overview),
    ];

    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types().as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml().as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(workbook_rels().as_bytes())?;

    for (i, rows) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        zip.write_all(sheet_xml(rows).as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

fn summary_sheet(tour: &Tour, overview: &TourOverview) -> Vec<Row> {
    let summary = &overview.summary;
    let grand_total = summary.total_expenses;

    let mut rows = vec![
        row!["Tour", tour.name.as_str()],
        row!["Description", tour.description.as_str()],
        row!["Dates", tour.date_range_label()],
        row!["Members", summary.member_count],
        row!["Expenses", summary.expense_count],
        row!["Total Expenses", summary.total_expenses.as_units()],
        row!["Hotel Costs", summary.hotel_costs.as_units()],
        row!["Transport Costs", summary.transport_costs.as_units()],
        row!["Daily Average", summary.daily_average],
        Vec::new(),
        row!["Category", "Total", "Share %"],
    ];

    for total in &overview.category_totals {
        rows.push(row![
            total.category.to_string(),
            total.total.as_units(),
            total.percentage(grand_total),
        ]);
    }

    rows
}

fn members_sheet(tour: &Tour, overview: &TourOverview) -> Vec<Row> {
    let mut rows = vec![row!["Name", "Contact", "Paid", "Share", "Balance", "Status"]];

    for balance in overview.balances.iter() {
        let contact = tour
            .member(balance.member_id)
            .map(|m| m.contact.clone())
            .unwrap_or_default();
        rows.push(row![
            balance.name.as_str(),
            contact,
            balance.total_paid,
            balance.total_share,
            balance.net,
            balance.status().to_string(),
        ]);
    }

    rows
}

fn expenses_sheet(tour: &Tour) -> Vec<Row> {
    let mut rows = vec![row![
        "Date",
        "Description",
        "Category",
        "Amount",
        "Paid By",
        "Participants"
    ]];

    for expense in &tour.expenses {
        let participants: Vec<&str> = expense
            .participants
            .iter()
            .filter_map(|id| tour.member_name(*id))
            .collect();
        rows.push(row![
            expense.date.format("%Y-%m-%d").to_string(),
            expense.label(),
            expense.category.to_string(),
            expense.amount.as_units(),
            tour.member_name(expense.paid_by).unwrap_or(""),
            participants.join(", "),
        ]);
    }

    rows
}

fn settlements_sheet(overview: &TourOverview) -> Vec<Row> {
    let mut rows = vec![row!["From", "To", "Amount"]];
    for settlement in &overview.settlements {
        rows.push(row![
            settlement.from_name.as_str(),
            settlement.to_name.as_str(),
            settlement.amount,
        ]);
    }
    rows
}

fn content_types() -> String {
    let mut xml = String::from(CONTENT_TYPES_HEAD);
    for i in 1..=SHEETS.len() {
        xml.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            i
        ));
    }
    xml.push_str("</Types>");
    xml
}

fn workbook_xml() -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
    );
    for (i, name) in SHEETS.iter().enumerate() {
        xml.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            name,
            i + 1,
            i + 1
        ));
    }
    xml.push_str("</sheets></workbook>");
    xml
}

fn workbook_rels() -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for i in 1..=SHEETS.len() {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            i, i
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

fn sheet_xml(rows: &[Row]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    for (r, row) in rows.iter().enumerate() {
        let row_num = r + 1;
        xml.push_str(&format!(r#"<row r="{}">"#, row_num));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_name(c), row_num);
            match cell {
                Cell::Text(text) => xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    reference,
                    escape_xml(text)
                )),
                Cell::Number(n) => {
                    xml.push_str(&format!(r#"<c r="{}"><v>{:.2}</v></c>"#, reference, n))
                }
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Spreadsheet column letters: 0 -> A, 25 -> Z, 26 -> AA
fn column_name(index: usize) -> String {
    let mut name = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
