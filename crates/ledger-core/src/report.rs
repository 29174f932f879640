//! CSV Report
//!
//! Estimate of completed works for spreadsheet tools: UTF-8 with BOM,
//! semicolon-delimited, one line per item.

use crate::domain::WorkItem;
use crate::error::{LedgerError, LedgerResult};

const BOM: char = '\u{FEFF}';
const HEADER: &str = "Розділ;Робота;Тип;Од.;Ціна;К-сть;Сума";

/// Build the report for `rows` (expected to be the completed items).
///
/// Fails with [`LedgerError::NothingToExport`] on an empty input.
pub fn csv_report<'a>(rows: impl IntoIterator<Item = &'a WorkItem>) -> LedgerResult<String> {
    let mut csv = String::new();
    csv.push(BOM);
    csv.push_str(HEADER);
    csv.push('\n');

    let mut count = 0usize;
    for row in rows {
        csv.push_str(&format!(
            "{};{};{};{};{};{};{:.2}\n",
            row.source.section_label(),
            quoted(&row.work),
            quoted(&row.category),
            bare(&row.unit),
            row.price,
            row.qty,
            row.line_total(),
        ));
        count += 1;
    }

    if count == 0 {
        return Err(LedgerError::NothingToExport);
    }
    Ok(csv)
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Units are written bare unless they would break the line
fn bare(value: &str) -> String {
    if value.contains([';', '"', '\n']) {
        quoted(value)
    } else {
        value.to_string()
    }
}
