use std::fmt;
use std::io::Cursor;

use calamine::{Data, Range, Reader as _, Xlsx};
use tracing::debug;
use umya_spreadsheet::Worksheet;

use crate::classify::{RowKind, classify_row};
use crate::layout::SheetLayout;
use crate::leave::LeaveMap;
use crate::reconcile::{AttendanceEntry, reconcile};
use crate::writer::{CellFormat, is_covered_member, write_cell};

#[derive(Debug)]
pub enum PopulateError {
    /// The evaluated read view could not be parsed from the source bytes.
    ReadView(calamine::XlsxError),
    /// The write view could not be loaded or serialized.
    WriteView(String),
    /// The workbook contains no sheets at all.
    NoSheets,
}

impl fmt::Display for PopulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopulateError::ReadView(err) => write!(f, "cannot read workbook: {err}"),
            PopulateError::WriteView(msg) => write!(f, "cannot rewrite workbook: {msg}"),
            PopulateError::NoSheets => write!(f, "workbook has no sheets"),
        }
    }
}

impl std::error::Error for PopulateError {}

impl From<calamine::XlsxError> for PopulateError {
    fn from(value: calamine::XlsxError) -> Self {
        Self::ReadView(value)
    }
}

pub type PopulateResult<T> = Result<T, PopulateError>;

/// Fill the attendance template with the default layout.
pub fn populate(source: &[u8], employee_name: &str, leaves: &LeaveMap) -> PopulateResult<Vec<u8>> {
    populate_with_layout(source, employee_name, leaves, &SheetLayout::default())
}

/// Fill the attendance template and return the finished workbook bytes.
///
/// Two views of the same source bytes are opened: an evaluated read view
/// that drives every decision, and a formula-preserving write view that
/// receives every mutation and is the one serialized. The call either runs
/// to completion or fails with no partial output.
pub fn populate_with_layout(
    source: &[u8],
    employee_name: &str,
    leaves: &LeaveMap,
    layout: &SheetLayout,
) -> PopulateResult<Vec<u8>> {
    let mut reader = Xlsx::new(Cursor::new(source))?;
    let sheet_names = reader.sheet_names();
    let chosen = if sheet_names.iter().any(|name| *name == layout.sheet_name) {
        layout.sheet_name.clone()
    } else {
        // Missing named sheet: recover by taking the first sheet.
        sheet_names.first().cloned().ok_or(PopulateError::NoSheets)?
    };
    debug!(sheet = %chosen, "selected attendance sheet");
    let read = reader.worksheet_range(&chosen)?;

    let mut book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(source), true)
        .map_err(|err| PopulateError::WriteView(err.to_string()))?;
    let sheet_index = book
        .get_sheet_collection()
        .iter()
        .position(|sheet| sheet.get_name() == chosen)
        .unwrap_or(0);
    {
        let sheet = book
            .get_sheet_mut(&sheet_index)
            .ok_or(PopulateError::NoSheets)?;
        fill_sheet(sheet, &read, employee_name, leaves, layout);
        sweep_stray_zeros(sheet, &read);
    }

    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buffer)
        .map_err(|err| PopulateError::WriteView(err.to_string()))?;
    Ok(buffer.into_inner())
}

fn fill_sheet(
    sheet: &mut Worksheet,
    read: &Range<Data>,
    employee_name: &str,
    leaves: &LeaveMap,
    layout: &SheetLayout,
) {
    let (name_row, name_col) = layout.name_cell;
    let name = format!("{}{}", layout.name_label, employee_name);
    write_cell(sheet, name_row, name_col, &name, &CellFormat::default());

    let start_row = scan_start_row(read, layout);
    debug!(start_row, "attendance rows begin");

    for row in start_row..start_row + layout.day_rows {
        let classification = classify_row(read, row, layout);
        match classification.kind {
            RowKind::Blank => {
                // Idempotent blanking of leftover template content.
                for col in layout.detail_cols.0..=layout.detail_cols.1 {
                    write_cell(sheet, row, col, "", &CellFormat::default());
                }
            }
            RowKind::NonWorking => {
                for col in layout.detail_cols.0..=layout.detail_cols.1 {
                    write_cell(
                        sheet,
                        row,
                        col,
                        &layout.non_working_mark,
                        &CellFormat::centered(),
                    );
                }
            }
            RowKind::Workday => {
                let date = classification.canonical_date.as_deref().unwrap_or("");
                let entry = reconcile(
                    date,
                    leaves,
                    &layout.clock_in_window.draw(),
                    &layout.clock_out_window.draw(),
                );
                write_workday(sheet, row, &entry, layout);
            }
        }
    }
}

fn write_workday(sheet: &mut Worksheet, row: u32, entry: &AttendanceEntry, layout: &SheetLayout) {
    write_cell(
        sheet,
        row,
        layout.clock_in_col,
        &entry.clock_in,
        &CellFormat::default(),
    );
    write_cell(
        sheet,
        row,
        layout.clock_out_col,
        &entry.clock_out,
        &CellFormat::default(),
    );
    write_cell(
        sheet,
        row,
        layout.remark_col,
        &entry.remark,
        &CellFormat::default(),
    );
    // The template keeps duration formulas beside the clock columns; left
    // alone they render a stray zero.
    for &col in &layout.formula_cols {
        write_cell(sheet, row, col, "", &CellFormat::default());
    }
}

/// Locate the header row and return the first data row after it.
fn scan_start_row(read: &Range<Data>, layout: &SheetLayout) -> u32 {
    let Some((_, end_col)) = read.end() else {
        return layout.fallback_start_row;
    };
    for row in 1..=layout.header_scan_rows {
        for col in 0..=end_col {
            let Some(value) = read.get_value((row - 1, col)) else {
                continue;
            };
            if value.to_string().contains(&layout.header_keyword) {
                return row + 1;
            }
        }
    }
    layout.fallback_start_row
}

/// Clear every write-view cell whose evaluated value is a bare zero, a
/// leftover of template formulas over rows that got no data. Non-anchor
/// merge members are skipped; they cannot be cleared individually.
fn sweep_stray_zeros(sheet: &mut Worksheet, read: &Range<Data>) {
    let (Some((start_row, start_col)), Some((end_row, end_col))) = (read.start(), read.end())
    else {
        return;
    };
    for row in start_row..=end_row {
        for col in start_col..=end_col {
            let Some(value) = read.get_value((row, col)) else {
                continue;
            };
            let text = value.to_string();
            let trimmed = text.trim();
            if trimmed != "0" && trimmed != "0.0" {
                continue;
            }
            let (sheet_row, sheet_col) = (row + 1, col + 1);
            if is_covered_member(sheet, sheet_row, sheet_col) {
                continue;
            }
            sheet.get_cell_mut((sheet_col, sheet_row)).set_value("");
        }
    }
}
