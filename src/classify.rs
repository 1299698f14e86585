use calamine::{Data, Range};
use chrono::Datelike as _;

use crate::layout::SheetLayout;

/// Native dates before this year are zero-date artifacts left behind by
/// date arithmetic in the template, not real attendance dates.
const EPOCH_CUTOFF_YEAR: i32 = 1905;

/// Cell texts treated as absent content.
const BLANK_SENTINELS: [&str; 4] = ["", "0", "0.0", "None"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    NonWorking,
    Workday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClassification {
    pub kind: RowKind,
    /// Canonical `MM/DD` date, or `None` when the date cell is unusable.
    pub canonical_date: Option<String>,
}

impl RowClassification {
    fn blank() -> Self {
        Self {
            kind: RowKind::Blank,
            canonical_date: None,
        }
    }
}

/// Classify one sheet row of the read view. `row` is 1-based.
pub fn classify_row(read: &Range<Data>, row: u32, layout: &SheetLayout) -> RowClassification {
    let empty = Data::Empty;
    let date = read
        .get_value((row.saturating_sub(1), layout.date_col.saturating_sub(1)))
        .unwrap_or(&empty);
    let desc = read
        .get_value((row.saturating_sub(1), layout.desc_col.saturating_sub(1)))
        .unwrap_or(&empty);
    classify_cells(date, desc, layout)
}

/// Classification depends only on the two cell values; leave data is never
/// consulted.
pub fn classify_cells(date: &Data, desc: &Data, layout: &SheetLayout) -> RowClassification {
    if is_blank_cell(date) || is_blank_cell(desc) || is_epoch_artifact(date) {
        return RowClassification::blank();
    }

    let canonical_date = canonical_date(date);
    let desc_text = desc.to_string();
    let kind = if desc_text.contains(&layout.holiday_keyword) {
        RowKind::NonWorking
    } else if desc_text.contains(&layout.workday_keyword) {
        RowKind::Workday
    } else {
        // A description matching neither keyword is a no-op row, not an error.
        RowKind::Blank
    };

    RowClassification {
        kind,
        canonical_date,
    }
}

/// Normalize a date cell to `MM/DD`. Malformed values degrade to `None`,
/// which never matches a leave entry.
pub fn canonical_date(value: &Data) -> Option<String> {
    match value {
        Data::Empty => None,
        Data::DateTime(dt) => {
            let dt = dt.as_datetime()?;
            Some(format!("{:02}/{:02}", dt.month(), dt.day()))
        }
        other => {
            let text = other.to_string();
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            if text.contains('/') {
                return Some(text.to_string());
            }
            // ISO-like text: keep characters 5..10, `-` becomes `/`.
            let tail: Vec<char> = text
                .chars()
                .skip(5)
                .take(5)
                .map(|c| if c == '-' { '/' } else { c })
                .collect();
            if tail.len() == 5 {
                Some(tail.into_iter().collect())
            } else {
                None
            }
        }
    }
}

fn is_blank_cell(value: &Data) -> bool {
    if matches!(value, Data::Empty) {
        return true;
    }
    let text = value.to_string();
    BLANK_SENTINELS.contains(&text.trim())
}

fn is_epoch_artifact(value: &Data) -> bool {
    match value {
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => dt.year() < EPOCH_CUTOFF_YEAR,
            // A serial the date system cannot represent is an artifact too.
            None => true,
        },
        _ => false,
    }
}
