use umya_spreadsheet::{HorizontalAlignmentValues, VerticalAlignmentValues, Worksheet};

/// 1-based sheet coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

/// Inclusive rectangle of a merged region, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.start.row && row <= self.end.row && col >= self.start.col && col <= self.end.col
    }
}

/// Where a write addressed at a coordinate actually lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTarget {
    Ordinary(CellRef),
    /// Member of a merged region; only the top-left anchor stores a value
    /// in the underlying format.
    MergeAnchor { anchor: CellRef, region: CellRange },
}

impl CellTarget {
    /// The cell a write resolves to.
    pub fn cell(&self) -> CellRef {
        match self {
            CellTarget::Ordinary(cell) => *cell,
            CellTarget::MergeAnchor { anchor, .. } => *anchor,
        }
    }
}

/// Optional formatting applied together with a write. Alignment properties
/// not selected here are left as the template had them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFormat {
    pub center: bool,
    pub wrap: bool,
}

impl CellFormat {
    pub fn centered() -> Self {
        Self {
            center: true,
            wrap: false,
        }
    }
}

/// Resolve a coordinate against the sheet's declared merged regions.
/// Coordinates inside no region are ordinary cells, never an error.
pub fn resolve_target(sheet: &Worksheet, row: u32, col: u32) -> CellTarget {
    for merge in sheet.get_merge_cells() {
        if let Some(region) = parse_range(&merge.get_range()) {
            if region.contains(row, col) {
                return CellTarget::MergeAnchor {
                    anchor: region.start,
                    region,
                };
            }
        }
    }
    CellTarget::Ordinary(CellRef { row, col })
}

/// True for merge members other than the anchor; such cells cannot hold a
/// value of their own.
pub fn is_covered_member(sheet: &Worksheet, row: u32, col: u32) -> bool {
    match resolve_target(sheet, row, col) {
        CellTarget::MergeAnchor { anchor, .. } => anchor.row != row || anchor.col != col,
        CellTarget::Ordinary(_) => false,
    }
}

/// Write a value at `(row, col)`, redirecting members of a merged region to
/// the region's anchor. Without the redirection such writes silently fail
/// to persist.
pub fn write_cell(sheet: &mut Worksheet, row: u32, col: u32, value: &str, format: &CellFormat) {
    let CellRef { row, col } = resolve_target(sheet, row, col).cell();
    // umya coordinate tuples are (col, row), 1-based.
    sheet.get_cell_mut((col, row)).set_value(value);

    if format.center || format.wrap {
        let alignment = sheet.get_style_mut((col, row)).get_alignment_mut();
        if format.center {
            alignment.set_horizontal(HorizontalAlignmentValues::Center);
            alignment.set_vertical(VerticalAlignmentValues::Center);
        }
        if format.wrap {
            alignment.set_wrap_text(true);
        }
    }
}

/// Parse an `A1` or `A1:B2` reference into a 1-based rectangle.
pub fn parse_range(text: &str) -> Option<CellRange> {
    let (first, second) = match text.split_once(':') {
        Some((first, second)) => (first, second),
        None => (text, text),
    };
    let first = parse_cell_ref(first)?;
    let second = parse_cell_ref(second)?;
    Some(CellRange {
        start: CellRef {
            row: first.row.min(second.row),
            col: first.col.min(second.col),
        },
        end: CellRef {
            row: first.row.max(second.row),
            col: first.col.max(second.col),
        },
    })
}

fn parse_cell_ref(text: &str) -> Option<CellRef> {
    let text = text.trim();
    let digits_at = text.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = text.split_at(digits_at);
    let col = column_index(letters)?;
    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(CellRef { row, col })
}

fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut col: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        col = col * 26 + (ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }
    Some(col)
}
