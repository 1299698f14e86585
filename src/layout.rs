use crate::clock::TimeWindow;

/// Template geometry and matching rules for the attendance sheet.
///
/// Everything coupled to the workbook template lives here: cell coordinates,
/// column positions, keyword strings, and the clock-time windows. `Default`
/// matches the shipped monthly sign-in template. All rows and columns are
/// 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Preferred sheet name; the first sheet is used when no sheet has it.
    pub sheet_name: String,
    /// (row, col) of the employee name cell.
    pub name_cell: (u32, u32),
    /// Prefix written before the employee name.
    pub name_label: String,
    /// The header row is searched within rows `1..=header_scan_rows`.
    pub header_scan_rows: u32,
    /// A row containing this text anywhere is the header row.
    pub header_keyword: String,
    /// First data row when no header row is found.
    pub fallback_start_row: u32,
    /// Number of date rows scanned, one per day of the month.
    pub day_rows: u32,
    pub date_col: u32,
    pub desc_col: u32,
    pub clock_in_col: u32,
    pub clock_out_col: u32,
    pub remark_col: u32,
    /// Inclusive span of the five detail columns.
    pub detail_cols: (u32, u32),
    /// Columns holding template formulas that are blanked on workdays so
    /// they cannot render a stray zero.
    pub formula_cols: [u32; 2],
    pub holiday_keyword: String,
    pub workday_keyword: String,
    pub clock_in_window: TimeWindow,
    pub clock_out_window: TimeWindow,
    /// Glyph written across the detail columns on non-working days.
    pub non_working_mark: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: "海瀧簽到表".to_string(),
            name_cell: (2, 2),
            name_label: "姓名：  ".to_string(),
            header_scan_rows: 10,
            header_keyword: "序號".to_string(),
            fallback_start_row: 4,
            day_rows: 31,
            date_col: 2,
            desc_col: 4,
            clock_in_col: 5,
            clock_out_col: 7,
            remark_col: 9,
            detail_cols: (5, 9),
            formula_cols: [6, 8],
            holiday_keyword: "假日".to_string(),
            workday_keyword: "工作".to_string(),
            clock_in_window: TimeWindow::new(8, 50, 9, 5),
            clock_out_window: TimeWindow::new(18, 0, 18, 10),
            non_working_mark: "/".to_string(),
        }
    }
}
