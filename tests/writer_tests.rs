use attendance_tool::writer::{
    CellFormat, CellTarget, is_covered_member, parse_range, resolve_target, write_cell,
};

fn book_with_merge() -> umya_spreadsheet::Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    book.get_sheet_mut(&0).unwrap().add_merge_cells("B2:D3");
    book
}

#[test]
fn member_writes_land_on_the_anchor() {
    let mut book = book_with_merge();
    let sheet = book.get_sheet_mut(&0).unwrap();
    // D3 is the bottom-right member of B2:D3.
    write_cell(sheet, 3, 4, "hello", &CellFormat::default());
    assert_eq!(sheet.get_value("B2"), "hello");
    assert_eq!(sheet.get_value("D3"), "");
}

#[test]
fn anchor_writes_stay_on_the_anchor() {
    let mut book = book_with_merge();
    let sheet = book.get_sheet_mut(&0).unwrap();
    write_cell(sheet, 2, 2, "anchored", &CellFormat::default());
    assert_eq!(sheet.get_value("B2"), "anchored");
}

#[test]
fn ordinary_cells_write_directly() {
    let mut book = book_with_merge();
    let sheet = book.get_sheet_mut(&0).unwrap();
    write_cell(sheet, 5, 1, "plain", &CellFormat::default());
    assert_eq!(sheet.get_value("A5"), "plain");
}

#[test]
fn formatted_writes_keep_their_value() {
    let mut book = book_with_merge();
    let sheet = book.get_sheet_mut(&0).unwrap();
    write_cell(sheet, 6, 2, "/", &CellFormat::centered());
    write_cell(
        sheet,
        7,
        2,
        "wrapped",
        &CellFormat {
            center: false,
            wrap: true,
        },
    );
    assert_eq!(sheet.get_value("B6"), "/");
    assert_eq!(sheet.get_value("B7"), "wrapped");
}

#[test]
fn resolve_reports_merge_membership() {
    let book = book_with_merge();
    let sheet = book.get_sheet(&0).unwrap();
    match resolve_target(sheet, 2, 3) {
        CellTarget::MergeAnchor { anchor, region } => {
            assert_eq!((anchor.row, anchor.col), (2, 2));
            assert_eq!((region.start.row, region.start.col), (2, 2));
            assert_eq!((region.end.row, region.end.col), (3, 4));
        }
        CellTarget::Ordinary(_) => panic!("C2 is inside B2:D3"),
    }
    assert!(matches!(
        resolve_target(sheet, 1, 1),
        CellTarget::Ordinary(_)
    ));
}

#[test]
fn covered_members_are_detected() {
    let book = book_with_merge();
    let sheet = book.get_sheet(&0).unwrap();
    assert!(is_covered_member(sheet, 2, 3));
    assert!(is_covered_member(sheet, 3, 4));
    assert!(!is_covered_member(sheet, 2, 2));
    assert!(!is_covered_member(sheet, 1, 1));
}

#[test]
fn range_parsing() {
    let range = parse_range("B2:D3").unwrap();
    assert_eq!((range.start.row, range.start.col), (2, 2));
    assert_eq!((range.end.row, range.end.col), (3, 4));

    let single = parse_range("AA10").unwrap();
    assert_eq!((single.start.row, single.start.col), (10, 27));
    assert_eq!(single.start, single.end);

    // Reversed corners normalize to top-left/bottom-right.
    let reversed = parse_range("D3:B2").unwrap();
    assert_eq!((reversed.start.row, reversed.start.col), (2, 2));
    assert_eq!((reversed.end.row, reversed.end.col), (3, 4));

    assert_eq!(parse_range("garbage"), None);
    assert_eq!(parse_range(""), None);
}
