pub mod classify;
pub mod clock;
pub mod layout;
pub mod leave;
pub mod populate;
pub mod reconcile;
pub mod roster;
pub mod writer;

pub use classify::{RowClassification, RowKind};
pub use clock::TimeWindow;
pub use layout::SheetLayout;
pub use leave::{LeaveCategory, LeaveInterval, LeaveMap};
pub use populate::{PopulateError, populate, populate_with_layout};
pub use reconcile::{AttendanceEntry, LeavePolicy, reconcile};
pub use writer::{CellFormat, CellTarget, write_cell};
