pub mod aggregate;
pub mod board;

pub use aggregate::{Checklist, ChecklistItem, ChecklistKind, ChecklistStatus};
pub use board::{ChecklistBoard, ChecklistFilter, StatusCounts};
