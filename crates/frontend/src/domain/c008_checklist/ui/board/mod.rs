//! FAT/SAT checklist board
//!
//! - view_model.rs: board state, edits, draft slots and autosave
//! - view.rs: list, filters and the item editor

mod view;
mod view_model;

pub use view::ChecklistBoardPage;
pub use view_model::ChecklistBoardViewModel;
