pub mod c008_checklist;
pub mod forms;
