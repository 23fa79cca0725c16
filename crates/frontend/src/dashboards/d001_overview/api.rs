use chrono::Utc;
use contracts::domain::c008_checklist::ChecklistBoard;
use contracts::shared::activity::ActivitySummary;

use crate::shared::config::AppConfig;
use crate::shared::storage::{submission_sink, BrowserStorage};

/// Counters for the overview cards, read from browser storage
pub fn load_summary(config: &AppConfig) -> ActivitySummary {
    let layout = config.layout();
    let board = ChecklistBoard::load(&BrowserStorage, &layout);
    ActivitySummary::collect(&submission_sink(layout), &board, config.get(), Utc::now())
}
