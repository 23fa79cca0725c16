use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Enums
// ============================================================================

/// Factory or Site Acceptance Test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChecklistKind {
    Fat,
    Sat,
}

impl ChecklistKind {
    pub fn code(&self) -> &'static str {
        match self {
            ChecklistKind::Fat => "FAT",
            ChecklistKind::Sat => "SAT",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ChecklistKind::Fat => "checklists.fat",
            ChecklistKind::Sat => "checklists.sat",
        }
    }

    pub fn all() -> Vec<ChecklistKind> {
        vec![ChecklistKind::Fat, ChecklistKind::Sat]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistStatus {
    Pending,
    InProgress,
    Completed,
}

impl ChecklistStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            ChecklistStatus::Pending => "status.pending",
            ChecklistStatus::InProgress => "status.inProgress",
            ChecklistStatus::Completed => "status.completed",
        }
    }

    pub fn all() -> Vec<ChecklistStatus> {
        vec![
            ChecklistStatus::Pending,
            ChecklistStatus::InProgress,
            ChecklistStatus::Completed,
        ]
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub description: String,
    pub checked: bool,
    #[serde(default)]
    pub notes: String,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            checked: false,
            notes: String::new(),
        }
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// One FAT/SAT check run for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub project_name: String,
    #[serde(rename = "type")]
    pub kind: ChecklistKind,
    pub status: ChecklistStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// New pending checklist; item ids are `<checklist id>-<n>`
    pub fn new(project_name: impl Into<String>, kind: ChecklistKind, items: &[&str]) -> Self {
        let id = Uuid::new_v4().to_string();
        let items = items
            .iter()
            .enumerate()
            .map(|(i, d)| ChecklistItem::new(format!("{}-{}", id, i + 1), *d))
            .collect();
        Self {
            id,
            project_name: project_name.into(),
            kind,
            status: ChecklistStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
            items,
        }
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Rounded share of checked items, 0 for an empty checklist
    pub fn progress_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let pct = (self.checked_count() as f64 / self.items.len() as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.checked)
    }

    /// Flip one item and recompute status. Returns the new status, or
    /// `None` if no item has that id.
    pub fn toggle_item(&mut self, item_id: &str, now: DateTime<Utc>) -> Option<ChecklistStatus> {
        let item = self.items.iter_mut().find(|i| i.id == item_id)?;
        item.checked = !item.checked;

        if self.is_complete() {
            self.status = ChecklistStatus::Completed;
            self.completed_at = Some(now);
        } else {
            self.status = ChecklistStatus::InProgress;
            self.completed_at = None;
        }
        Some(self.status)
    }

    pub fn set_item_notes(&mut self, item_id: &str, notes: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.notes = notes.into();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Checklist {
        let mut c = Checklist::new(
            "Proyecto Gamma",
            ChecklistKind::Fat,
            &["Inspección visual", "Prueba de voltaje", "Prueba de corriente"],
        );
        c.id = "3".into();
        c
    }

    #[test]
    fn test_toggle_recomputes_status() {
        let mut c = sample();
        let ids: Vec<String> = c.items.iter().map(|i| i.id.clone()).collect();
        let now = Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap();

        assert_eq!(c.toggle_item(&ids[0], now), Some(ChecklistStatus::InProgress));
        assert_eq!(c.progress_percent(), 33);
        c.toggle_item(&ids[1], now);
        assert_eq!(c.toggle_item(&ids[2], now), Some(ChecklistStatus::Completed));
        assert_eq!(c.completed_at, Some(now));
        assert_eq!(c.progress_percent(), 100);

        // unchecking drops completion
        assert_eq!(c.toggle_item(&ids[2], now), Some(ChecklistStatus::InProgress));
        assert_eq!(c.completed_at, None);
        assert_eq!(c.toggle_item("missing", now), None);
    }

    #[test]
    fn test_progress_rounding() {
        let mut c = Checklist::new("P", ChecklistKind::Sat, &["a", "b", "c"]);
        c.items[0].checked = true;
        c.items[1].checked = true;
        assert_eq!(c.progress_percent(), 67);
        assert_eq!(Checklist::new("P", ChecklistKind::Sat, &[]).progress_percent(), 0);
    }

    #[test]
    fn test_notes_and_wire_names() {
        let mut c = sample();
        let id = c.items[0].id.clone();
        assert!(c.set_item_notes(&id, "OK - 220.5V"));
        assert!(!c.set_item_notes("nope", "x"));

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "FAT");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["projectName"], "Proyecto Gamma");
        assert_eq!(json["items"][0]["notes"], "OK - 220.5V");
    }
}
