use chrono::{DateTime, TimeZone, Utc};
use log::{debug, warn};

use super::aggregate::{Checklist, ChecklistItem, ChecklistKind, ChecklistStatus};
use crate::shared::storage::{load_json, save_json, KeyValueStore, StorageLayout, StoreError};

/// List filter: kind (None = all) plus a project-name search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistFilter {
    pub kind: Option<ChecklistKind>,
    pub search: String,
}

impl ChecklistFilter {
    pub fn matches(&self, checklist: &Checklist) -> bool {
        if let Some(kind) = self.kind {
            if checklist.kind != kind {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || checklist.project_name.to_lowercase().contains(&needle)
            || checklist.id.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: ChecklistStatus) -> usize {
        match status {
            ChecklistStatus::Pending => self.pending,
            ChecklistStatus::InProgress => self.in_progress,
            ChecklistStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

/// All checklists, persisted as one list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistBoard {
    checklists: Vec<Checklist>,
}

impl ChecklistBoard {
    pub fn new(checklists: Vec<Checklist>) -> Self {
        Self { checklists }
    }

    /// Stored board, or the seed data when nothing is stored yet.
    /// A corrupt entry falls back to the seed data as well.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, layout: &StorageLayout) -> Self {
        match load_json::<Vec<Checklist>, _>(store, &layout.checklists_key()) {
            Ok(Some(checklists)) => Self { checklists },
            Ok(None) => Self::seeded(),
            Err(e) => {
                warn!("checklists unreadable, using seed data: {}", e);
                Self::seeded()
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        layout: &StorageLayout,
    ) -> Result<(), StoreError> {
        save_json(store, &layout.checklists_key(), &self.checklists)?;
        debug!("saved {} checklists", self.checklists.len());
        Ok(())
    }

    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }

    pub fn get(&self, id: &str) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Checklist> {
        self.checklists.iter_mut().find(|c| c.id == id)
    }

    pub fn add(&mut self, checklist: Checklist) {
        self.checklists.push(checklist);
    }

    pub fn toggle_item(
        &mut self,
        checklist_id: &str,
        item_id: &str,
        now: DateTime<Utc>,
    ) -> Option<ChecklistStatus> {
        self.get_mut(checklist_id)?.toggle_item(item_id, now)
    }

    pub fn set_item_notes(&mut self, checklist_id: &str, item_id: &str, notes: &str) -> bool {
        self.get_mut(checklist_id)
            .map(|c| c.set_item_notes(item_id, notes))
            .unwrap_or(false)
    }

    pub fn filtered(&self, filter: &ChecklistFilter) -> Vec<&Checklist> {
        self.checklists.iter().filter(|c| filter.matches(c)).collect()
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for c in &self.checklists {
            match c.status {
                ChecklistStatus::Pending => counts.pending += 1,
                ChecklistStatus::InProgress => counts.in_progress += 1,
                ChecklistStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    /// Demo data shown on first start
    pub fn seeded() -> Self {
        let at = |d: u32, h: u32, m: u32| {
            Utc.with_ymd_and_hms(2024, 2, d, h, m, 0)
                .single()
                .unwrap_or_else(Utc::now)
        };
        Self::new(vec![
            Checklist {
                id: "1".into(),
                project_name: "Proyecto Alpha".into(),
                kind: ChecklistKind::Fat,
                status: ChecklistStatus::Completed,
                created_at: at(10, 10, 0),
                completed_at: Some(at(12, 15, 30)),
                items: vec![
                    ChecklistItem::new("1-1", "Verificación de especificaciones técnicas").checked(),
                    ChecklistItem::new("1-2", "Prueba de funcionalidad principal").checked(),
                    ChecklistItem::new("1-3", "Revisión de documentación").checked(),
                ],
            },
            Checklist {
                id: "2".into(),
                project_name: "Proyecto Beta".into(),
                kind: ChecklistKind::Sat,
                status: ChecklistStatus::InProgress,
                created_at: at(11, 9, 0),
                completed_at: None,
                items: vec![
                    ChecklistItem::new("2-1", "Instalación en sitio").checked(),
                    ChecklistItem::new("2-2", "Configuración de red").checked(),
                    ChecklistItem::new("2-3", "Pruebas de integración"),
                    ChecklistItem::new("2-4", "Capacitación al cliente"),
                ],
            },
            Checklist {
                id: "3".into(),
                project_name: "Proyecto Gamma".into(),
                kind: ChecklistKind::Fat,
                status: ChecklistStatus::Pending,
                created_at: at(13, 8, 0),
                completed_at: None,
                items: vec![
                    ChecklistItem::new("3-1", "Inspección visual de componentes"),
                    ChecklistItem::new("3-2", "Prueba de voltaje"),
                    ChecklistItem::new("3-3", "Prueba de corriente"),
                ],
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_seed_counts() {
        let board = ChecklistBoard::seeded();
        let counts = board.counts();
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(board.get("2").unwrap().progress_percent(), 50);
    }

    #[test]
    fn test_filter_by_kind_and_search() {
        let board = ChecklistBoard::seeded();
        let fat = ChecklistFilter {
            kind: Some(ChecklistKind::Fat),
            search: String::new(),
        };
        assert_eq!(board.filtered(&fat).len(), 2);

        let search = ChecklistFilter {
            kind: None,
            search: "  BETA ".into(),
        };
        let hits = board.filtered(&search);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let none = ChecklistFilter {
            kind: Some(ChecklistKind::Sat),
            search: "gamma".into(),
        };
        assert!(board.filtered(&none).is_empty());
    }

    #[test]
    fn test_load_save_and_toggle() {
        let store = MemoryStore::new();
        let layout = StorageLayout::new("t");
        let mut board = ChecklistBoard::load(&store, &layout);
        assert_eq!(board, ChecklistBoard::seeded());

        let now = Utc::now();
        board.toggle_item("2", "2-3", now);
        assert_eq!(
            board.toggle_item("2", "2-4", now),
            Some(ChecklistStatus::Completed)
        );
        assert!(board.set_item_notes("2", "2-4", "Capacitación a 4 operadores"));
        board.add(Checklist::new("Proyecto Delta", ChecklistKind::Sat, &["Arranque"]));
        board.save(&store, &layout).unwrap();

        let reloaded = ChecklistBoard::load(&store, &layout);
        assert_eq!(reloaded.checklists().len(), 4);
        assert_eq!(reloaded.counts().completed, 2);
        assert_eq!(reloaded.get("2").unwrap().items[3].notes, "Capacitación a 4 operadores");
    }

    #[test]
    fn test_corrupt_store_falls_back_to_seed() {
        let store = MemoryStore::new();
        let layout = StorageLayout::new("t");
        store.set(&layout.checklists_key(), "oops").unwrap();
        assert_eq!(ChecklistBoard::load(&store, &layout).checklists().len(), 3);
    }
}
