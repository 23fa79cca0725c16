use chrono::{DateTime, Utc};
use contracts::domain::c008_checklist::{
    Checklist, ChecklistBoard, ChecklistFilter, ChecklistKind, StatusCounts,
};
use contracts::enums::FormModule;
use contracts::shared::storage::{DraftStore, StorageLayout};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::config::AppConfig;
use crate::shared::connectivity::ConnectivityContext;
use crate::shared::storage::{draft_store, BrowserStorage};

#[derive(Clone, Copy)]
pub struct ChecklistBoardViewModel {
    pub board: RwSignal<ChecklistBoard>,
    pub filter: RwSignal<ChecklistFilter>,
    pub selected: RwSignal<Option<String>>,
    pub saved_at: RwSignal<Option<DateTime<Utc>>>,
    /// Edits not yet written to the board entry
    unsaved: RwSignal<bool>,
    layout: StoredValue<StorageLayout>,
    connectivity: ConnectivityContext,
}

impl ChecklistBoardViewModel {
    /// Stored board with any newer per-checklist drafts laid over it.
    pub fn load(config: &AppConfig, connectivity: ConnectivityContext) -> Self {
        let layout = config.layout();
        let mut board = ChecklistBoard::load(&BrowserStorage, &layout);
        let drafts = draft_store(layout.clone());
        let ids: Vec<String> = board.checklists().iter().map(|c| c.id.clone()).collect();
        let mut restored = 0;
        for id in ids {
            if let Some(draft) = load_checklist_draft(&drafts, &id) {
                if let Some(slot) = board.get_mut(&id) {
                    *slot = draft;
                    restored += 1;
                }
            }
        }
        if restored > 0 {
            log::info!("{} checklist drafts restored", restored);
        }

        Self {
            board: RwSignal::new(board),
            filter: RwSignal::new(ChecklistFilter::default()),
            selected: RwSignal::new(None),
            saved_at: RwSignal::new(None),
            unsaved: RwSignal::new(restored > 0),
            layout: StoredValue::new(layout),
            connectivity,
        }
    }

    pub fn visible(&self) -> Vec<Checklist> {
        let filter = self.filter.get();
        self.board
            .with(|b| b.filtered(&filter).into_iter().cloned().collect())
    }

    pub fn counts(&self) -> StatusCounts {
        self.board.with(|b| b.counts())
    }

    pub fn selected_checklist(&self) -> Option<Checklist> {
        let id = self.selected.get()?;
        self.board.with(|b| b.get(&id).cloned())
    }

    pub fn set_kind(&self, kind: Option<ChecklistKind>) {
        self.filter.update(|f| f.kind = kind);
    }

    pub fn set_search(&self, search: String) {
        self.filter.update(|f| f.search = search);
    }

    pub fn select(&self, id: &str) {
        self.selected.set(Some(id.to_string()));
    }

    pub fn toggle_item(&self, checklist_id: &str, item_id: &str) {
        let status = self
            .board
            .try_update(|b| b.toggle_item(checklist_id, item_id, Utc::now()))
            .flatten();
        if let Some(status) = status {
            log::debug!("checklist {} is now {:?}", checklist_id, status);
            self.write_draft(checklist_id);
        }
    }

    pub fn set_notes(&self, checklist_id: &str, item_id: &str, notes: &str) {
        let changed = self
            .board
            .try_update(|b| b.set_item_notes(checklist_id, item_id, notes))
            .unwrap_or(false);
        if changed {
            self.write_draft(checklist_id);
        }
    }

    /// Overwrites the checklist's draft slot; the board entry follows on the
    /// next autosave tick.
    fn write_draft(&self, checklist_id: &str) {
        let Some(checklist) = self.board.with_untracked(|b| b.get(checklist_id).cloned()) else {
            return;
        };
        let drafts = self.layout.with_value(|l| draft_store(l.clone()));
        if let Err(e) = drafts.save(FormModule::Checklist, checklist_id, &checklist) {
            log::warn!("checklist draft not saved: {}", e);
        }
        self.unsaved.set(true);
        self.connectivity.record_write();
    }

    /// Writes the board and drops the draft slots it now covers.
    pub fn persist(&self) -> bool {
        let layout = self.layout.get_value();
        let result = self.board.with_untracked(|b| {
            b.save(&BrowserStorage, &layout)?;
            let drafts = draft_store(layout.clone());
            for c in b.checklists() {
                drafts.clear(FormModule::Checklist, &c.id)?;
            }
            Ok::<_, contracts::shared::storage::StoreError>(())
        });
        match result {
            Ok(()) => {
                self.unsaved.set(false);
                self.saved_at.set(Some(Utc::now()));
                true
            }
            Err(e) => {
                log::warn!("checklists not saved: {}", e);
                false
            }
        }
    }

    /// Persists pending edits every `interval_secs` until the page is disposed.
    pub fn start_autosave(&self, interval_secs: u32) {
        let vm = *self;
        let interval_ms = interval_secs.max(1).saturating_mul(1000);
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                TimeoutFuture::new(interval_ms).await;
                let Some(unsaved) = vm.unsaved.try_get_untracked() else {
                    log::debug!("checklist autosave stopped");
                    break;
                };
                if unsaved {
                    vm.persist();
                }
            }
        });
    }
}

fn load_checklist_draft(drafts: &DraftStore<BrowserStorage>, id: &str) -> Option<Checklist> {
    drafts
        .load::<Checklist>(FormModule::Checklist, id)
        .unwrap_or_else(|e| {
            log::warn!("checklist draft {} ignored: {}", id, e);
            None
        })
        .map(|d| d.payload)
}
