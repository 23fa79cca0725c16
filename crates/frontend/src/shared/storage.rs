//! `localStorage` adapter and the typed stores built on it.

use contracts::shared::storage::{
    DraftStore, KeyValueStore, PendingSyncCounter, StorageLayout, StoreError,
};
use contracts::shared::submission::StoreSubmissionSink;
use contracts::system::auth::SessionStore;
use wasm_bindgen::JsValue;
use web_sys::window;

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn get_local_storage() -> Result<web_sys::Storage, StoreError> {
    window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StoreError::Unavailable(js_error(e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

/// The browser's `localStorage` as a [`KeyValueStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: js_error(e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: js_error(e),
            })
    }
}

pub fn submission_sink(layout: StorageLayout) -> StoreSubmissionSink<BrowserStorage> {
    StoreSubmissionSink::new(BrowserStorage, layout)
}

pub fn draft_store(layout: StorageLayout) -> DraftStore<BrowserStorage> {
    DraftStore::new(BrowserStorage, layout)
}

pub fn pending_counter(layout: &StorageLayout) -> PendingSyncCounter<BrowserStorage> {
    PendingSyncCounter::new(BrowserStorage, layout)
}

pub fn session_store(layout: &StorageLayout) -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage, layout)
}
