use log::warn;

use super::UserInfo;
use crate::shared::storage::{load_json, save_json, KeyValueStore, StorageLayout, StoreError};

/// Persists the signed-in user between page loads.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, layout: &StorageLayout) -> Self {
        Self {
            store,
            key: layout.session_key(),
        }
    }

    /// Stored user; an unreadable entry counts as signed out.
    pub fn load(&self) -> Option<UserInfo> {
        load_json(&self.store, &self.key).unwrap_or_else(|e| {
            warn!("stored session ignored: {}", e);
            None
        })
    }

    pub fn save(&self, user: &UserInfo) -> Result<(), StoreError> {
        save_json(&self.store, &self.key, user)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_session_survives_reload() {
        let store = MemoryStore::new();
        let layout = StorageLayout::new("t");
        let sessions = SessionStore::new(store.clone(), &layout);
        assert_eq!(sessions.load(), None);

        sessions.save(&UserInfo::demo("demo@htl.com")).unwrap();
        let reopened = SessionStore::new(store.clone(), &layout);
        assert_eq!(reopened.load().unwrap().email, "demo@htl.com");

        reopened.clear().unwrap();
        assert_eq!(sessions.load(), None);

        store.set(&layout.session_key(), "garbage").unwrap();
        assert_eq!(sessions.load(), None);
    }
}
