use log::warn;

use super::{KeyValueStore, StorageLayout, StoreError};

/// Persisted scalar behind the "pending sync" badge.
#[derive(Debug, Clone)]
pub struct PendingSyncCounter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PendingSyncCounter<S> {
    pub fn new(store: S, layout: &StorageLayout) -> Self {
        Self {
            store,
            key: layout.pending_sync_key(),
        }
    }

    /// Stored count; an unreadable value counts as zero.
    pub fn get(&self) -> u32 {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("pending sync counter holds '{}', treating as 0", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!("pending sync counter unreadable: {}", e);
                0
            }
        }
    }

    pub fn set(&self, count: u32) -> Result<(), StoreError> {
        self.store.set(&self.key, &count.to_string())
    }

    pub fn increment(&self) -> Result<u32, StoreError> {
        let next = self.get().saturating_add(1);
        self.set(next)?;
        Ok(next)
    }

    pub fn reset(&self) -> Result<(), StoreError> {
        self.set(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_counter_roundtrip_and_garbage() {
        let store = MemoryStore::new();
        let counter = PendingSyncCounter::new(store.clone(), &StorageLayout::new("t"));
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.increment().unwrap(), 1);
        assert_eq!(counter.increment().unwrap(), 2);
        counter.reset().unwrap();
        assert_eq!(counter.get(), 0);

        store.set("t:pending_sync", "lots").unwrap();
        assert_eq!(counter.get(), 0);
    }
}
