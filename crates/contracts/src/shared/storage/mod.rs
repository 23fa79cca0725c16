//! Key/value persistence: the store abstraction, key layout and the small
//! typed stores built on top of it (drafts, pending-sync counter).

pub mod drafts;
pub mod layout;
pub mod memory;
pub mod pending;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use drafts::{Draft, DraftStore};
pub use layout::StorageLayout;
pub use memory::MemoryStore;
pub use pending::PendingSyncCounter;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error("stored value under '{key}' is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value backend (browser `localStorage`, in-memory map).
///
/// Methods take `&self`; implementations use interior mutability the same
/// way `localStorage` does.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and decode a JSON value. A missing key is `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<u32>, _>(&store, "k").unwrap(), None);

        save_json(&store, "k", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(load_json::<Vec<u32>, _>(&store, "k").unwrap(), Some(vec![1, 2, 3]));

        store.set("bad", "{not json").unwrap();
        let err = load_json::<Vec<u32>, _>(&store, "bad").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "bad"));
    }
}
