use chrono::{DateTime, Utc};
use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{load_json, save_json, KeyValueStore, StorageLayout, StoreError};
use crate::enums::FormModule;

/// Snapshot saved in a draft slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft<T> {
    pub saved_at: DateTime<Utc>,
    pub payload: T,
}

/// One overwrite-on-save slot per (module, item id).
#[derive(Debug, Clone)]
pub struct DraftStore<S> {
    store: S,
    layout: StorageLayout,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S, layout: StorageLayout) -> Self {
        Self { store, layout }
    }

    pub fn save<T: Serialize>(
        &self,
        module: FormModule,
        item_id: &str,
        payload: &T,
    ) -> Result<DateTime<Utc>, StoreError> {
        let saved_at = Utc::now();
        let key = self.layout.draft_key(module, item_id);
        save_json(
            &self.store,
            &key,
            &Draft {
                saved_at,
                payload,
            },
        )?;
        debug!("draft saved: {}", key);
        Ok(saved_at)
    }

    pub fn load<T: DeserializeOwned>(
        &self,
        module: FormModule,
        item_id: &str,
    ) -> Result<Option<Draft<T>>, StoreError> {
        load_json(&self.store, &self.layout.draft_key(module, item_id))
    }

    pub fn clear(&self, module: FormModule, item_id: &str) -> Result<(), StoreError> {
        self.store.remove(&self.layout.draft_key(module, item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use crate::shared::wizard::{FieldRegistry, FieldSpec};

    #[test]
    fn test_save_overwrites_slot() {
        let drafts = DraftStore::new(MemoryStore::new(), StorageLayout::new("t"));
        let specs = [FieldSpec::text("orderNumber", "Orden")];
        let mut fields = FieldRegistry::seeded(specs.iter());

        fields.set("orderNumber", "OS-1".into()).unwrap();
        drafts.save(FormModule::MaterialExit, "new", &fields).unwrap();
        fields.set("orderNumber", "OS-2".into()).unwrap();
        drafts.save(FormModule::MaterialExit, "new", &fields).unwrap();

        let draft: Draft<FieldRegistry> = drafts
            .load(FormModule::MaterialExit, "new")
            .unwrap()
            .unwrap();
        assert_eq!(draft.payload.text("orderNumber"), "OS-2");

        drafts.clear(FormModule::MaterialExit, "new").unwrap();
        let gone: Option<Draft<FieldRegistry>> =
            drafts.load(FormModule::MaterialExit, "new").unwrap();
        assert!(gone.is_none());
    }

    #[test]
    fn test_slots_are_per_item() {
        let drafts = DraftStore::new(MemoryStore::new(), StorageLayout::new("t"));
        drafts.save(FormModule::Checklist, "1", &"one").unwrap();
        drafts.save(FormModule::Checklist, "2", &"two").unwrap();
        let one: Draft<String> = drafts.load(FormModule::Checklist, "1").unwrap().unwrap();
        assert_eq!(one.payload, "one");
    }
}
