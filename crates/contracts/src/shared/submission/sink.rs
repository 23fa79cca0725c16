use async_trait::async_trait;
use log::{debug, info};
use thiserror::Error;
use uuid::Uuid;

use super::SubmissionRecord;
use crate::enums::FormModule;
use crate::shared::storage::{load_json, save_json, KeyValueStore, StorageLayout, StoreError};
use crate::shared::wizard::FieldRegistry;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Persists a completed field registry.
///
/// `?Send`: hosts run on a single-threaded event loop.
#[async_trait(?Send)]
pub trait SubmissionSink {
    async fn submit(
        &self,
        module: FormModule,
        fields: FieldRegistry,
    ) -> Result<SubmissionRecord, SubmitError>;
}

/// Sink appending to one list per module in a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct StoreSubmissionSink<S> {
    store: S,
    layout: StorageLayout,
}

impl<S: KeyValueStore> StoreSubmissionSink<S> {
    pub fn new(store: S, layout: StorageLayout) -> Self {
        Self { store, layout }
    }

    /// Records for a module in submission order
    pub fn list(&self, module: FormModule) -> Result<Vec<SubmissionRecord>, StoreError> {
        Ok(load_json(&self.store, &self.layout.submissions_key(module))?.unwrap_or_default())
    }

    pub fn find(&self, module: FormModule, id: Uuid) -> Result<Option<SubmissionRecord>, StoreError> {
        Ok(self.list(module)?.into_iter().find(|r| r.id == id))
    }

    pub fn count(&self, module: FormModule) -> Result<usize, StoreError> {
        self.list(module).map(|records| records.len())
    }

    /// Append synchronously; `submit` is the async face of this.
    pub fn append(
        &self,
        module: FormModule,
        fields: FieldRegistry,
    ) -> Result<SubmissionRecord, StoreError> {
        let key = self.layout.submissions_key(module);
        let mut records = self.list(module)?;
        let record = SubmissionRecord::new(module, fields, records.len() + 1);
        records.push(record.clone());
        save_json(&self.store, &key, &records)?;
        debug!("{} now holds {} records", key, records.len());
        Ok(record)
    }
}

#[async_trait(?Send)]
impl<S: KeyValueStore> SubmissionSink for StoreSubmissionSink<S> {
    async fn submit(
        &self,
        module: FormModule,
        fields: FieldRegistry,
    ) -> Result<SubmissionRecord, SubmitError> {
        let record = self.append(module, fields)?;
        info!("{} submitted as {}", module, record.folio);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use crate::shared::wizard::FieldSpec;

    fn fields(value: &str) -> FieldRegistry {
        let specs = [FieldSpec::text("cliente", "Cliente")];
        let mut fields = FieldRegistry::seeded(specs.iter());
        fields.set("cliente", value.into()).unwrap();
        fields
    }

    #[tokio::test]
    async fn test_submit_appends_per_module() {
        let sink = StoreSubmissionSink::new(MemoryStore::new(), StorageLayout::new("t"));
        let first = sink.submit(FormModule::Quotation, fields("Acme")).await.unwrap();
        let second = sink.submit(FormModule::Quotation, fields("Beta")).await.unwrap();
        sink.submit(FormModule::SupportTicket, fields("Gamma")).await.unwrap();

        let quotes = sink.list(FormModule::Quotation).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0], first);
        assert_eq!(quotes[1], second);
        assert_ne!(first.id, second.id);
        assert!(first.folio.ends_with("-001"));
        assert!(second.folio.ends_with("-002"));
        assert_eq!(sink.count(FormModule::SupportTicket).unwrap(), 1);
        assert_eq!(sink.count(FormModule::Requisition).unwrap(), 0);

        let found = sink.find(FormModule::Quotation, second.id).unwrap().unwrap();
        assert_eq!(found.fields.text("cliente"), "Beta");
    }

    #[tokio::test]
    async fn test_corrupt_list_is_a_submit_error() {
        let store = MemoryStore::new();
        let layout = StorageLayout::new("t");
        store
            .set(&layout.submissions_key(FormModule::Quotation), "[{")
            .unwrap();
        let sink = StoreSubmissionSink::new(store, layout);

        let err = sink.submit(FormModule::Quotation, fields("Acme")).await.unwrap_err();
        assert!(matches!(err, SubmitError::Storage(StoreError::Corrupt { .. })));
    }
}
