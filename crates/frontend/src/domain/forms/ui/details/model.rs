use chrono::{DateTime, Utc};
use contracts::enums::FormModule;
use contracts::shared::storage::{Draft, StorageLayout, StoreError};
use contracts::shared::submission::{SubmissionRecord, SubmissionSink, SubmitError};
use contracts::shared::wizard::FieldRegistry;
use gloo_timers::future::TimeoutFuture;

use crate::shared::config::AppConfig;
use crate::shared::storage::{draft_store, submission_sink};

/// Draft slot of the "new record" form; one per module.
const NEW_ITEM: &str = "new";

pub fn load_draft(layout: &StorageLayout, module: FormModule) -> Option<Draft<FieldRegistry>> {
    draft_store(layout.clone())
        .load(module, NEW_ITEM)
        .unwrap_or_else(|e| {
            log::warn!("draft of {} ignored: {}", module, e);
            None
        })
}

pub fn save_draft(
    layout: &StorageLayout,
    module: FormModule,
    fields: &FieldRegistry,
) -> Result<DateTime<Utc>, StoreError> {
    draft_store(layout.clone()).save(module, NEW_ITEM, fields)
}

pub fn clear_draft(layout: &StorageLayout, module: FormModule) {
    if let Err(e) = draft_store(layout.clone()).clear(module, NEW_ITEM) {
        log::warn!("draft of {} not cleared: {}", module, e);
    }
}

/// Stores the record after the configured latency.
pub async fn submit(
    config: &AppConfig,
    module: FormModule,
    fields: FieldRegistry,
) -> Result<SubmissionRecord, SubmitError> {
    TimeoutFuture::new(config.get().timing.submit_latency_ms).await;
    submission_sink(config.layout()).submit(module, fields).await
}
