use super::model;
use chrono::{DateTime, Utc};
use contracts::enums::FormModule;
use contracts::shared::submission::SubmissionRecord;
use contracts::shared::wizard::{
    FieldValue, StepOutcome, StepProgress, ValidationError, Wizard, WizardDefinition,
};
use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::config::AppConfig;
use crate::shared::connectivity::ConnectivityContext;
use crate::shared::i18n::I18nContext;
use crate::shared::toast::ToastService;

/// ViewModel of one wizard page. The wizard itself owns every rule; this
/// only drives it from UI events and talks to storage.
#[derive(Clone, Copy)]
pub struct WizardViewModel {
    pub module: FormModule,
    pub wizard: RwSignal<Wizard>,
    pub draft_saved_at: RwSignal<Option<DateTime<Utc>>>,
    pub error: RwSignal<Option<String>>,
}

impl WizardViewModel {
    pub fn new(definition: Arc<WizardDefinition>) -> Self {
        Self {
            module: definition.module,
            wizard: RwSignal::new(Wizard::new(definition)),
            draft_saved_at: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    /// Loads the module's saved draft; returns true when one was applied.
    pub fn restore_draft(&self, config: &AppConfig) -> bool {
        let Some(draft) = model::load_draft(&config.layout(), self.module) else {
            return false;
        };
        let restored = self
            .wizard
            .try_update(|w| w.restore_draft(&draft.payload))
            .unwrap_or(0);
        log::debug!("{}: {} fields restored from draft", self.module, restored);
        self.draft_saved_at.set(Some(draft.saved_at));
        restored > 0
    }

    pub fn value(&self, key: &str) -> String {
        self.wizard.with(|w| w.fields().text(key))
    }

    pub fn checked(&self, key: &str) -> bool {
        self.wizard
            .with(|w| w.fields().get(key).and_then(FieldValue::as_bool))
            .unwrap_or(false)
    }

    pub fn field_error(&self, key: &str) -> Option<ValidationError> {
        self.wizard.with(|w| w.error(key))
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        self.wizard.with(|w| w.progress())
    }

    pub fn is_first_step(&self) -> bool {
        self.wizard.with(|w| w.is_first_step())
    }

    pub fn is_last_step(&self) -> bool {
        self.wizard.with(|w| w.is_last_step())
    }

    pub fn is_submitting(&self) -> bool {
        self.wizard.with(|w| w.is_submitting())
    }

    pub fn set_value(&self, key: &str, value: FieldValue) {
        let result = self.wizard.try_update(|w| w.set_field(key, value));
        if let Some(Err(e)) = result {
            log::error!("{}: {}", self.module, e);
        }
    }

    /// Raw input text converted according to the field's kind
    pub fn set_input(&self, key: &str, raw: &str) {
        let value = self.wizard.with_untracked(|w| {
            w.definition()
                .field(key)
                .map(|spec| FieldValue::from_input(&spec.kind, raw))
        });
        if let Some(value) = value {
            self.set_value(key, value);
        }
    }

    pub fn previous_command(&self) {
        self.wizard.update(|w| {
            w.go_previous();
        });
    }

    /// Validate and advance; on the last step submit through the store.
    pub fn next_command(
        &self,
        config: AppConfig,
        i18n: I18nContext,
        toast: ToastService,
        connectivity: ConnectivityContext,
        on_submitted: Callback<SubmissionRecord>,
    ) {
        self.error.set(None);
        let Some(outcome) = self.wizard.try_update(|w| w.go_next()) else {
            return;
        };

        match outcome {
            StepOutcome::Invalid(errors) => {
                log::debug!("{}: {} fields need attention", self.module, errors.len());
            }
            StepOutcome::Advanced(index) => {
                log::debug!("{}: now on step {}", self.module, index + 1);
            }
            StepOutcome::SubmissionInFlight => {}
            StepOutcome::ReadyToSubmit(ticket) => {
                let module = self.module;
                let wizard = self.wizard;
                let error = self.error;
                let draft_saved_at = self.draft_saved_at;
                let fields = wizard.with_untracked(|w| w.fields().clone());

                wasm_bindgen_futures::spawn_local(async move {
                    let result = model::submit(&config, module, fields).await;

                    // None once the page is gone; false after a cancel
                    let applied = wizard
                        .try_update(|w| w.complete_submission(ticket, &result))
                        .unwrap_or(false);
                    if !applied {
                        return;
                    }

                    match result {
                        Ok(record) => {
                            model::clear_draft(&config.layout(), module);
                            draft_saved_at.set(None);
                            connectivity.record_write();
                            toast.success(format!("{} - {}", i18n.t("form.success"), record.folio));
                            on_submitted.run(record);
                        }
                        Err(e) => {
                            log::error!("{}: submission failed: {}", module, e);
                            error.set(Some(i18n.t("form.error")));
                        }
                    }
                });
            }
        }
    }

    pub fn save_draft_command(&self, config: &AppConfig, i18n: I18nContext, toast: ToastService) {
        let fields = self.wizard.with_untracked(|w| w.fields().clone());
        match model::save_draft(&config.layout(), self.module, &fields) {
            Ok(saved_at) => {
                self.draft_saved_at.set(Some(saved_at));
                toast.info(i18n.t("checklists.autosaved"));
            }
            Err(e) => {
                log::warn!("{}: draft not saved: {}", self.module, e);
                toast.error(i18n.t("form.error"));
            }
        }
    }

    /// Drop input, the draft and any pending submission result
    pub fn cancel_command(&self, config: &AppConfig) {
        self.wizard.update(|w| {
            w.cancel_submission();
            w.reset();
        });
        model::clear_draft(&config.layout(), self.module);
        self.draft_saved_at.set(None);
        self.error.set(None);
    }
}
