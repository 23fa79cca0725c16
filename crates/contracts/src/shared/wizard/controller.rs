//! Wizard controller: step navigation gated on validation, terminal submit.

use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::field::{FieldRegistry, FieldValue};
use super::step::{StepDefinition, WizardDefinition};
use super::validator::{validate_step, ValidationError, ValidationResult};
use super::WizardError;
use crate::shared::submission::{SubmissionRecord, SubmissionSink, SubmitError};

/// Everything the presentation layer reads from a running wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub current_step_index: usize,
    pub fields: FieldRegistry,
    pub errors: ValidationResult,
}

/// Handle for one submit attempt. A result delivered with an outdated
/// ticket (after `reset` or `cancel_submission`) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

/// Result of [`Wizard::go_next`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Current step has errors; index unchanged
    Invalid(ValidationResult),
    /// Moved to the given step index
    Advanced(usize),
    /// Last step is valid; the caller hands the snapshot to a sink
    ReadyToSubmit(SubmissionTicket),
    /// A submission is still pending
    SubmissionInFlight,
}

/// Result of [`Wizard::advance`], which also drives the sink.
#[derive(Debug)]
pub enum AdvanceOutcome {
    Invalid(ValidationResult),
    Advanced(usize),
    Submitted(SubmissionRecord),
    SubmitFailed(SubmitError),
    SubmissionInFlight,
}

/// Per-step marker for the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepProgress {
    Completed,
    Current,
    Upcoming,
}

/// Generic multi-step form controller, parameterized by a [`WizardDefinition`].
#[derive(Debug, Clone)]
pub struct Wizard {
    definition: Arc<WizardDefinition>,
    state: WizardState,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl Wizard {
    pub fn new(definition: Arc<WizardDefinition>) -> Self {
        let state = WizardState {
            current_step_index: 0,
            fields: definition.default_fields(),
            errors: ValidationResult::new(),
        };
        Self {
            definition,
            state,
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.state.fields
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.state.errors
    }

    pub fn error(&self, key: &str) -> Option<ValidationError> {
        self.state.errors.get(key).copied()
    }

    pub fn current_step_index(&self) -> usize {
        self.state.current_step_index
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.definition.steps()[self.state.current_step_index]
    }

    pub fn is_first_step(&self) -> bool {
        self.state.current_step_index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step_index == self.definition.last_step_index()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Write a field value and drop that field's error, if any.
    pub fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), WizardError> {
        self.state.fields.set(key, value)?;
        self.state.errors.remove(key);
        Ok(())
    }

    /// Validate the current step; advance, or hand over to submission on the last step.
    pub fn go_next(&mut self) -> StepOutcome {
        if self.in_flight.is_some() {
            return StepOutcome::SubmissionInFlight;
        }

        let definition = Arc::clone(&self.definition);
        let index = self.state.current_step_index;
        let step = &definition.steps()[index];

        let errors = validate_step(step, &self.state.fields);
        for key in step.display_fields() {
            self.state.errors.remove(key);
        }

        if !errors.is_empty() {
            debug!(
                "wizard {}: step {} rejected ({} errors)",
                definition.module,
                step.order,
                errors.len()
            );
            self.state.errors.extend(errors.clone());
            return StepOutcome::Invalid(errors);
        }

        if index < definition.last_step_index() {
            self.state.current_step_index = index + 1;
            debug!("wizard {}: advanced to step {}", definition.module, index + 2);
            StepOutcome::Advanced(index + 1)
        } else {
            let ticket = SubmissionTicket(self.next_ticket);
            self.next_ticket += 1;
            self.in_flight = Some(ticket);
            debug!("wizard {}: ready to submit", definition.module);
            StepOutcome::ReadyToSubmit(ticket)
        }
    }

    /// Step back one page, never below the first. No validation.
    pub fn go_previous(&mut self) -> usize {
        self.state.current_step_index = self.state.current_step_index.saturating_sub(1);
        self.state.current_step_index
    }

    /// Back to defaults on the first step with no errors
    pub fn reset(&mut self) {
        self.state = WizardState {
            current_step_index: 0,
            fields: self.definition.default_fields(),
            errors: ValidationResult::new(),
        };
        self.in_flight = None;
    }

    /// Forget the pending submission; its result will be ignored
    pub fn cancel_submission(&mut self) {
        self.in_flight = None;
    }

    /// Deliver the sink's answer. Success resets the wizard, failure keeps
    /// position and data so the user can resubmit. Returns false when the
    /// ticket is no longer current and nothing was applied.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: &Result<SubmissionRecord, SubmitError>,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            debug!("wizard {}: ignoring stale submission result", self.definition.module);
            return false;
        }
        self.in_flight = None;
        if result.is_ok() {
            self.reset();
        }
        true
    }

    /// `go_next` followed, on the last step, by the sink call and its completion.
    pub async fn advance<S>(&mut self, sink: &S) -> AdvanceOutcome
    where
        S: SubmissionSink + ?Sized,
    {
        match self.go_next() {
            StepOutcome::Invalid(errors) => AdvanceOutcome::Invalid(errors),
            StepOutcome::Advanced(index) => AdvanceOutcome::Advanced(index),
            StepOutcome::SubmissionInFlight => AdvanceOutcome::SubmissionInFlight,
            StepOutcome::ReadyToSubmit(ticket) => {
                let result = sink
                    .submit(self.definition.module, self.state.fields.clone())
                    .await;
                self.complete_submission(ticket, &result);
                match result {
                    Ok(record) => AdvanceOutcome::Submitted(record),
                    Err(e) => AdvanceOutcome::SubmitFailed(e),
                }
            }
        }
    }

    /// Copy values from a saved draft for keys this wizard declares.
    /// Returns how many fields were restored.
    pub fn restore_draft(&mut self, draft: &FieldRegistry) -> usize {
        let mut restored = 0;
        for (key, value) in draft.iter() {
            if self.state.fields.set(key, value.clone()).is_ok() {
                restored += 1;
            }
        }
        restored
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        let current = self.state.current_step_index;
        (0..self.definition.step_count())
            .map(|i| match i.cmp(&current) {
                std::cmp::Ordering::Less => StepProgress::Completed,
                std::cmp::Ordering::Equal => StepProgress::Current,
                std::cmp::Ordering::Greater => StepProgress::Upcoming,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FormModule;
    use crate::shared::storage::{MemoryStore, StorageLayout};
    use crate::shared::submission::StoreSubmissionSink;
    use crate::shared::wizard::field::FieldSpec;
    use async_trait::async_trait;

    fn three_step() -> Arc<WizardDefinition> {
        let def = WizardDefinition::from_steps(
            FormModule::Quotation,
            "Cotización",
            vec![
                (
                    "Cliente",
                    vec![
                        FieldSpec::text("name", "Name").required(),
                        FieldSpec::text("contacto", "Contacto").default_value("Juan"),
                    ],
                ),
                ("Detalles", vec![FieldSpec::long_text("descripcion", "Descripción").required()]),
                ("Precios", vec![FieldSpec::text("notas", "Notas")]),
            ],
        )
        .unwrap();
        Arc::new(def)
    }

    struct FailingSink;

    #[async_trait(?Send)]
    impl SubmissionSink for FailingSink {
        async fn submit(
            &self,
            _module: FormModule,
            _fields: FieldRegistry,
        ) -> Result<SubmissionRecord, SubmitError> {
            Err(SubmitError::Rejected("quota exceeded".into()))
        }
    }

    fn memory_sink() -> StoreSubmissionSink<MemoryStore> {
        StoreSubmissionSink::new(MemoryStore::new(), StorageLayout::new("test"))
    }

    #[test]
    fn test_required_name_scenario() {
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("name", "".into()).unwrap();

        let outcome = wizard.go_next();
        assert!(matches!(outcome, StepOutcome::Invalid(_)));
        assert_eq!(wizard.current_step_index(), 0);
        assert_eq!(wizard.errors().len(), 1);
        assert_eq!(wizard.errors()["name"].to_string(), "required");

        wizard.set_field("name", "Acme".into()).unwrap();
        assert_eq!(wizard.go_next(), StepOutcome::Advanced(1));
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.current_step_index(), 1);
    }

    #[test]
    fn test_invalid_step_never_moves() {
        let mut wizard = Wizard::new(three_step());
        for _ in 0..3 {
            wizard.go_next();
            assert_eq!(wizard.current_step_index(), 0);
        }
    }

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("name", "Acme".into()).unwrap();
        wizard.go_next();
        wizard.go_next();
        assert_eq!(wizard.error("descripcion"), Some(ValidationError::Required));

        wizard.set_field("notas", "x".into()).unwrap();
        assert!(wizard.error("descripcion").is_some());

        wizard.set_field("descripcion", "Robots".into()).unwrap();
        assert_eq!(wizard.error("descripcion"), None);
        assert_eq!(wizard.fields().text("descripcion"), "Robots");
    }

    #[test]
    fn test_write_then_read() {
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("contacto", "Ana".into()).unwrap();
        assert_eq!(wizard.fields().get("contacto"), Some(&FieldValue::text("Ana")));
        assert!(wizard.set_field("missing", "x".into()).is_err());
    }

    #[test]
    fn test_previous_is_floored_and_keeps_errors() {
        let mut wizard = Wizard::new(three_step());
        assert_eq!(wizard.go_previous(), 0);

        wizard.set_field("name", "Acme".into()).unwrap();
        wizard.go_next();
        wizard.go_next();
        assert!(wizard.error("descripcion").is_some());

        assert_eq!(wizard.go_previous(), 0);
        assert_eq!(wizard.go_previous(), 0);
        assert!(wizard.error("descripcion").is_some());
    }

    #[test]
    fn test_failed_step_keeps_errors_of_other_steps() {
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("name", "Acme".into()).unwrap();
        wizard.go_next();
        wizard.go_next(); // descripcion missing
        wizard.go_previous();
        wizard.set_field("name", "".into()).unwrap();
        wizard.go_next();

        assert!(wizard.error("name").is_some());
        assert!(wizard.error("descripcion").is_some());
    }

    #[test]
    fn test_progress_markers() {
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("name", "Acme".into()).unwrap();
        wizard.go_next();
        assert_eq!(
            wizard.progress(),
            vec![StepProgress::Completed, StepProgress::Current, StepProgress::Upcoming]
        );
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("name", "Acme".into()).unwrap();
        wizard.go_next();
        wizard.set_field("descripcion", "Robots".into()).unwrap();
        wizard.go_next();
        let ticket = match wizard.go_next() {
            StepOutcome::ReadyToSubmit(ticket) => ticket,
            other => panic!("unexpected {:?}", other),
        };
        assert!(wizard.is_submitting());
        assert_eq!(wizard.go_next(), StepOutcome::SubmissionInFlight);

        wizard.cancel_submission();
        let result = Err(SubmitError::Rejected("late".into()));
        assert!(!wizard.complete_submission(ticket, &result));
        assert_eq!(wizard.current_step_index(), 2);
    }

    #[test]
    fn test_restore_draft_skips_unknown_keys() {
        let mut wizard = Wizard::new(three_step());
        let mut other = Wizard::new(three_step());
        other.set_field("name", "Draft Co".into()).unwrap();

        assert_eq!(wizard.restore_draft(other.fields()), 4);
        assert_eq!(wizard.fields().text("name"), "Draft Co");
    }

    #[tokio::test]
    async fn test_final_step_submits_and_resets() {
        let sink = memory_sink();
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("name", "Acme".into()).unwrap();
        wizard.set_field("contacto", "Luis".into()).unwrap();
        assert!(matches!(wizard.advance(&sink).await, AdvanceOutcome::Advanced(1)));
        wizard.set_field("descripcion", "3x UR5e".into()).unwrap();
        assert!(matches!(wizard.advance(&sink).await, AdvanceOutcome::Advanced(2)));

        let record = match wizard.advance(&sink).await {
            AdvanceOutcome::Submitted(record) => record,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(record.module, FormModule::Quotation);
        assert_eq!(record.fields.text("name"), "Acme");

        assert_eq!(wizard.current_step_index(), 0);
        assert_eq!(wizard.fields(), &three_step().default_fields());
        assert_eq!(wizard.fields().text("contacto"), "Juan");
        assert!(!wizard.is_submitting());
        assert_eq!(sink.list(FormModule::Quotation).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_submission_preserves_state() {
        let mut wizard = Wizard::new(three_step());
        wizard.set_field("name", "Acme".into()).unwrap();
        wizard.go_next();
        wizard.set_field("descripcion", "Robots".into()).unwrap();
        wizard.go_next();
        let before = wizard.state().clone();

        let outcome = wizard.advance(&FailingSink).await;
        assert!(matches!(outcome, AdvanceOutcome::SubmitFailed(SubmitError::Rejected(_))));
        assert_eq!(wizard.state(), &before);
        assert!(!wizard.is_submitting());

        // retry goes through once the sink works
        let sink = memory_sink();
        assert!(matches!(wizard.advance(&sink).await, AdvanceOutcome::Submitted(_)));
    }
}
