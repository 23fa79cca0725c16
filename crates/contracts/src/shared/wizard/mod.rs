//! Generic multi-step form wizard: definitions, field registry, validator
//! and the controller that ties them together.

pub mod controller;
pub mod field;
pub mod step;
pub mod validator;

use thiserror::Error;

pub use controller::{
    AdvanceOutcome, StepOutcome, StepProgress, SubmissionTicket, Wizard, WizardState,
};
pub use field::{FieldKind, FieldRegistry, FieldRule, FieldSpec, FieldValue};
pub use step::{DefinitionError, StepDefinition, WizardDefinition};
pub use validator::{validate_field, validate_step, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("field '{0}' is not declared by this wizard")]
    UnknownField(String),
}
