//! Step and wizard definitions: immutable configuration data.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

use super::field::{FieldRegistry, FieldSpec};
use crate::enums::FormModule;

/// Errors detected while assembling a [`WizardDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("wizard '{0}' declares no steps")]
    NoSteps(String),
    #[error("step at position {position} has order {order}, expected {expected}")]
    StepOrder {
        position: usize,
        order: u32,
        expected: u32,
    },
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

/// One page of a wizard: the fields it owns, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// 1-based position in the wizard
    pub order: u32,
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl StepDefinition {
    pub fn new(order: u32, title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            order,
            title: title.into(),
            fields,
        }
    }

    /// Field keys in display order
    pub fn display_fields(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.key.as_str()).collect()
    }

    /// Keys that carry the `Required` rule; always a subset of `display_fields`
    pub fn required_fields(&self) -> BTreeSet<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.key.as_str())
            .collect()
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// Complete configuration of one wizard: ordered steps over a fixed field set.
///
/// Deserialization goes through [`WizardDefinition::new`], so a stored
/// definition obeys the same rules as one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWizardDefinition")]
pub struct WizardDefinition {
    pub module: FormModule,
    pub title: String,
    steps: Vec<StepDefinition>,
}

#[derive(Deserialize)]
struct RawWizardDefinition {
    module: FormModule,
    title: String,
    steps: Vec<StepDefinition>,
}

impl TryFrom<RawWizardDefinition> for WizardDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawWizardDefinition) -> Result<Self, Self::Error> {
        Self::new(raw.module, raw.title, raw.steps)
    }
}

impl WizardDefinition {
    /// Build a definition, checking that steps are numbered `1..=n` without
    /// gaps and that no field key is declared twice.
    pub fn new(
        module: FormModule,
        title: impl Into<String>,
        steps: Vec<StepDefinition>,
    ) -> Result<Self, DefinitionError> {
        let title = title.into();
        if steps.is_empty() {
            return Err(DefinitionError::NoSteps(title));
        }

        let mut steps = steps;
        steps.sort_by_key(|s| s.order);

        for (position, step) in steps.iter().enumerate() {
            let expected = position as u32 + 1;
            if step.order != expected {
                return Err(DefinitionError::StepOrder {
                    position,
                    order: step.order,
                    expected,
                });
            }
        }

        let mut seen = HashSet::new();
        for field in steps.iter().flat_map(|s| s.fields.iter()) {
            if !seen.insert(field.key.as_str()) {
                return Err(DefinitionError::DuplicateField(field.key.clone()));
            }
        }

        Ok(Self {
            module,
            title,
            steps,
        })
    }

    /// Convenience constructor: steps numbered in the given order
    pub fn from_steps(
        module: FormModule,
        title: impl Into<String>,
        steps: Vec<(&str, Vec<FieldSpec>)>,
    ) -> Result<Self, DefinitionError> {
        let steps = steps
            .into_iter()
            .enumerate()
            .map(|(i, (step_title, fields))| StepDefinition::new(i as u32 + 1, step_title, fields))
            .collect();
        Self::new(module, title, steps)
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_step_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.key == key)
    }

    /// Index of the step that owns `key`
    pub fn step_of(&self, key: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.field(key).is_some())
    }

    /// Fresh registry holding every declared field at its default
    pub fn default_fields(&self) -> FieldRegistry {
        FieldRegistry::seeded(self.fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_step(order: u32) -> StepDefinition {
        StepDefinition::new(order, "Cliente", vec![FieldSpec::text("name", "Name").required()])
    }

    #[test]
    fn test_required_subset_of_display() {
        let step = StepDefinition::new(
            1,
            "Cliente",
            vec![
                FieldSpec::text("cliente", "Cliente").required(),
                FieldSpec::text("contacto", "Contacto"),
            ],
        );
        assert_eq!(step.display_fields(), vec!["cliente", "contacto"]);
        let required = step.required_fields();
        assert!(required.iter().all(|k| step.display_fields().contains(k)));
        assert_eq!(required.len(), 1);
    }

    #[test]
    fn test_rejects_empty_wizard() {
        let err = WizardDefinition::new(FormModule::Quotation, "Cotización", vec![]).unwrap_err();
        assert_eq!(err, DefinitionError::NoSteps("Cotización".into()));
    }

    #[test]
    fn test_rejects_gap_in_step_order() {
        let steps = vec![name_step(1), StepDefinition::new(3, "Precios", vec![])];
        let err = WizardDefinition::new(FormModule::Quotation, "x", steps).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::StepOrder {
                position: 1,
                order: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn test_sorts_steps_by_order() {
        let steps = vec![StepDefinition::new(2, "Detalles", vec![]), name_step(1)];
        let def = WizardDefinition::new(FormModule::Quotation, "x", steps).unwrap();
        assert_eq!(def.steps()[0].title, "Cliente");
        assert_eq!(def.step_of("name"), Some(0));
    }

    #[test]
    fn test_rejects_duplicate_field() {
        let steps = vec![name_step(1), {
            let mut s = name_step(2);
            s.title = "Otra".into();
            s
        }];
        let err = WizardDefinition::new(FormModule::Quotation, "x", steps).unwrap_err();
        assert_eq!(err, DefinitionError::DuplicateField("name".into()));
    }

    #[test]
    fn test_default_fields_cover_all_steps() {
        let def = WizardDefinition::from_steps(
            FormModule::Requisition,
            "Requisición",
            vec![
                ("Solicitante", vec![FieldSpec::text("solicitante", "Solicitante")]),
                ("Detalles", vec![FieldSpec::checkbox("urgente", "Urgente")]),
            ],
        )
        .unwrap();
        let fields = def.default_fields();
        let keys: Vec<_> = fields.keys().collect();
        assert_eq!(keys, vec!["solicitante", "urgente"]);
    }

    #[test]
    fn test_deserialize_applies_definition_rules() {
        let empty = r#"{"module":"quotation","title":"x","steps":[]}"#;
        let err = serde_json::from_str::<WizardDefinition>(empty).unwrap_err();
        assert!(err.to_string().contains("declares no steps"));

        let gap = r#"{"module":"quotation","title":"x","steps":[
            {"order":2,"title":"Detalles","fields":[]}
        ]}"#;
        assert!(serde_json::from_str::<WizardDefinition>(gap).is_err());

        let def = WizardDefinition::from_steps(
            FormModule::Quotation,
            "Cotización",
            vec![("Cliente", vec![FieldSpec::text("cliente", "Cliente").required()])],
        )
        .unwrap();
        let json = serde_json::to_string(&def).unwrap();
        let back: WizardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }
}
