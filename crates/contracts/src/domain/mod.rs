//! Per-module form configuration and the FAT/SAT checklist model.
//!
//! Wizard modules only declare data; the generic [`Wizard`] runs them all.
//!
//! [`Wizard`]: crate::shared::wizard::Wizard

pub mod c008_checklist;
pub mod f006_material_exit;
pub mod f007_demo_loan;
pub mod s001_quotation;
pub mod s002_requisition;
pub mod s003_material_control;
pub mod s004_equipment_loan;
pub mod s005_support_ticket;

use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, WizardDefinition};

type DefinitionFn = fn() -> Result<WizardDefinition, DefinitionError>;

fn builder(module: FormModule) -> Option<(DefinitionFn, &'static [&'static str])> {
    match module {
        FormModule::Quotation => Some((s001_quotation::definition, s001_quotation::HEADLINE_KEYS)),
        FormModule::Requisition => {
            Some((s002_requisition::definition, s002_requisition::HEADLINE_KEYS))
        }
        FormModule::MaterialControl => Some((
            s003_material_control::definition,
            s003_material_control::HEADLINE_KEYS,
        )),
        FormModule::EquipmentLoan => Some((
            s004_equipment_loan::definition,
            s004_equipment_loan::HEADLINE_KEYS,
        )),
        FormModule::SupportTicket => Some((
            s005_support_ticket::definition,
            s005_support_ticket::HEADLINE_KEYS,
        )),
        FormModule::MaterialExit => Some((
            f006_material_exit::definition,
            f006_material_exit::HEADLINE_KEYS,
        )),
        FormModule::DemoLoanRequest => {
            Some((f007_demo_loan::definition, f007_demo_loan::HEADLINE_KEYS))
        }
        FormModule::Checklist => None,
    }
}

static CATALOG: Lazy<HashMap<FormModule, Arc<WizardDefinition>>> = Lazy::new(|| {
    FormModule::all()
        .into_iter()
        .filter_map(|module| {
            let (build, _) = builder(module)?;
            match build() {
                Ok(def) => Some((module, Arc::new(def))),
                Err(e) => {
                    warn!("wizard definition for {} rejected: {}", module, e);
                    None
                }
            }
        })
        .collect()
});

/// Shared wizard definition for a module; `None` for checklists.
pub fn wizard_definition(module: FormModule) -> Option<Arc<WizardDefinition>> {
    CATALOG.get(&module).cloned()
}

/// Field keys used to title a stored submission of `module`
pub fn headline_keys(module: FormModule) -> &'static [&'static str] {
    builder(module).map(|(_, keys)| keys).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{FieldValue, StepOutcome, ValidationError, Wizard};

    #[test]
    fn test_every_wizard_module_builds() {
        for module in FormModule::all() {
            let built = builder(module).map(|(build, _)| build());
            match built {
                Some(result) => {
                    let def = result.unwrap();
                    assert_eq!(def.module, module);
                    assert!(wizard_definition(module).is_some());
                    for key in headline_keys(module) {
                        assert!(def.field(key).is_some(), "{} lacks {}", module, key);
                    }
                }
                None => assert!(!module.has_wizard()),
            }
        }
    }

    #[test]
    fn test_sop_step_counts() {
        for module in FormModule::sops() {
            assert_eq!(wizard_definition(module).unwrap().step_count(), 3);
        }
        assert_eq!(wizard_definition(FormModule::MaterialExit).unwrap().step_count(), 1);
        assert_eq!(wizard_definition(FormModule::DemoLoanRequest).unwrap().step_count(), 1);
    }

    #[test]
    fn test_quotation_first_step_requirements() {
        let def = wizard_definition(FormModule::Quotation).unwrap();
        let required: Vec<&str> = def.steps()[0].required_fields().into_iter().collect();
        assert_eq!(required, vec!["cliente", "email"]);
        assert_eq!(def.default_fields().text("tipo"), "Inside Sales");
    }

    #[test]
    fn test_material_exit_quantity_must_be_positive() {
        let mut wizard = Wizard::new(wizard_definition(FormModule::MaterialExit).unwrap());
        for (key, value) in [
            ("orderNumber", "ORD-2024-001"),
            ("projectName", "Proyecto Alpha"),
            ("requestedBy", "Luis García"),
            ("department", "Logística"),
            ("materialDescription", "Cable calibre 12"),
            ("destination", "Planta Norte"),
            ("purposeOfUse", "Instalación"),
        ] {
            wizard.set_field(key, value.into()).unwrap();
        }
        wizard.set_field("quantity", FieldValue::text("0")).unwrap();
        assert!(matches!(wizard.go_next(), StepOutcome::Invalid(_)));
        assert_eq!(wizard.error("quantity"), Some(ValidationError::NotPositive));

        let spec = wizard.definition().field("quantity").unwrap().kind.clone();
        wizard.set_field("quantity", FieldValue::from_input(&spec, "inf")).unwrap();
        assert!(matches!(wizard.go_next(), StepOutcome::Invalid(_)));
        assert_eq!(wizard.error("quantity"), Some(ValidationError::NotPositive));

        wizard.set_field("quantity", FieldValue::text("12")).unwrap();
        assert!(matches!(wizard.go_next(), StepOutcome::ReadyToSubmit(_)));
    }

    #[test]
    fn test_demo_request_checks_email_shape() {
        let def = wizard_definition(FormModule::DemoLoanRequest).unwrap();
        let mut wizard = Wizard::new(def);
        wizard.set_field("clientEmail", "no-at-sign".into()).unwrap();
        wizard.go_next();
        assert_eq!(wizard.error("clientEmail"), Some(ValidationError::InvalidEmail));
        assert_eq!(wizard.error("clientName"), Some(ValidationError::Required));
    }
}
