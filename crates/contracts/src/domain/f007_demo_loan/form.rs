use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, FieldKind, FieldRule, FieldSpec, WizardDefinition};

pub const HEADLINE_KEYS: &[&str] = &["clientName", "equipmentDescription"];

/// F-DEM: solicitud de préstamo de equipo demo
pub fn definition() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::from_steps(
        FormModule::DemoLoanRequest,
        "Solicitud de Préstamo Demo",
        vec![(
            "Solicitud",
            vec![
                FieldSpec::text("clientName", "Nombre del Cliente / Empresa")
                    .required()
                    .placeholder("Acme Corporation"),
                FieldSpec::text("clientContact", "Persona de Contacto"),
                FieldSpec::new("clientEmail", "Email", FieldKind::Email)
                    .required()
                    .rule(FieldRule::Email)
                    .placeholder("cliente@empresa.com"),
                FieldSpec::new("clientPhone", "Teléfono", FieldKind::Phone)
                    .placeholder("+52 123 456 7890"),
                FieldSpec::long_text("equipmentDescription", "Descripción del Equipo").required(),
                FieldSpec::text("serialNumber", "Número de Serie").placeholder("SN-XXXXXX"),
                FieldSpec::new("loanStartDate", "Fecha de Inicio", FieldKind::Date).required(),
                FieldSpec::new("loanEndDate", "Fecha de Devolución Esperada", FieldKind::Date)
                    .required(),
                FieldSpec::long_text("purpose", "Propósito del Préstamo"),
                FieldSpec::long_text("conditions", "Condiciones Especiales"),
                FieldSpec::long_text("notes", "Notas Adicionales"),
            ],
        )],
    )
}
