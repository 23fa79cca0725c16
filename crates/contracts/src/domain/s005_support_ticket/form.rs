use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, FieldKind, FieldRule, FieldSpec, WizardDefinition};

pub const HEADLINE_KEYS: &[&str] = &["cliente", "equipo"];

/// SOP 5: ticket de soporte (preventa, postventa, mantenimiento)
pub fn definition() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::from_steps(
        FormModule::SupportTicket,
        "Ticket de Soporte",
        vec![
            (
                "Cliente y Contacto",
                vec![
                    FieldSpec::text("cliente", "Cliente").required(),
                    FieldSpec::text("contacto", "Contacto").required(),
                    FieldSpec::new("telefono", "Teléfono", FieldKind::Phone),
                    FieldSpec::new("email", "Email", FieldKind::Email).rule(FieldRule::Email),
                ],
            ),
            (
                "Problema",
                vec![
                    FieldSpec::choice("tipo", "Tipo", &["Preventa", "Postventa", "Mantenimiento"]),
                    // S1 crítico, S2 alto, S3 normal
                    FieldSpec::choice("severidad", "Severidad", &["S1", "S2", "S3"]),
                    FieldSpec::text("equipo", "Equipo").required(),
                    FieldSpec::long_text("descripcion", "Descripción del problema").required(),
                    FieldSpec::long_text("pasos", "Pasos para reproducir"),
                    FieldSpec::long_text("impacto", "Impacto"),
                    FieldSpec::long_text("solucionEsperada", "Solución esperada"),
                ],
            ),
            (
                "Asignación",
                vec![FieldSpec::choice(
                    "asignadoA",
                    "Asignado a",
                    &["Iván Ramírez", "Fidencio Martínez", "Ventas PM", "Soporte L1"],
                )],
            ),
        ],
    )
}
