use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, FieldKind, FieldRule, FieldSpec, WizardDefinition};

/// Fields shown as the title of a stored quotation
pub const HEADLINE_KEYS: &[&str] = &["cliente", "descripcion"];

/// SOP 1: cotización en tres pasos (cliente, detalle, precios)
pub fn definition() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::from_steps(
        FormModule::Quotation,
        "Cotización",
        vec![
            (
                "Información del Cliente",
                vec![
                    FieldSpec::text("cliente", "Cliente")
                        .required()
                        .placeholder("TechCorp Industries"),
                    FieldSpec::text("contacto", "Contacto").placeholder("Juan Pérez"),
                    FieldSpec::new("email", "Email", FieldKind::Email)
                        .required()
                        .rule(FieldRule::Email)
                        .placeholder("juan.perez@techcorp.com"),
                    FieldSpec::new("telefono", "Teléfono", FieldKind::Phone)
                        .placeholder("+52 123 456 7890"),
                    FieldSpec::choice(
                        "tipo",
                        "Tipo de venta",
                        &["Inside Sales", "Field Sales", "Brand Leader", "PM"],
                    ),
                ],
            ),
            (
                "Detalles de Cotización",
                vec![
                    FieldSpec::long_text("descripcion", "Descripción")
                        .required()
                        .placeholder("Sistema de automatización - 3 robots colaborativos UR5e"),
                    FieldSpec::long_text("listaMateriales", "Lista de materiales")
                        .required()
                        .placeholder("3x UR5e\n1x Control Cabinet"),
                ],
            ),
            (
                "Precios y Costos",
                vec![
                    FieldSpec::text("preciosUR", "Precios UR").placeholder("$42,000 USD c/u"),
                    FieldSpec::text("preciosMIR", "Precios MiR").placeholder("N/A"),
                    FieldSpec::text("descuentos", "Descuentos").placeholder("10%"),
                    FieldSpec::text("costoIngenieria", "Costo de ingeniería").placeholder("$5,000 USD"),
                    FieldSpec::text("tarifarioSI", "Tarifario SI").placeholder("120 horas"),
                    FieldSpec::long_text("notas", "Notas"),
                ],
            ),
        ],
    )
}
