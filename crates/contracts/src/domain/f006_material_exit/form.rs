use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, FieldKind, FieldRule, FieldSpec, WizardDefinition};

pub const HEADLINE_KEYS: &[&str] = &["orderNumber", "projectName"];

/// F-SAP: salida de material, una sola página
pub fn definition() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::from_steps(
        FormModule::MaterialExit,
        "Salida de Material",
        vec![(
            "Salida de Material",
            vec![
                FieldSpec::text("orderNumber", "Número de Orden")
                    .required()
                    .placeholder("ORD-2024-001"),
                FieldSpec::text("projectName", "Nombre del Proyecto")
                    .required()
                    .placeholder("Proyecto Alpha"),
                FieldSpec::text("requestedBy", "Solicitado Por").required(),
                FieldSpec::choice(
                    "department",
                    "Departamento",
                    &["Ingeniería", "Producción", "Control de Calidad", "Logística", "Mantenimiento"],
                )
                .required()
                .default_value(""),
                FieldSpec::long_text("materialDescription", "Descripción del Material").required(),
                FieldSpec::new("quantity", "Cantidad", FieldKind::Number)
                    .required()
                    .rule(FieldRule::PositiveNumber)
                    .placeholder("0"),
                FieldSpec::choice("unit", "Unidad", &["piezas", "kg", "m", "cajas", "litros"]),
                FieldSpec::text("destination", "Destino").required(),
                FieldSpec::new("expectedReturnDate", "Fecha Esperada de Retorno", FieldKind::Date),
                FieldSpec::long_text("purposeOfUse", "Propósito del Uso").required(),
                FieldSpec::long_text("notes", "Notas Adicionales"),
            ],
        )],
    )
}
