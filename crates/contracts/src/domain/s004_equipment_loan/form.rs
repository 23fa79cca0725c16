use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, FieldKind, FieldRule, FieldSpec, WizardDefinition};

pub const HEADLINE_KEYS: &[&str] = &["cliente", "equipo"];

/// SOP 4: préstamo de equipo demo (UR5e, MiR250 Shelf, MiR100)
pub fn definition() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::from_steps(
        FormModule::EquipmentLoan,
        "Préstamo Demo",
        vec![
            (
                "Cliente y Vendedor",
                vec![
                    FieldSpec::text("cliente", "Cliente").required(),
                    FieldSpec::text("vendedor", "Vendedor")
                        .required()
                        .placeholder("Juan Rodríguez"),
                    FieldSpec::text("responsableCliente", "Responsable del cliente")
                        .placeholder("Ing. Roberto Sánchez"),
                    FieldSpec::new("telefono", "Teléfono", FieldKind::Phone),
                ],
            ),
            (
                "Detalles del Equipo",
                vec![
                    FieldSpec::choice("equipo", "Equipo", &["UR5e", "MiR250 Shelf", "MiR100"]),
                    FieldSpec::new("cantidad", "Cantidad", FieldKind::Number)
                        .rule(FieldRule::PositiveNumber)
                        .default_value(1i64),
                    FieldSpec::new("fechaSalida", "Fecha de salida", FieldKind::Date),
                    FieldSpec::new("fechaRetorno", "Fecha de retorno", FieldKind::Date),
                    FieldSpec::long_text("proposito", "Propósito").required(),
                    FieldSpec::text("destinoInstalacion", "Destino de instalación").required(),
                ],
            ),
            (
                "Checklist de Salida",
                vec![
                    FieldSpec::checkbox("estadoFisico", "Estado físico verificado"),
                    FieldSpec::checkbox("accesorios", "Accesorios completos"),
                    FieldSpec::checkbox("software", "Software actualizado"),
                    FieldSpec::checkbox("documentacion", "Documentación incluida"),
                    FieldSpec::long_text("observaciones", "Observaciones"),
                ],
            ),
        ],
    )
}
