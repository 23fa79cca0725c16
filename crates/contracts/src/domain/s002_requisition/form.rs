use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, FieldSpec, WizardDefinition};

pub const HEADLINE_KEYS: &[&str] = &["proyecto", "descripcion"];

/// SOP 2: requisición de materiales o servicios
pub fn definition() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::from_steps(
        FormModule::Requisition,
        "Requisición",
        vec![
            (
                "Información del Solicitante",
                vec![
                    FieldSpec::text("solicitante", "Solicitante")
                        .required()
                        .placeholder("Carlos Méndez"),
                    FieldSpec::choice(
                        "departamento",
                        "Departamento",
                        &["PM", "Ingeniería", "SI", "Almacén"],
                    ),
                    FieldSpec::text("proyecto", "Proyecto")
                        .required()
                        .placeholder("Proyecto Alpha"),
                    FieldSpec::checkbox("urgente", "Urgente"),
                ],
            ),
            (
                "Detalles de Requisición",
                vec![
                    FieldSpec::long_text("descripcion", "Descripción").required(),
                    FieldSpec::long_text("justificacion", "Justificación"),
                    FieldSpec::long_text("listaMateriales", "Lista de materiales").required(),
                ],
            ),
            (
                "Especificaciones",
                vec![
                    FieldSpec::long_text("especificaciones", "Especificaciones técnicas"),
                    FieldSpec::text("proveedor", "Proveedor sugerido").default_value("Por definir"),
                    FieldSpec::text("costoEstimado", "Costo estimado").placeholder("$12,500 MXN"),
                ],
            ),
        ],
    )
}
