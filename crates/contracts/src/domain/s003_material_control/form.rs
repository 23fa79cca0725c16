use crate::enums::FormModule;
use crate::shared::wizard::{DefinitionError, FieldKind, FieldSpec, WizardDefinition};

pub const HEADLINE_KEYS: &[&str] = &["proyecto", "numeroTraveler"];

/// SOP 3: descarga de material a costo de proyecto
pub fn definition() -> Result<WizardDefinition, DefinitionError> {
    WizardDefinition::from_steps(
        FormModule::MaterialControl,
        "Control de Material",
        vec![
            (
                "Información del Proyecto",
                vec![
                    FieldSpec::text("proyecto", "Proyecto").required(),
                    FieldSpec::text("solicitante", "Solicitante").placeholder("Luis García"),
                    FieldSpec::choice(
                        "departamento",
                        "Departamento",
                        &["Ingeniería/SI", "Almacén", "Administración"],
                    ),
                    FieldSpec::text("numeroTraveler", "Número de Traveler")
                        .required()
                        .placeholder("TRV-2024-015"),
                    FieldSpec::long_text("descripcion", "Descripción"),
                ],
            ),
            (
                "Lista de Materiales",
                vec![
                    FieldSpec::checkbox("pickingList", "Picking list generado").default_value(true),
                    FieldSpec::long_text("listaMateriales", "Lista de materiales").required(),
                ],
            ),
            (
                "Responsables y Fechas",
                vec![
                    FieldSpec::text("responsableKitting", "Responsable de kitting")
                        .placeholder("María Fernández"),
                    FieldSpec::new("fechaRequerida", "Fecha requerida", FieldKind::Date),
                    FieldSpec::long_text("observaciones", "Observaciones"),
                ],
            ),
        ],
    )
}
