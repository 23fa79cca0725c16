use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::FormModule;
use crate::shared::wizard::FieldRegistry;

/// Immutable snapshot of a submitted wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub module: FormModule,
    /// Human-facing number, e.g. `COT-2024-003`
    pub folio: String,
    pub fields: FieldRegistry,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// `sequence` is the 1-based position in the module's list.
    pub fn new(module: FormModule, fields: FieldRegistry, sequence: usize) -> Self {
        let submitted_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            module,
            folio: format!(
                "{}-{}-{:03}",
                module.folio_prefix(),
                submitted_at.year(),
                sequence
            ),
            fields,
            submitted_at,
        }
    }

    /// First non-blank value among `keys`, used for list titles.
    pub fn headline(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|k| self.fields.get(k))
            .find(|v| !v.is_blank())
            .map(|v| v.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::FieldSpec;

    #[test]
    fn test_folio_and_iso_timestamp() {
        let specs = [
            FieldSpec::text("cliente", "Cliente"),
            FieldSpec::text("proyecto", "Proyecto"),
        ];
        let mut fields = FieldRegistry::seeded(specs.iter());
        fields.set("proyecto", "Proyecto Alpha".into()).unwrap();

        let record = SubmissionRecord::new(FormModule::Requisition, fields, 7);
        assert!(record.folio.starts_with("REQ-"));
        assert!(record.folio.ends_with("-007"));
        assert_eq!(record.headline(&["cliente", "proyecto"]).as_deref(), Some("Proyecto Alpha"));

        let json = serde_json::to_value(&record).unwrap();
        let stamp = json["submitted_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        assert_eq!(json["module"], "requisition");
    }
}
