use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::field::{FieldRegistry, FieldRule, FieldSpec, FieldValue};
use super::step::StepDefinition;

/// Why a field failed validation. Displayed as a short code that the
/// presentation layer localizes (`form.<code>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    Required,
    InvalidEmail,
    NotPositive,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::NotPositive => "not_positive",
        }
    }

    /// Localizer key for the inline message
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::Required => "form.required",
            ValidationError::InvalidEmail => "form.invalid_email",
            ValidationError::NotPositive => "form.not_positive",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Field key -> error. Empty means the step is valid.
pub type ValidationResult = BTreeMap<String, ValidationError>;

/// Validate every field owned by `step` against the current values.
pub fn validate_step(step: &StepDefinition, fields: &FieldRegistry) -> ValidationResult {
    step.fields
        .iter()
        .filter_map(|spec| {
            let value = fields.get(&spec.key).unwrap_or(&FieldValue::Empty);
            validate_field(spec, value).map(|err| (spec.key.clone(), err))
        })
        .collect()
}

/// First failing rule of a field, if any.
///
/// A blank optional field passes; shape rules only apply to filled-in values.
pub fn validate_field(spec: &FieldSpec, value: &FieldValue) -> Option<ValidationError> {
    if value.is_blank() {
        return spec.is_required().then_some(ValidationError::Required);
    }

    spec.rules.iter().find_map(|rule| match rule {
        FieldRule::Required => None,
        FieldRule::Email => {
            let ok = value.as_str().map(looks_like_email).unwrap_or(false);
            (!ok).then_some(ValidationError::InvalidEmail)
        }
        FieldRule::PositiveNumber => {
            let ok = value.as_number().map(|n| n > 0.0).unwrap_or(false);
            (!ok).then_some(ValidationError::NotPositive)
        }
    })
}

fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::field::FieldKind;

    fn step() -> StepDefinition {
        StepDefinition::new(
            1,
            "Cliente",
            vec![
                FieldSpec::text("cliente", "Cliente").required(),
                FieldSpec::new("email", "Email", FieldKind::Email)
                    .required()
                    .rule(FieldRule::Email),
                FieldSpec::new("cantidad", "Cantidad", FieldKind::Number)
                    .rule(FieldRule::PositiveNumber),
                FieldSpec::text("notas", "Notas"),
            ],
        )
    }

    #[test]
    fn test_blank_required_fields_fail() {
        let registry = FieldRegistry::seeded(&step().fields);
        let errors = validate_step(&step(), &registry);
        assert_eq!(errors.get("cliente"), Some(&ValidationError::Required));
        assert_eq!(errors.get("email"), Some(&ValidationError::Required));
        // optional and blank
        assert!(!errors.contains_key("cantidad"));
        assert!(!errors.contains_key("notas"));
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut registry = FieldRegistry::seeded(&step().fields);
        registry.set("cliente", "   ".into()).unwrap();
        let errors = validate_step(&step(), &registry);
        assert_eq!(errors["cliente"].to_string(), "required");
    }

    #[test]
    fn test_shape_rules_apply_to_filled_values() {
        let mut registry = FieldRegistry::seeded(&step().fields);
        registry.set("cliente", "Acme".into()).unwrap();
        registry.set("email", "not-an-email".into()).unwrap();
        registry.set("cantidad", FieldValue::Number(0.0)).unwrap();

        let errors = validate_step(&step(), &registry);
        assert_eq!(errors.get("email"), Some(&ValidationError::InvalidEmail));
        assert_eq!(errors.get("cantidad"), Some(&ValidationError::NotPositive));

        registry.set("email", "juan.perez@techcorp.com".into()).unwrap();
        registry.set("cantidad", "3".into()).unwrap();
        assert!(validate_step(&step(), &registry).is_empty());
    }

    #[test]
    fn test_non_finite_quantity_is_not_positive() {
        let mut registry = FieldRegistry::seeded(&step().fields);
        registry.set("cliente", "Acme".into()).unwrap();
        registry.set("email", "demo@htl.com".into()).unwrap();

        for raw in ["inf", "infinity", "NaN", "-inf"] {
            let value = FieldValue::from_input(&FieldKind::Number, raw);
            assert_eq!(value, FieldValue::text(raw));
            registry.set("cantidad", value).unwrap();
            let errors = validate_step(&step(), &registry);
            assert_eq!(errors.get("cantidad"), Some(&ValidationError::NotPositive), "{}", raw);
        }

        registry.set("cantidad", FieldValue::Number(f64::INFINITY)).unwrap();
        assert_eq!(
            validate_step(&step(), &registry).get("cantidad"),
            Some(&ValidationError::NotPositive)
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("demo@htl.com"));
        assert!(!looks_like_email("demo@htl"));
        assert!(!looks_like_email("@htl.com"));
        assert!(!looks_like_email("a b@htl.com"));
        assert!(!looks_like_email("a@b@htl.com"));
    }
}
