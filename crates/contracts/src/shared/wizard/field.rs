//! Field values, field specs and the per-wizard field registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::WizardError;

/// Current value of a single form field.
///
/// Serialized untagged so a stored snapshot reads like plain JSON:
/// `null`, `"text"`, `true`, `3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// True when the value counts as "not filled in":
    /// unset, or a string that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view of the value. Text is parsed so that number inputs
    /// bound to a text box still validate. Only finite numbers count.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => parse_finite(s),
            _ => None,
        }
        .filter(|n| n.is_finite())
    }

    /// Text shown in an input or a summary row
    pub fn display(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Value typed into an input of the given kind. Empty input clears the
    /// field; number boxes keep unparsable text so validation can flag it.
    pub fn from_input(kind: &FieldKind, raw: &str) -> Self {
        if raw.is_empty() {
            return FieldValue::Empty;
        }
        match kind {
            FieldKind::Number => parse_finite(raw)
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::text(raw)),
            FieldKind::Checkbox => FieldValue::Bool(raw == "true" || raw == "on"),
            _ => FieldValue::text(raw),
        }
    }
}

/// `"inf"` and `"NaN"` parse as `f64` but cannot be stored as JSON numbers
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

/// Input widget type; drives rendering only, validation lives in [`FieldRule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Phone,
    Date,
    Number,
    Checkbox,
    Choice(Vec<String>),
}

/// Declarative per-field predicate evaluated by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    /// Value must not be blank
    Required,
    /// Value must look like `local@domain.tld`
    Email,
    /// Value must parse as a number greater than zero
    PositiveNumber,
}

/// Declarative description of one field of a wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub default: FieldValue,
    pub rules: Vec<FieldRule>,
    pub placeholder: Option<String>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        let default = match kind {
            FieldKind::Checkbox => FieldValue::Bool(false),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            default,
            rules: Vec::new(),
            placeholder: None,
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn long_text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::LongText)
    }

    pub fn choice(key: &str, label: &str, options: &[&str]) -> Self {
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        let first = options.first().cloned().unwrap_or_default();
        Self::new(key, label, FieldKind::Choice(options)).default_value(first)
    }

    pub fn checkbox(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Checkbox)
    }

    pub fn required(mut self) -> Self {
        if !self.rules.contains(&FieldRule::Required) {
            self.rules.insert(0, FieldRule::Required);
        }
        self
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
        self
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = value.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&FieldRule::Required)
    }

    /// Options of a `Choice` field, empty for any other kind
    pub fn options(&self) -> &[String] {
        match &self.kind {
            FieldKind::Choice(options) => options,
            _ => &[],
        }
    }
}

/// Field key -> current value for one wizard instance.
///
/// The key set is fixed at construction: exactly the fields declared
/// across the wizard's steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRegistry {
    values: BTreeMap<String, FieldValue>,
}

impl FieldRegistry {
    /// Seed a registry from field specs using their defaults
    pub fn seeded<'a>(specs: impl IntoIterator<Item = &'a FieldSpec>) -> Self {
        let values = specs
            .into_iter()
            .map(|spec| (spec.key.clone(), spec.default.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Write a value for a declared key.
    pub fn set(&mut self, key: &str, value: FieldValue) -> Result<(), WizardError> {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(WizardError::UnknownField(key.to_string())),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text of a field, empty string for missing or non-text values
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(FieldValue::display).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::text("   ").is_blank());
        assert!(!FieldValue::text(" a ").is_blank());
        assert!(!FieldValue::Bool(false).is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_from_input_by_kind() {
        assert_eq!(FieldValue::from_input(&FieldKind::Number, "12.5"), FieldValue::Number(12.5));
        assert_eq!(FieldValue::from_input(&FieldKind::Number, "abc"), FieldValue::text("abc"));
        assert_eq!(FieldValue::from_input(&FieldKind::Number, "inf"), FieldValue::text("inf"));
        assert_eq!(FieldValue::text("NaN").as_number(), None);
        assert_eq!(FieldValue::from_input(&FieldKind::Number, ""), FieldValue::Empty);
        assert_eq!(FieldValue::from_input(&FieldKind::Email, "a@b.co"), FieldValue::text("a@b.co"));
        assert_eq!(FieldValue::from_input(&FieldKind::Checkbox, "true"), FieldValue::Bool(true));
    }

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(FieldValue::Number(3.0).display(), "3");
        assert_eq!(FieldValue::Number(2.5).display(), "2.5");
        assert_eq!(FieldValue::text("12").as_number(), Some(12.0));
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_string(&vec![
            FieldValue::Empty,
            FieldValue::Bool(true),
            FieldValue::Number(4.0),
            FieldValue::text("x"),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,true,4.0,"x"]"#);

        let back: Vec<FieldValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[3], FieldValue::text("x"));
        assert_eq!(back[0], FieldValue::Empty);
    }

    #[test]
    fn test_registry_rejects_undeclared_key() {
        let specs = vec![FieldSpec::text("cliente", "Cliente")];
        let mut registry = FieldRegistry::seeded(&specs);

        assert!(registry.set("cliente", "Acme".into()).is_ok());
        assert_eq!(registry.text("cliente"), "Acme");
        assert_eq!(
            registry.set("otro", "x".into()),
            Err(WizardError::UnknownField("otro".into()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_choice_defaults_to_first_option() {
        let spec = FieldSpec::choice("tipo", "Tipo", &["Preventa", "Postventa"]);
        assert_eq!(spec.default, FieldValue::text("Preventa"));
        assert_eq!(spec.options().len(), 2);
    }
}
