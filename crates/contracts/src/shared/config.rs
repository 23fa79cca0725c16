use serde::Deserialize;
use std::collections::BTreeMap;

use super::i18n::Language;
use super::sla::SlaPolicy;
use super::storage::StorageLayout;
use crate::enums::FormModule;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    /// Keyed by module code, e.g. `[sla.sop5_support_ticket]`
    #[serde(default)]
    pub sla: BTreeMap<String, SlaPolicy>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub namespace: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub submit_latency_ms: u32,
    pub sync_notice_delay_ms: u32,
    pub login_latency_ms: u32,
    pub checklist_autosave_secs: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct I18nConfig {
    pub default_language: Language,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: "htl".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1500,
            sync_notice_delay_ms: 1000,
            login_latency_ms: 500,
            checklist_autosave_secs: 30,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Es,
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[storage]
namespace = "htl"

[timing]
submit_latency_ms = 1500
sync_notice_delay_ms = 1000
login_latency_ms = 500
checklist_autosave_secs = 30

[i18n]
default_language = "es"

# SLA thresholds are business input; none ship by default.
# [sla.sop5_support_ticket]
# warning_after_hours = 2
# breach_after_hours = 4
"#;

/// Parse `text` if given, otherwise the embedded default.
///
/// Sections missing from `text` keep their defaults.
pub fn load_config(text: Option<&str>) -> anyhow::Result<DashboardConfig> {
    let source = match text {
        Some(text) => {
            log::info!("Loading dashboard config override");
            text
        }
        None => DEFAULT_CONFIG,
    };
    let config: DashboardConfig = toml::from_str(source)?;

    if config.storage.namespace.trim().is_empty() {
        anyhow::bail!("storage.namespace must not be empty");
    }
    for (code, policy) in &config.sla {
        if FormModule::from_code(code).is_none() {
            anyhow::bail!("sla section names unknown module '{}'", code);
        }
        if !policy.is_valid() {
            anyhow::bail!(
                "sla.{}: warning_after_hours ({}) must be below breach_after_hours ({})",
                code,
                policy.warning_after_hours,
                policy.breach_after_hours
            );
        }
    }
    Ok(config)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            timing: TimingConfig::default(),
            i18n: I18nConfig::default(),
            sla: BTreeMap::new(),
        }
    }
}

impl DashboardConfig {
    pub fn storage_layout(&self) -> StorageLayout {
        StorageLayout::new(self.storage.namespace.clone())
    }

    pub fn sla_policy(&self, module: FormModule) -> Option<&SlaPolicy> {
        self.sla.get(module.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.storage.namespace, "htl");
        assert_eq!(config.timing.sync_notice_delay_ms, 1000);
        assert_eq!(config.i18n.default_language, Language::Es);
        assert!(config.sla_policy(FormModule::SupportTicket).is_none());
    }

    #[test]
    fn test_partial_override() {
        let config = load_config(Some(
            r#"
[i18n]
default_language = "en"

[sla.sop5_support_ticket]
warning_after_hours = 2
breach_after_hours = 4
"#,
        ))
        .unwrap();
        assert_eq!(config.i18n.default_language, Language::En);
        assert_eq!(config.timing.submit_latency_ms, 1500);
        let policy = config.sla_policy(FormModule::SupportTicket).unwrap();
        assert_eq!(policy.breach_after_hours, 4);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(load_config(Some("[storage]\nnamespace = \" \"\n")).is_err());
        assert!(load_config(Some("[i18n]\ndefault_language = \"fr\"\n")).is_err());
        assert!(load_config(Some(
            "[sla.sop1_quotation]\nwarning_after_hours = 5\nbreach_after_hours = 5\n"
        ))
        .is_err());
        assert!(load_config(Some(
            "[sla.nope]\nwarning_after_hours = 1\nbreach_after_hours = 5\n"
        ))
        .is_err());
    }
}
