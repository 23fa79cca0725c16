//! Tab keys and titles.
//!
//! Keys are the `?active=` query value, so they must stay stable:
//! `dashboard`, `checklists`, `list_<module code>`, `form_<module code>`.

use contracts::enums::FormModule;
use contracts::shared::i18n::Localizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTarget {
    Dashboard,
    Checklists,
    Submissions(FormModule),
    Wizard(FormModule),
}

const LIST_PREFIX: &str = "list_";
const FORM_PREFIX: &str = "form_";

impl TabTarget {
    pub fn key(&self) -> String {
        match self {
            TabTarget::Dashboard => "dashboard".to_string(),
            TabTarget::Checklists => "checklists".to_string(),
            TabTarget::Submissions(m) => format!("{}{}", LIST_PREFIX, m.code()),
            TabTarget::Wizard(m) => format!("{}{}", FORM_PREFIX, m.code()),
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "dashboard" => Some(TabTarget::Dashboard),
            "checklists" => Some(TabTarget::Checklists),
            k => {
                if let Some(code) = k.strip_prefix(LIST_PREFIX) {
                    FormModule::from_code(code)
                        .filter(|m| m.has_wizard())
                        .map(TabTarget::Submissions)
                } else if let Some(code) = k.strip_prefix(FORM_PREFIX) {
                    FormModule::from_code(code)
                        .filter(|m| m.has_wizard())
                        .map(TabTarget::Wizard)
                } else {
                    None
                }
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TabTarget::Dashboard => "dashboard",
            TabTarget::Checklists => "checklist",
            TabTarget::Submissions(m) | TabTarget::Wizard(m) => module_icon(*m),
        }
    }

    /// Localized title shown in the tab strip and the sidebar
    pub fn title(&self, localizer: &Localizer) -> String {
        match self {
            TabTarget::Dashboard => localizer.t("nav.dashboard").to_string(),
            TabTarget::Checklists => localizer.t("nav.checklists").to_string(),
            TabTarget::Submissions(m) => localizer.t(m.nav_key()).to_string(),
            TabTarget::Wizard(m) => localizer.t(&m.new_key()).to_string(),
        }
    }
}

pub fn module_icon(module: FormModule) -> &'static str {
    match module {
        FormModule::Quotation => "quotation",
        FormModule::Requisition => "requisition",
        FormModule::MaterialControl => "material",
        FormModule::EquipmentLoan => "loan",
        FormModule::SupportTicket => "support",
        FormModule::MaterialExit | FormModule::DemoLoanRequest => "form",
        FormModule::Checklist => "checklist",
    }
}

/// Title for any key; unknown keys are shown as-is.
pub fn tab_label_for_key(key: &str, localizer: &Localizer) -> String {
    TabTarget::parse(key)
        .map(|t| t.title(localizer))
        .unwrap_or_else(|| key.to_string())
}
