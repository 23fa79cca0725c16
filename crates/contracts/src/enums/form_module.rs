use serde::{Deserialize, Serialize};

/// Business modules that own a form and their own list of submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormModule {
    /// SOP 1 - quotations
    Quotation,
    /// SOP 2 - material/service requisitions
    Requisition,
    /// SOP 3 - material control (cost discharge to a project)
    MaterialControl,
    /// SOP 4 - demo equipment loan
    EquipmentLoan,
    /// SOP 5 - support & service tickets
    SupportTicket,
    /// F-SAP - material exit form
    MaterialExit,
    /// F-DEM - demo loan request form
    DemoLoanRequest,
    /// FAT/SAT checklists
    Checklist,
}

impl FormModule {
    /// Stable code used in storage keys and tab keys
    pub fn code(&self) -> &'static str {
        match self {
            FormModule::Quotation => "sop1_quotation",
            FormModule::Requisition => "sop2_requisition",
            FormModule::MaterialControl => "sop3_material_control",
            FormModule::EquipmentLoan => "sop4_equipment_loan",
            FormModule::SupportTicket => "sop5_support_ticket",
            FormModule::MaterialExit => "f_sap",
            FormModule::DemoLoanRequest => "f_dem",
            FormModule::Checklist => "fat_sat",
        }
    }

    /// Localizer key of the module title
    pub fn title_key(&self) -> &'static str {
        match self {
            FormModule::Quotation => "sop1.title",
            FormModule::Requisition => "sop2.title",
            FormModule::MaterialControl => "sop3.title",
            FormModule::EquipmentLoan => "sop4.title",
            FormModule::SupportTicket => "sop5.title",
            FormModule::MaterialExit => "fsap.title",
            FormModule::DemoLoanRequest => "fdem.title",
            FormModule::Checklist => "checklists.title",
        }
    }

    pub fn nav_key(&self) -> &'static str {
        match self {
            FormModule::Quotation => "nav.sop1",
            FormModule::Requisition => "nav.sop2",
            FormModule::MaterialControl => "nav.sop3",
            FormModule::EquipmentLoan => "nav.sop4",
            FormModule::SupportTicket => "nav.sop5",
            FormModule::MaterialExit => "nav.fsap",
            FormModule::DemoLoanRequest => "nav.fdem",
            FormModule::Checklist => "nav.checklists",
        }
    }

    /// Localizer keys derived from the title key: "sop1.subtitle", "sop1.new"
    pub fn subtitle_key(&self) -> String {
        self.localizer_key("subtitle")
    }

    pub fn new_key(&self) -> String {
        self.localizer_key("new")
    }

    fn localizer_key(&self, suffix: &str) -> String {
        let prefix = self.title_key().trim_end_matches(".title");
        format!("{}.{}", prefix, suffix)
    }

    /// Prefix of the human-facing document number (e.g. "COT-2024-7")
    pub fn folio_prefix(&self) -> &'static str {
        match self {
            FormModule::Quotation => "COT",
            FormModule::Requisition => "REQ",
            FormModule::MaterialControl => "CM",
            FormModule::EquipmentLoan => "DEMO",
            FormModule::SupportTicket => "SRV",
            FormModule::MaterialExit => "FSAP",
            FormModule::DemoLoanRequest => "FDEM",
            FormModule::Checklist => "CHK",
        }
    }

    /// True for modules whose form is a wizard (everything except checklists)
    pub fn has_wizard(&self) -> bool {
        !matches!(self, FormModule::Checklist)
    }

    pub fn all() -> Vec<FormModule> {
        vec![
            FormModule::Quotation,
            FormModule::Requisition,
            FormModule::MaterialControl,
            FormModule::EquipmentLoan,
            FormModule::SupportTicket,
            FormModule::MaterialExit,
            FormModule::DemoLoanRequest,
            FormModule::Checklist,
        ]
    }

    /// The five SOP workflows, in menu order
    pub fn sops() -> Vec<FormModule> {
        vec![
            FormModule::Quotation,
            FormModule::Requisition,
            FormModule::MaterialControl,
            FormModule::EquipmentLoan,
            FormModule::SupportTicket,
        ]
    }

    /// Parse from a module code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

impl std::fmt::Display for FormModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for module in FormModule::all() {
            assert_eq!(FormModule::from_code(module.code()), Some(module));
        }
        assert_eq!(FormModule::from_code("sop9"), None);
    }

    #[test]
    fn test_derived_localizer_keys() {
        assert_eq!(FormModule::Quotation.subtitle_key(), "sop1.subtitle");
        assert_eq!(FormModule::MaterialExit.new_key(), "fsap.new");
        assert_eq!(FormModule::Checklist.subtitle_key(), "checklists.subtitle");
    }

    #[test]
    fn test_only_checklist_has_no_wizard() {
        let without: Vec<_> = FormModule::all()
            .into_iter()
            .filter(|m| !m.has_wizard())
            .collect();
        assert_eq!(without, vec![FormModule::Checklist]);
    }
}
