//! Dashboard counters computed from stored data.

use chrono::{DateTime, Utc};
use log::warn;

use super::config::DashboardConfig;
use super::sla::{self, SlaIndicator};
use super::storage::KeyValueStore;
use super::submission::StoreSubmissionSink;
use crate::domain::c008_checklist::{ChecklistBoard, StatusCounts};
use crate::enums::FormModule;

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleActivity {
    pub module: FormModule,
    pub submissions: usize,
    pub last_submitted_at: Option<DateTime<Utc>>,
    /// SLA light for the most recent submission
    pub sla: SlaIndicator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub modules: Vec<ModuleActivity>,
    pub checklists: StatusCounts,
}

impl ActivitySummary {
    pub fn collect<S: KeyValueStore>(
        sink: &StoreSubmissionSink<S>,
        board: &ChecklistBoard,
        config: &DashboardConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let modules = FormModule::all()
            .into_iter()
            .filter(|m| m.has_wizard())
            .map(|module| {
                let records = sink.list(module).unwrap_or_else(|e| {
                    warn!("submissions of {} unreadable: {}", module, e);
                    Vec::new()
                });
                let last_submitted_at = records.iter().map(|r| r.submitted_at).max();
                let sla = match last_submitted_at {
                    Some(at) => sla::evaluate(config.sla_policy(module), at, now),
                    None => SlaIndicator::Unconfigured,
                };
                ModuleActivity {
                    module,
                    submissions: records.len(),
                    last_submitted_at,
                    sla,
                }
            })
            .collect();

        Self {
            modules,
            checklists: board.counts(),
        }
    }

    pub fn total_submissions(&self) -> usize {
        self.modules.iter().map(|m| m.submissions).sum()
    }

    pub fn for_module(&self, module: FormModule) -> Option<&ModuleActivity> {
        self.modules.iter().find(|m| m.module == module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use crate::shared::storage::{MemoryStore, StorageLayout};
    use crate::shared::wizard::FieldRegistry;
    use chrono::Duration;

    #[test]
    fn test_counts_and_sla() {
        let sink = StoreSubmissionSink::new(MemoryStore::new(), StorageLayout::new("t"));
        sink.append(FormModule::SupportTicket, FieldRegistry::default()).unwrap();
        sink.append(FormModule::SupportTicket, FieldRegistry::default()).unwrap();
        sink.append(FormModule::Quotation, FieldRegistry::default()).unwrap();

        let config = load_config(Some(
            "[sla.sop5_support_ticket]\nwarning_after_hours = 2\nbreach_after_hours = 4\n",
        ))
        .unwrap();
        let later = Utc::now() + Duration::hours(3);
        let summary = ActivitySummary::collect(&sink, &ChecklistBoard::seeded(), &config, later);

        assert_eq!(summary.total_submissions(), 3);
        assert_eq!(summary.modules.len(), 7);
        let support = summary.for_module(FormModule::SupportTicket).unwrap();
        assert_eq!(support.submissions, 2);
        assert_eq!(support.sla, SlaIndicator::Yellow);
        let quotes = summary.for_module(FormModule::Quotation).unwrap();
        assert_eq!(quotes.sla, SlaIndicator::Unconfigured);
        assert_eq!(summary.checklists.total(), 3);
    }
}
