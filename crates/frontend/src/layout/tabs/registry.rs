//! Tab content registry: the one place that maps a tab key to a view.

use super::tab_labels::TabTarget;
use crate::dashboards::OverviewDashboard;
use crate::domain::c008_checklist::ui::board::ChecklistBoardPage;
use crate::domain::forms::ui::details::WizardPage;
use crate::domain::forms::ui::list::SubmissionList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let Some(target) = TabTarget::parse(key) else {
        log!("unknown tab key '{}'", key);
        let message = format!("Unknown tab: {}", key);
        return view! { <div class="placeholder">{message}</div> }.into_any();
    };

    match target {
        TabTarget::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        TabTarget::Checklists => view! { <ChecklistBoardPage /> }.into_any(),
        TabTarget::Submissions(module) => view! { <SubmissionList module=module /> }.into_any(),
        TabTarget::Wizard(module) => {
            let key_for_close = key.to_string();
            view! {
                <WizardPage
                    module=module
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
    }
}
