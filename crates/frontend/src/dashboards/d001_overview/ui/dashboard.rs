use crate::dashboards::d001_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::module_icon;
use crate::layout::tabs::TabTarget;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{CardAnimated, PageHeader, StatCard};
use crate::shared::config::use_config;
use crate::shared::i18n::use_i18n;
use crate::system::auth::context::use_auth;
use contracts::domain::c008_checklist::ChecklistStatus;
use contracts::shared::activity::ActivitySummary;
use leptos::prelude::*;

/// Landing page: submissions per module with their SLA light, and
/// checklist counts by status.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_config();
    let i18n = use_i18n();
    let (auth_state, _) = use_auth();

    let (summary, set_summary) = signal(None::<ActivitySummary>);

    // Reload whenever the dashboard tab is brought to the front
    let own_key = TabTarget::Dashboard.key();
    Effect::new(move |_| {
        if tabs_store.active.get().as_deref() == Some(own_key.as_str()) {
            set_summary.set(Some(api::load_summary(&config)));
        }
    });

    let welcome = move || {
        let name = auth_state.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
        format!("{}, {}", i18n.t("dashboard.welcome"), name)
    };

    view! {
        <div class="page dashboard">
            <PageHeader title=Signal::derive(welcome)>
                <span class="dashboard__total">
                    {move || format!(
                        "{}: {}",
                        i18n.t("dashboard.submissions"),
                        summary.with(|s| s.as_ref().map(|s| s.total_submissions()).unwrap_or(0))
                    )}
                </span>
            </PageHeader>

            <div class="dashboard__cards">
                {move || summary.get().map(|s| {
                    s.modules.into_iter().enumerate().map(|(i, activity)| {
                        let module = activity.module;
                        let subtitle = Some(i18n.t(activity.sla.label_key()));
                        view! {
                            <CardAnimated delay_ms={i as u32 * 60}>
                                <StatCard
                                    label=Signal::derive(move || i18n.t(module.nav_key()))
                                    icon_name=module_icon(module)
                                    value=activity.submissions
                                    sla=Some(activity.sla)
                                    subtitle=subtitle
                                    on_click=Callback::new(move |_| tabs_store.open(TabTarget::Submissions(module)))
                                />
                            </CardAnimated>
                        }
                    }).collect_view()
                })}
            </div>

            <h2 class="dashboard__section">{move || i18n.t("nav.checklists")}</h2>
            <div class="dashboard__cards dashboard__cards--compact">
                {ChecklistStatus::all().into_iter().map(|status| view! {
                    <div class="dashboard__checklist-count" on:click=move |_| tabs_store.open(TabTarget::Checklists)>
                        <StatusBadge status=status>{move || i18n.t(status.label_key())}</StatusBadge>
                        <span>{move || summary.with(|s| s.as_ref().map(|s| s.checklists.get(status)).unwrap_or(0))}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
