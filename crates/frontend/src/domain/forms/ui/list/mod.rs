use contracts::domain::{headline_keys, wizard_definition};
use contracts::enums::FormModule;
use contracts::shared::submission::SubmissionRecord;
use leptos::prelude::*;
use uuid::Uuid;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabTarget;
use crate::shared::components::ui::Badge;
use crate::shared::components::PageHeader;
use crate::shared::config::use_config;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::storage::submission_sink;

/// Stored submissions of one module, newest first
#[component]
pub fn SubmissionList(module: FormModule) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_config();
    let i18n = use_i18n();

    let (items, set_items) = signal(Vec::<SubmissionRecord>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let expanded = RwSignal::new(Option::<Uuid>::None);

    let fetch = move || match submission_sink(config.layout()).list(module) {
        Ok(mut records) => {
            records.reverse();
            set_items.set(records);
            set_error.set(None);
        }
        Err(e) => {
            log::warn!("{}: submissions unreadable: {}", module, e);
            set_error.set(Some(e.to_string()));
        }
    };

    // Refetch whenever this tab comes to the front
    let own_key = TabTarget::Submissions(module).key();
    Effect::new(move |_| {
        if tabs_store.active.get().as_deref() == Some(own_key.as_str()) {
            fetch();
        }
    });

    let open_wizard = move |_| tabs_store.open(TabTarget::Wizard(module));
    let headline = headline_keys(module);
    let definition = StoredValue::new(wizard_definition(module));
    let label_of = move |key: &str| {
        definition.with_value(|d| {
            d.as_ref()
                .and_then(|d| d.field(key))
                .map(|spec| spec.label.clone())
                .unwrap_or_else(|| key.to_string())
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || i18n.t(module.title_key()))
                subtitle=Signal::derive(move || Some(i18n.t(&module.subtitle_key())))
            >
                <button class="button button--primary" on:click=open_wizard>
                    {icon("plus")}
                    {move || i18n.t(&module.new_key())}
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show
                when=move || !items.with(|i| i.is_empty())
                fallback=move || view! { <div class="placeholder">{move || i18n.t("common.empty")}</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{move || i18n.t("common.folio")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.description")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.date")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.status")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|record| {
                                let id = record.id;
                                let submitted = record
                                    .submitted_at
                                    .with_timezone(&chrono::Local)
                                    .format("%d/%m/%Y %H:%M")
                                    .to_string();
                                let title = record.headline(headline).unwrap_or_default();
                                let fields: Vec<(String, String)> = record
                                    .fields
                                    .iter()
                                    .filter(|(_, v)| !v.is_blank())
                                    .map(|(k, v)| (label_of(k), v.display()))
                                    .collect();
                                view! {
                                    <tr
                                        class="table__row"
                                        on:click=move |_| expanded.update(|e| {
                                            *e = if *e == Some(id) { None } else { Some(id) };
                                        })
                                    >
                                        <td class="table__cell">{record.folio.clone()}</td>
                                        <td class="table__cell">{title}</td>
                                        <td class="table__cell">{submitted}</td>
                                        <td class="table__cell">
                                            <Badge variant="primary">{move || i18n.t("status.pending")}</Badge>
                                        </td>
                                    </tr>
                                    <Show when=move || expanded.get() == Some(id)>
                                        <tr class="table__row table__row--details">
                                            <td class="table__cell" colspan="4">
                                                <dl class="record-fields">
                                                    {fields.iter().map(|(k, v)| view! {
                                                        <dt>{k.clone()}</dt>
                                                        <dd>{v.clone()}</dd>
                                                    }).collect_view()}
                                                </dl>
                                            </td>
                                        </tr>
                                    </Show>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
