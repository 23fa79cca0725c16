use super::view_model::ChecklistBoardViewModel;
use contracts::domain::c008_checklist::{Checklist, ChecklistKind, ChecklistStatus};
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, Checkbox, Input, StatusBadge};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::config::use_config;
use crate::shared::connectivity::use_connectivity;
use crate::shared::i18n::{use_i18n, I18nContext};

#[component]
pub fn ChecklistBoardPage() -> impl IntoView {
    let config = use_config();
    let i18n = use_i18n();
    let vm = ChecklistBoardViewModel::load(&config, use_connectivity());
    vm.start_autosave(config.get().timing.checklist_autosave_secs);

    let kind_filters: Vec<(Option<ChecklistKind>, &'static str)> = vec![
        (None, "checklists.all"),
        (Some(ChecklistKind::Fat), "checklists.fat"),
        (Some(ChecklistKind::Sat), "checklists.sat"),
    ];

    view! {
        <div class="page checklists">
            <PageHeader
                title=Signal::derive(move || i18n.t("checklists.title"))
                subtitle=Signal::derive(move || Some(i18n.t("checklists.subtitle")))
            >
                {move || vm.saved_at.get().map(|at| view! {
                    <span class="checklists__saved">
                        {format!("{} {}", i18n.t("checklists.autosaved"), at.with_timezone(&chrono::Local).format("%H:%M"))}
                    </span>
                })}
            </PageHeader>

            <div class="checklists__counts">
                {ChecklistStatus::all().into_iter().enumerate().map(|(i, status)| view! {
                    <CardAnimated delay_ms={i as u32 * 80}>
                        <div class="checklists__count">
                            <StatusBadge status=status>{move || i18n.t(status.label_key())}</StatusBadge>
                            <span class="checklists__count-value">{move || vm.counts().get(status)}</span>
                        </div>
                    </CardAnimated>
                }).collect_view()}
            </div>

            <div class="checklists__filters">
                <div class="checklists__kinds">
                    {kind_filters.into_iter().map(|(kind, label)| view! {
                        <button
                            class="button button--ghost"
                            class:button--active=move || vm.filter.with(|f| f.kind == kind)
                            on:click=move |_| vm.set_kind(kind)
                        >
                            {move || i18n.t(label)}
                        </button>
                    }).collect_view()}
                </div>
                <Input
                    placeholder=Signal::derive(move || Some(i18n.t("common.search")))
                    value=Signal::derive(move || vm.filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |v| vm.set_search(v))
                />
            </div>

            <div class="checklists__layout">
                <div class="checklists__list">
                    <Show
                        when=move || !vm.visible().is_empty()
                        fallback=move || view! { <div class="placeholder">{move || i18n.t("common.empty")}</div> }
                    >
                        <For
                            each=move || vm.visible()
                            key=|c| (c.id.clone(), c.checked_count(), c.status)
                            children=move |checklist: Checklist| view! {
                                <ChecklistRow checklist=checklist vm=vm i18n=i18n />
                            }
                        />
                    </Show>
                </div>

                <div class="checklists__editor">
                    {move || vm.selected_checklist().map(|checklist| view! {
                        <ChecklistEditor checklist=checklist vm=vm i18n=i18n />
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ChecklistRow(checklist: Checklist, vm: ChecklistBoardViewModel, i18n: I18nContext) -> impl IntoView {
    let id = StoredValue::new(checklist.id.clone());
    let percent = checklist.progress_percent();
    let status = checklist.status;
    let kind = checklist.kind;
    let is_selected = move || id.with_value(|id| vm.selected.get().as_deref() == Some(id.as_str()));

    view! {
        <div
            class="checklists__row"
            class:checklists__row--selected=is_selected
            on:click=move |_| id.with_value(|id| vm.select(id))
        >
            <div class="checklists__row-head">
                <span class="checklists__project">{checklist.project_name.clone()}</span>
                <Badge variant="primary">{kind.code()}</Badge>
                <StatusBadge status=status>{move || i18n.t(status.label_key())}</StatusBadge>
            </div>
            <div class="progress">
                <div class="progress__bar" style=format!("width: {}%;", percent)></div>
            </div>
            <div class="checklists__row-meta">
                {format!("{}: {}% ({}/{})", i18n.t("checklists.progress"), percent, checklist.checked_count(), checklist.items.len())}
            </div>
        </div>
    }
}

#[component]
fn ChecklistEditor(checklist: Checklist, vm: ChecklistBoardViewModel, i18n: I18nContext) -> impl IntoView {
    let checklist_id = StoredValue::new(checklist.id.clone());

    view! {
        <CardAnimated>
            <h3 class="checklists__editor-title">
                {format!("{} - {}", checklist.kind.code(), checklist.project_name)}
            </h3>
            <ul class="checklists__items">
                {checklist.items.into_iter().map(|item| {
                    let item_id = StoredValue::new(item.id.clone());
                    let checked = item.checked;
                    let notes = item.notes.clone();
                    view! {
                        <li class="checklists__item">
                            <Checkbox
                                id=item.id.clone()
                                label=item.description.clone()
                                checked=checked
                                on_change=Callback::new(move |_| {
                                    checklist_id.with_value(|cid| item_id.with_value(|iid| vm.toggle_item(cid, iid)))
                                })
                            />
                            <input
                                class="form__input checklists__notes"
                                placeholder=move || i18n.t("checklists.notes")
                                prop:value=notes
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    checklist_id.with_value(|cid| item_id.with_value(|iid| vm.set_notes(cid, iid, &value)));
                                }
                            />
                        </li>
                    }
                }).collect_view()}
            </ul>
        </CardAnimated>
    }
}
