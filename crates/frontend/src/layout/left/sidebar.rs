//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabTarget;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::enums::FormModule;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    /// Localizer key
    label: &'static str,
    icon: &'static str,
    items: Vec<TabTarget>,
    /// Permission required to see the group
    permission: Option<&'static str>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboard",
            label: "nav.dashboard",
            icon: "dashboard",
            items: vec![],
            permission: None,
        },
        MenuGroup {
            id: "sops",
            label: "nav.sops",
            icon: "quotation",
            items: FormModule::sops()
                .into_iter()
                .map(TabTarget::Submissions)
                .collect(),
            permission: None,
        },
        MenuGroup {
            id: "formats",
            label: "nav.formats",
            icon: "form",
            items: vec![
                TabTarget::Submissions(FormModule::MaterialExit),
                TabTarget::Submissions(FormModule::DemoLoanRequest),
            ],
            permission: None,
        },
        MenuGroup {
            id: "checklists",
            label: "nav.checklists",
            icon: "checklist",
            items: vec![],
            permission: Some("checklists"),
        },
    ]
}

fn group_target(id: &str) -> Option<TabTarget> {
    match id {
        "dashboard" => Some(TabTarget::Dashboard),
        "checklists" => Some(TabTarget::Checklists),
        _ => None,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec!["sops".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().filter_map(|group| {
                    if let Some(permission) = group.permission {
                        if !auth_state.with_untracked(|s| s.has_permission(permission)) {
                            return None;
                        }
                    }

                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();
                    let direct_key = StoredValue::new(group_target(group.id).map(|t| t.key()));
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    Some(view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    direct_key.with_value(|k| {
                                        k.is_some() && ctx.active.get().as_ref() == k.as_ref()
                                    })
                                }
                                style:padding-left="12px"
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else if let Some(target) = group_target(group.id) {
                                        ctx.open(target);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{move || i18n.t(group.label)}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|target| {
                                                let item_key = StoredValue::new(target.key());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let key = item_key.get_value();
                                                            ctx.active.get().as_ref() == Some(&key)
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| ctx.open(target)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(target.icon())}
                                                            <span>{move || target.title(&i18n.localizer())}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    })
                }).collect_view()}
        </div>
    }
}
