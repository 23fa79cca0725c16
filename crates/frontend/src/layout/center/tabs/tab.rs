use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let i18n = use_i18n();

    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str())));

    let on_click = move |_| key.with_value(|k| tabs_store.activate_tab(k));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    let title = move || key.with_value(|k| tab_label_for_key(k, &i18n.localizer()));

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            {icon(tab.icon)}
            <span>{title}</span>
            {if tab.dirty { " *" } else { "" }}
            <button class="tab-close" on:click=on_close>{icon("x")}</button>
        </div>
    }
}
