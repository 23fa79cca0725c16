//! Top bar: sidebar toggle, brand, pending-sync counter, language switch,
//! user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::use_config;
use crate::shared::connectivity::use_connectivity;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_config();
    let i18n = use_i18n();
    let connectivity = use_connectivity();
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();
    let toggle_language = move |_| i18n.toggle();
    let logout = move |_| do_logout(&config, set_auth_state);

    let pending = move || connectivity.status().pending_count;

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=toggle_sidebar>
                    {icon("menu")}
                </button>
                <span class="top-header__title">"HTL Operaciones"</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || { pending() > 0 }>
                    <span
                        class="top-header__pending"
                        title=move || i18n.t("connection.pending")
                    >
                        {icon("refresh")}
                        {pending}
                    </span>
                </Show>

                <button
                    class="top-header__icon-btn"
                    on:click=toggle_language
                    title=move || i18n.language.get().toggled().display_name()
                >
                    {icon("globe")}
                    <span>{move || i18n.language.get().code().to_uppercase()}</span>
                </button>

                <div class="top-header__user">
                    <span class="top-header__avatar">
                        {move || auth_state.with(|s| s.user().map(|u| u.initials()).unwrap_or_default())}
                    </span>
                    <span>
                        {move || auth_state.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())}
                    </span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    title=move || i18n.t("auth.logout")
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
