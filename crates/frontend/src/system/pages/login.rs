use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::shared::config::use_config;
use crate::shared::i18n::use_i18n;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let config = use_config();
    let (_, set_auth_state) = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let config = config.clone();
        spawn_local(async move {
            // On success the auth gate swaps this page for the main layout
            if let Err(e) = do_login(config, set_auth_state, request).await {
                log::debug!("login rejected: {}", e);
                set_error_message.set(Some(i18n.t("auth.invalid")));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"HTL"</h1>
                <h2>{move || i18n.t("auth.login")}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Input
                        id="email"
                        label=Signal::derive(move || Some(i18n.t("auth.email")))
                        input_type="email"
                        autocomplete="username"
                        placeholder="usuario@empresa.com"
                        value=email
                        on_input=Callback::new(move |v| set_email.set(v))
                    />
                    <Input
                        id="password"
                        label=Signal::derive(move || Some(i18n.t("auth.password")))
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |v| set_password.set(v))
                    />

                    <Button button_type="submit" class="login-submit" disabled=is_loading>
                        {move || if is_loading.get() { i18n.t("common.loading") } else { i18n.t("auth.login") }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
