use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::connectivity::ConnectivityProvider;
use crate::shared::i18n::I18nProvider;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    provide_context(config);

    // Tabs, sidebar visibility
    provide_context(AppGlobalContext::new());

    provide_context(ToastService::new());

    view! {
        <I18nProvider>
            <ConnectivityProvider>
                <AuthProvider>
                    <AppShell />
                </AuthProvider>
            </ConnectivityProvider>
        </I18nProvider>
    }
}
