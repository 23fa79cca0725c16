use crate::shared::connectivity::use_connectivity;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Offline warning across the top of the content area
#[component]
pub fn ConnectionBanner() -> impl IntoView {
    let connectivity = use_connectivity();
    let i18n = use_i18n();

    view! {
        <Show when=move || !connectivity.is_online()>
            <div class="connection-banner" role="status">
                {icon("wifi-off")}
                <span>{move || i18n.t("connection.offline")}</span>
                {move || {
                    let pending = connectivity.status().pending_count;
                    (pending > 0).then(|| view! {
                        <span class="connection-banner__pending">
                            {format!("{} {}", pending, i18n.t("connection.pending"))}
                        </span>
                    })
                }}
            </div>
        </Show>
    }
}
