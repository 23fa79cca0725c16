use crate::shared::icons::icon;
use contracts::shared::sla::SlaIndicator;
use leptos::prelude::*;

/// Counter card on the dashboard. The SLA light only tints the card.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)] value: Signal<usize>,
    #[prop(into, optional)] sla: Signal<Option<SlaIndicator>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let status_class = move || match sla.get() {
        Some(SlaIndicator::Green) => "stat-card stat-card--success",
        Some(SlaIndicator::Red) => "stat-card stat-card--error",
        Some(SlaIndicator::Yellow) => "stat-card stat-card--warning",
        _ => "stat-card",
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div
            class=status_class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get().to_string()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
