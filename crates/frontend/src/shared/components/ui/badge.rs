use contracts::domain::c008_checklist::ChecklistStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Checklist status pill
#[component]
pub fn StatusBadge(
    #[prop(into)] status: Signal<ChecklistStatus>,
    children: Children,
) -> impl IntoView {
    let status_class = move || match status.get() {
        ChecklistStatus::Pending => "badge badge--status badge--status-pending",
        ChecklistStatus::InProgress => "badge badge--status badge--status-in-progress",
        ChecklistStatus::Completed => "badge badge--status badge--status-completed",
    };

    view! {
        <span class=status_class>
            {children()}
        </span>
    }
}
