use leptos::prelude::*;

/// Action button. `variant` is "primary" (default), "secondary" or "ghost".
#[component]
pub fn Button(
    #[prop(optional)] variant: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    /// Defaults to "button" so it never submits a surrounding form by accident
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!("button {} {}", variant_class, class)
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
