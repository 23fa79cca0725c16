use leptos::prelude::*;

/// Labelled checkbox; reports the new checked state on change.
#[component]
pub fn Checkbox(
    id: String,
    label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
