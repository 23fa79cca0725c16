use leptos::prelude::*;

use super::FieldError;

/// Drop-down over `(value, label)` pairs, with a validation message slot.
#[component]
pub fn Select(
    id: String,
    label: String,
    #[prop(into)] value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let options = options
        .into_iter()
        .map(|(val, text)| {
            let selected_val = val.clone();
            view! {
                <option value=val selected=move || value.get() == selected_val>
                    {text}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <select
                id=id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options}
            </select>
            <FieldError message=error />
        </div>
    }
}
