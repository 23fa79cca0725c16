use leptos::prelude::*;

use super::FieldError;

/// Multi-line text field used for long free-text answers.
#[component]
pub fn Textarea(
    id: String,
    label: String,
    #[prop(optional)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <textarea
                id=id
                class="form__textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError message=error />
        </div>
    }
}
