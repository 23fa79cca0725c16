use leptos::prelude::*;

use super::FieldError;

/// Single-line input. Labels and placeholders may be reactive so they follow
/// the language switch; an error marks the input invalid.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" when omitted
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let invalid = move || error.with(|e| e.is_some());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || if invalid() { "form__input form__input--invalid" } else { "form__input" }
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                autocomplete=autocomplete
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError message=error />
        </div>
    }
}
