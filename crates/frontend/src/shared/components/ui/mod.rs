pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, StatusBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Inline validation message under a form control
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|m| view! { <div class="form__error" role="alert">{m}</div> })
    }
}
