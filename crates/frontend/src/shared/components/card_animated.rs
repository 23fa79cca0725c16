//! Thaw `Card` with the `card-appear` entry animation from `layout.css`.
//!
//! Cards rendered in a row pass increasing `delay_ms` values for a stagger:
//! ```text
//! <CardAnimated delay_ms=0>   first
//! <CardAnimated delay_ms=80>  second
//! <CardAnimated delay_ms=160> third
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
