//! Thaw `Card` with the `card-appear` entry animation.
//!
//! ```ignore
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Step between consecutive cards of a grid.
pub const CARD_STAGGER_MS: u32 = 80;

#[component]
pub fn CardAnimated(
    /// Animation delay, for a staggered grid.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
