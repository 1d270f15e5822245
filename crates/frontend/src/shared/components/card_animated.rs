//! CardAnimated: Thaw `Card` with the `card-appear` entrance animation.
//!
//! The keyframes live in `style/main.css`. Pass increasing `delay_ms` values
//! for a staggered list:
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=50>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes on the wrapper, reactive (e.g. the selected ring)
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <div class=move || format!("card-animated {}", class.get().unwrap_or_default())>
            <Card attr:style=style>
                {children()}
            </Card>
        </div>
    }
}
