//! VLibras sign-language widget.
//!
//! Only the mount point is rendered here; `index.html` loads the widget
//! script, which finds these `vw` attributes on startup.

use leptos::html;
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;

#[component]
pub fn AccessibilityOverlay() -> impl IntoView {
    // `vw` has no hyphen, so the macro would treat it as a typed attribute.
    html::div().attr("vw", "").attr("class", "enabled").child(view! {
        <div vw-access-button="" class="active"></div>
        <div vw-plugin-wrapper="">
            <div class="vw-plugin-top-wrapper"></div>
        </div>
    })
}
