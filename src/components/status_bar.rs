//! Status Bar Component
//!
//! Fixed status element; hidden whenever there is no active notice.

use leptos::prelude::*;

use crate::status::StatusContext;

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<StatusContext>().expect("StatusContext should be provided");
    let message = ctx.message;

    view! {
        <div
            id="status"
            class=move || match message.get() {
                Some(m) => format!("status {}", m.kind.css_class()),
                None => "status".to_string(),
            }
            style:display=move || if message.get().is_some() { "block" } else { "none" }
        >
            {move || message.get().map(|m| m.text)}
        </div>
    }
}
