//! Export Button Component
//!
//! Triggers the client-side Markdown download.

use leptos::prelude::*;

use crate::export::{self, ExportOptions};
use crate::status::{StatusContext, StatusKind};

#[component]
pub fn ExportButton(options: ExportOptions) -> impl IntoView {
    let ctx = use_context::<StatusContext>().expect("StatusContext should be provided");

    view! {
        <div class="button-container">
            <button
                id="downloadMarkdownBtn"
                on:click=move |_| {
                    if let Err(err) = export::download_markdown(&options) {
                        web_sys::console::error_1(&format!("[EXPORT] {}", err).into());
                        ctx.show("Failed to export Markdown", StatusKind::Error);
                    }
                }
            >
                "Download Markdown"
            </button>
        </div>
    }
}
