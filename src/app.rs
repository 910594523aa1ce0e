//! Checklist App
//!
//! Top-level component: renders the document and restores saved checkbox
//! state once it is mounted.

use leptos::prelude::*;

use crate::components::{ExportButton, SectionView, StatusBar};
use crate::export::ExportOptions;
use crate::models::ChecklistDocument;
use crate::status::StatusContext;
use crate::sync;

#[component]
pub fn App() -> impl IntoView {
    let document = ChecklistDocument::api_endpoints();
    let options = ExportOptions {
        file_name: document.export_file_name.clone(),
        title: Some(document.title.clone()),
        ..ExportOptions::default()
    };

    provide_context(StatusContext::new());

    // Restore saved checkbox state once the document is in the DOM
    Effect::new(move |_| {
        sync::load_checkbox_states();
    });

    view! {
        <div class="container">
            <h1>{document.title.clone()}</h1>
            {document
                .sections
                .iter()
                .cloned()
                .map(|section| view! { <SectionView section=section /> })
                .collect_view()}
            <ExportButton options=options />
            <StatusBar />
        </div>
    }
}
