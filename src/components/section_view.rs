//! Section Component
//!
//! Renders one document section: heading, paragraphs, code samples and the
//! checkbox lists consumed by the state sync.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::models::{Block, ListEntry, Section};
use crate::status::StatusContext;
use crate::sync;

/// One `.section` container (one `##` block in the export)
#[component]
pub fn SectionView(section: Section) -> impl IntoView {
    let md_id = section.md_id.clone();

    view! {
        <div class="section">
            <h2>{section.title.clone()}</h2>
            {section
                .blocks
                .iter()
                .map(|block| block_view(block, &md_id))
                .collect_view()}
        </div>
    }
}

fn block_view(block: &Block, md_id: &str) -> AnyView {
    match block {
        Block::SubHeading(text) => view! { <h3>{text.clone()}</h3> }.into_any(),
        Block::Paragraph(text) => view! { <p>{text.clone()}</p> }.into_any(),
        Block::Code(code) => view! { <pre><code>{code.clone()}</code></pre> }.into_any(),
        Block::List(entries) => view! {
            <ul>
                {entries
                    .iter()
                    .map(|entry| entry_view(entry, md_id))
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}

fn entry_view(entry: &ListEntry, md_id: &str) -> AnyView {
    let Some(check_id) = entry.check_id.clone() else {
        return view! { <li>{entry.text.clone()}</li> }.into_any();
    };

    let ctx = use_context::<StatusContext>().expect("StatusContext should be provided");
    let md_id = md_id.to_string();

    view! {
        <li>
            <input
                type="checkbox"
                id=check_id.clone()
                data-md-id=md_id
                on:change=move |ev| {
                    let Some(target) = ev.target() else { return };
                    let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
                        return;
                    };
                    spawn_local(sync::send_checkbox_state(input, ctx));
                }
            />
            <label for=check_id>{entry.text.clone()}</label>
        </li>
    }
    .into_any()
}
