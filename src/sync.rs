//! Checkbox State Sync
//!
//! Persists checkbox toggles to the backend and restores saved state on load.

use std::collections::BTreeMap;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api;
use crate::models::StateRequest;
use crate::status::{StatusContext, StatusKind};

/// Selector for every synced checkbox on the page
const CHECKBOX_SELECTOR: &str = "input[type=\"checkbox\"][data-md-id]";

/// Send one toggled checkbox to the backend. On any failure (transport error
/// or non-OK status) the checkbox is flipped back to its pre-toggle value and
/// an error notice is shown. No retry.
pub async fn send_checkbox_state(input: HtmlInputElement, status: StatusContext) {
    let Some(md_id) = input.get_attribute("data-md-id") else {
        web_sys::console::error_1(&"[SYNC] checkbox without data-md-id".into());
        return;
    };
    let is_checked = input.checked();
    let req = StateRequest {
        md_id,
        check_id: input.id(),
        state: is_checked,
    };

    match api::save_state(&req).await {
        Ok(()) => status.show("Checkbox state saved", StatusKind::Success),
        Err(err) => {
            web_sys::console::error_1(&format!("[SYNC] save failed: {}", err).into());
            status.show("Failed to save checkbox state", StatusKind::Error);
            // Revert to the pre-toggle value
            input.set_checked(!is_checked);
        }
    }
}

/// Restore saved state for every checkbox group on the page. One GET per
/// distinct md_id, all in flight concurrently; a failed group keeps its
/// defaults and only logs.
pub fn load_checkbox_states() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(CHECKBOX_SELECTOR) else {
        return;
    };

    let mut inputs = Vec::new();
    let mut md_ids = Vec::new();
    for i in 0..nodes.length() {
        let Some(input) = nodes
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let Some(md_id) = input.get_attribute("data-md-id") else {
            continue;
        };
        inputs.push(input);
        md_ids.push(md_id);
    }

    for (md_id, indices) in group_indices_by_md_id(&md_ids) {
        let group: Vec<HtmlInputElement> = indices.iter().map(|&i| inputs[i].clone()).collect();
        spawn_local(async move {
            match api::fetch_states(&md_id).await {
                Ok(resp) => {
                    // Checked exactly for the returned ids, unchecked otherwise
                    for input in &group {
                        input.set_checked(resp.checked.iter().any(|id| *id == input.id()));
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[SYNC] load failed for md_id {}: {}", md_id, err).into(),
                    );
                }
            }
        });
    }
}

/// Partition checkbox positions by their md_id group
fn group_indices_by_md_id(md_ids: &[String]) -> BTreeMap<String, Vec<usize>> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, md_id) in md_ids.iter().enumerate() {
        groups.entry(md_id.clone()).or_default().push(i);
    }
    groups
}
