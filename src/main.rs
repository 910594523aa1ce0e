//! Checklist Frontend Entry Point

mod api;
mod app;
mod components;
mod document;
mod export;
mod models;
mod status;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
