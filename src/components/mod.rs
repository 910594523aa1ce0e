//! UI Components
//!
//! Leptos components for the checklist document.

mod export_button;
mod section_view;
mod status_bar;

pub use export_button::ExportButton;
pub use section_view::SectionView;
pub use status_bar::StatusBar;
