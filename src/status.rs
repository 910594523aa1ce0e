//! Status Notices
//!
//! Transient success/error banner state, provided via Leptos context.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen
const STATUS_VISIBLE_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Status signals provided via context
#[derive(Clone, Copy)]
pub struct StatusContext {
    /// Current notice, if any - read
    pub message: ReadSignal<Option<StatusMessage>>,
    set_message: WriteSignal<Option<StatusMessage>>,
}

impl StatusContext {
    pub fn new() -> Self {
        let (message, set_message) = signal(None);
        Self {
            message,
            set_message,
        }
    }

    /// Show a notice for three seconds. A second call overwrites the text
    /// immediately; the earlier hide timer still fires (no queue).
    pub fn show(&self, text: &str, kind: StatusKind) {
        self.set_message.set(Some(StatusMessage {
            text: text.to_string(),
            kind,
        }));

        let set_message = self.set_message;
        spawn_local(async move {
            TimeoutFuture::new(STATUS_VISIBLE_MS).await;
            set_message.set(None);
        });
    }
}

impl Default for StatusContext {
    fn default() -> Self {
        Self::new()
    }
}
