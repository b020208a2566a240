//! Application Context
//!
//! Shared state provided via Leptos Context API: the event editor modal
//! state machine. `None` = closed, a draft without id = creating-new, a
//! draft with id = editing-existing.

use leptos::prelude::*;

use crate::models::EventDraft;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Event editor modal state - read
    pub editing_event: ReadSignal<Option<EventDraft>>,
    set_editing_event: WriteSignal<Option<EventDraft>>,
}

impl AppContext {
    pub fn new(
        editing_event: (ReadSignal<Option<EventDraft>>, WriteSignal<Option<EventDraft>>),
    ) -> Self {
        Self {
            editing_event: editing_event.0,
            set_editing_event: editing_event.1,
        }
    }

    /// Open the event editor on a draft
    pub fn open_event_editor(&self, draft: EventDraft) {
        self.set_editing_event.set(Some(draft));
    }

    /// Close the event editor
    pub fn close_event_editor(&self) {
        self.set_editing_event.set(None);
    }
}
