//! Hand-off between the settings window and the widget window.
//!
//! Each window runs its own virtual DOM, so the editor posts validated
//! documents here and the widget's poll loop picks them up.

use std::sync::Mutex;

use since_core::editor::ApplyTarget;
use since_core::SettingsDocument;

/// Latest document the editor applied; a newer one replaces an unread one.
static PENDING_APPLY: Mutex<Option<SettingsDocument>> = Mutex::new(None);

/// Take the pending document, if any.
pub fn take_pending_apply() -> Option<SettingsDocument> {
    match PENDING_APPLY.lock() {
        Ok(mut pending) => pending.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}

/// `ApplyTarget` that forwards to the widget window.
pub struct WidgetTarget;

impl ApplyTarget for WidgetTarget {
    fn apply_document(&mut self, document: &SettingsDocument) {
        let mut pending = match PENDING_APPLY.lock() {
            Ok(pending) => pending,
            Err(poisoned) => poisoned.into_inner(),
        };
        *pending = Some(document.clone());
        tracing::debug!("Queued settings for the widget window");
    }
}

