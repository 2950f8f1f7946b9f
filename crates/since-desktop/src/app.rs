//! Main application component

use std::sync::atomic::Ordering;
use std::time::Duration;

use dioxus::desktop::window;
use dioxus::prelude::*;

use since_core::surface::{PresentationSurface, SurfaceState};
use since_core::{SettingsDocument, SettingsStore};

use crate::bridge::take_pending_apply;
use crate::components::{open_settings_window, Widget};
use crate::state::WidgetState;
use crate::surface::apply_to_widget;
use crate::tray::{process_tray_events, OPEN_SETTINGS, QUIT_REQUESTED};
use crate::{WIDGET_HEIGHT, WIDGET_WIDTH};

/// Root component of the widget window
#[component]
pub fn App() -> Element {
    let mut surface = use_signal(|| SurfaceState::new(WIDGET_WIDTH, WIDGET_HEIGHT));
    let pinned = use_signal(|| true);
    let menu = use_signal(|| None);
    let mut initialized = use_signal(|| false);

    // Apply the persisted settings once the window exists
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true);

        let document = load_settings();
        apply_to_widget(&document, &mut surface.write(), &window());
        tracing::info!("Widget initialized");
    });

    // Refresh the elapsed-time text
    use_future(move || async move {
        loop {
            let now = chrono::Local::now().naive_local();
            let text = surface.peek().timer.render(now);
            if surface.peek().text.content != text {
                surface.write().set_text_content(&text);
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    });

    // Poll for tray events and settings applied from the editor
    use_future(move || async move {
        loop {
            process_tray_events();

            if OPEN_SETTINGS.swap(false, Ordering::SeqCst) {
                open_settings_window();
            }

            if QUIT_REQUESTED.swap(false, Ordering::SeqCst) {
                tracing::info!("Quit requested from tray");
                std::process::exit(0);
            }

            if let Some(document) = take_pending_apply() {
                apply_to_widget(&document, &mut surface.write(), &window());
            }

            // Poll at ~60fps
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    });

    use_context_provider(|| WidgetState {
        surface,
        pinned,
        menu,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/widget.css") }
        Widget {}
    }
}

fn load_settings() -> SettingsDocument {
    match SettingsStore::open_default() {
        Ok(store) => store.load(),
        Err(e) => {
            tracing::warn!("Settings directory unavailable, using defaults: {}", e);
            SettingsDocument::default()
        }
    }
}
