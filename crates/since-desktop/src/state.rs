//! Widget window state
//!
//! Shared with the widget's child components via a Dioxus context provider.

use dioxus::prelude::*;

use since_core::surface::SurfaceState;

/// Where the right-click menu is open, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuAnchor {
    pub x: f64,
    pub y: f64,
}

/// Widget window state
#[derive(Clone, Copy)]
pub struct WidgetState {
    /// Everything the settings pipeline and the timer render into
    pub surface: Signal<SurfaceState>,
    /// Pinned widgets ignore drags
    pub pinned: Signal<bool>,
    /// Open context menu, if any
    pub menu: Signal<Option<MenuAnchor>>,
}

impl WidgetState {
    pub fn toggle_pinned(&mut self) {
        let pinned = (self.pinned)();
        self.pinned.set(!pinned);
        tracing::info!("Widget {}", if pinned { "unpinned" } else { "pinned" });
    }

    /// Menu label for the pin toggle.
    pub fn pin_label(&self) -> &'static str {
        if (self.pinned)() {
            "取消固定"
        } else {
            "固定"
        }
    }
}
