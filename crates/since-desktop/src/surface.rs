//! The widget window as a presentation surface.

use dioxus::desktop::{DesktopContext, LogicalPosition};
use since_core::apply::apply_settings;
use since_core::avatar::AvatarSource;
use since_core::models::ArgbColor;
use since_core::surface::{AvatarSide, PresentationSurface, Slot, SurfaceState};
use since_core::timer::TimerPresenter;
use since_core::SettingsDocument;

#[cfg(target_os = "linux")]
use dioxus::desktop::tao::platform::unix::WindowExtUnix;
#[cfg(windows)]
use dioxus::desktop::tao::platform::windows::WindowExtWindows;

use crate::work_area;

/// Render state plus the native window it is shown in.
///
/// Slot setters only touch the render state; window-level setters are
/// mirrored onto the native window as well.
pub struct NativeSurface<'a> {
    pub state: &'a mut SurfaceState,
    pub desktop: &'a DesktopContext,
}

impl PresentationSurface for NativeSurface<'_> {
    fn set_window_opacity(&mut self, opacity: f64) {
        // Recorded only; the native window has no alpha of its own.
        self.state.set_window_opacity(opacity);
    }

    fn set_opacity(&mut self, slot: Slot, opacity: f64) {
        self.state.set_opacity(slot, opacity);
    }

    fn set_background_fill(&mut self, color: ArgbColor) {
        self.state.set_background_fill(color);
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.state.set_corner_radius(radius);
    }

    fn set_font_size(&mut self, size: f64) {
        self.state.set_font_size(size);
    }

    fn set_text_content(&mut self, content: &str) {
        self.state.set_text_content(content);
    }

    fn set_avatar_image(&mut self, side: AvatarSide, source: AvatarSource) {
        self.state.set_avatar_image(side, source);
    }

    fn set_avatar_name(&mut self, side: AvatarSide, name: &str) {
        self.state.set_avatar_name(side, name);
    }

    fn set_timer(&mut self, timer: TimerPresenter) {
        self.state.set_timer(timer);
    }

    fn size(&self) -> (f64, f64) {
        let size = self
            .desktop
            .outer_size()
            .to_logical::<f64>(self.desktop.scale_factor());
        (size.width, size.height)
    }

    fn set_position(&mut self, left: f64, top: f64) {
        self.state.set_position(left, top);
        self.desktop
            .set_outer_position(LogicalPosition::new(left, top));
    }

    fn set_show_in_taskbar(&mut self, show: bool) {
        self.state.set_show_in_taskbar(show);
        #[cfg(any(windows, target_os = "linux"))]
        {
            if let Err(e) = self.desktop.set_skip_taskbar(!show) {
                tracing::warn!("Failed to update taskbar visibility: {}", e);
            }
        }
    }

    fn set_topmost(&mut self, topmost: bool) {
        self.state.set_topmost(topmost);
        self.desktop.set_always_on_top(topmost);
    }
}

/// Apply `document` to the widget window and refresh the timer text.
pub fn apply_to_widget(
    document: &SettingsDocument,
    state: &mut SurfaceState,
    desktop: &DesktopContext,
) {
    let work_area = work_area::query(desktop);
    let mut surface = NativeSurface { state, desktop };
    let (width, height) = surface.size();
    surface.state.width = width;
    surface.state.height = height;

    apply_settings(document, &mut surface, work_area);

    let now = chrono::Local::now().naive_local();
    let text = surface.state.timer.render(now);
    surface.set_text_content(&text);
}
