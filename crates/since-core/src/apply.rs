//! Maps a [`SettingsDocument`] onto a [`PresentationSurface`].
//!
//! Every step overwrites the attributes it owns, so applying the same
//! document twice leaves the surface exactly as applying it once.

use crate::avatar::resolve_avatar_settings;
use crate::models::{AnchorPosition, ArgbColor, SettingsDocument, DEFAULT_THEME_COLOR};
use crate::surface::{AvatarSide, PresentationSurface, Slot, WorkArea};
use crate::timer::TimerPresenter;

const FALLBACK_FILL: ArgbColor = ArgbColor::new(0xAA, 0x22, 0x22, 0x22);

/// Clamp an opacity into [0,1]; NaN counts as fully visible.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl AnchorPosition {
    /// Top-left corner for a `width` x `height` window anchored in `area`.
    pub fn origin(self, area: WorkArea, width: f64, height: f64) -> (f64, f64) {
        match self {
            Self::TopLeft => (area.left, area.top),
            Self::TopRight => (area.right - width, area.top),
            Self::BottomLeft => (area.left, area.bottom - height),
            Self::BottomRight => (area.right - width, area.bottom - height),
            Self::Center => (
                area.left + (area.width() - width) / 2.0,
                area.top + (area.height() - height) / 2.0,
            ),
        }
    }
}

/// Run every application step in order.
///
/// `work_area` is `None` when the screen cannot be queried; the window
/// position is then left where it is.
pub fn apply_settings<S>(document: &SettingsDocument, surface: &mut S, work_area: Option<WorkArea>)
where
    S: PresentationSurface + ?Sized,
{
    apply_opacity(document, surface);
    surface.set_show_in_taskbar(document.show_in_taskbar);
    surface.set_topmost(document.is_topmost);
    apply_theme_color(document, surface);
    apply_font_size(document, surface);
    if let Some(area) = work_area {
        apply_position(document, surface, area);
    }
    apply_timer(document, surface);
    apply_avatars(document, surface);
    apply_corner_radius(document, surface);
    tracing::debug!(
        "Applied settings: anchor={:?} font={:?} topmost={} taskbar={}",
        document.anchor_position,
        document.font_size_bucket,
        document.is_topmost,
        document.show_in_taskbar
    );
}

/// Keep the window opaque and give each slot its own opacity.
pub fn apply_opacity<S: PresentationSurface + ?Sized>(document: &SettingsDocument, surface: &mut S) {
    surface.set_window_opacity(1.0);
    surface.set_opacity(Slot::Background, clamp_unit(document.background_opacity));
    surface.set_opacity(Slot::Text, clamp_unit(document.text_opacity));
    surface.set_opacity(
        Slot::LeftAvatarImage,
        clamp_unit(document.left_avatar_opacity),
    );
    surface.set_opacity(
        Slot::RightAvatarImage,
        clamp_unit(document.right_avatar_opacity),
    );
    surface.set_opacity(Slot::CenterIcon, clamp_unit(document.center_icon_opacity));
}

/// Background fill from `theme_color`.
///
/// The color's own alpha and the background slot opacity stay two separate
/// channels; neither is folded into the other.
pub fn apply_theme_color<S: PresentationSurface + ?Sized>(
    document: &SettingsDocument,
    surface: &mut S,
) {
    let fill = ArgbColor::parse(&document.theme_color).unwrap_or_else(|| {
        tracing::warn!(
            "Invalid theme color '{}', using {}",
            document.theme_color,
            DEFAULT_THEME_COLOR
        );
        FALLBACK_FILL
    });
    surface.set_background_fill(fill);
}

pub fn apply_font_size<S: PresentationSurface + ?Sized>(document: &SettingsDocument, surface: &mut S) {
    surface.set_font_size(document.font_size_bucket.points());
}

pub fn apply_position<S: PresentationSurface + ?Sized>(
    document: &SettingsDocument,
    surface: &mut S,
    area: WorkArea,
) {
    let (width, height) = surface.size();
    let (left, top) = document.anchor_position.origin(area, width, height);
    surface.set_position(left, top);
}

pub fn apply_corner_radius<S: PresentationSurface + ?Sized>(
    document: &SettingsDocument,
    surface: &mut S,
) {
    let radius = if document.corner_radius.is_nan() {
        0.0
    } else {
        document.corner_radius.max(0.0)
    };
    surface.set_corner_radius(radius);
}

/// Hand start time, seconds flag and custom text to the timer.
pub fn apply_timer<S: PresentationSurface + ?Sized>(document: &SettingsDocument, surface: &mut S) {
    surface.set_timer(TimerPresenter::new(
        document.start_time,
        document.show_seconds,
        document.custom_text.clone(),
    ));
}

/// Push names and resolved images into both avatar slots.
///
/// An avatar that does not resolve keeps whatever image it showed before.
pub fn apply_avatars<S: PresentationSurface + ?Sized>(document: &SettingsDocument, surface: &mut S) {
    for (side, avatar) in [
        (AvatarSide::Left, &document.left_avatar),
        (AvatarSide::Right, &document.right_avatar),
    ] {
        surface.set_avatar_name(side, &avatar.display_name);
        match resolve_avatar_settings(avatar) {
            Some(source) => surface.set_avatar_image(side, source),
            None => tracing::debug!(
                "Avatar {:?} did not resolve from '{}'",
                side,
                avatar.source_path
            ),
        }
    }
}
