//! The contract between the settings pipeline and the live widget window.

use crate::avatar::AvatarSource;
use crate::models::{timestamp::default_start_time, ArgbColor, SettingsDocument};
use crate::timer::TimerPresenter;

/// Visual elements of the widget that carry their own opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Background,
    Text,
    LeftAvatarImage,
    RightAvatarImage,
    LeftAvatarName,
    RightAvatarName,
    CenterIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarSide {
    Left,
    Right,
}

/// Usable screen rectangle, excluding taskbars and other reserved regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl WorkArea {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Typed setters the applier drives. Implemented by the desktop window and
/// by [`SurfaceState`].
pub trait PresentationSurface {
    /// Opacity of the whole window, separate from the per-slot values.
    fn set_window_opacity(&mut self, opacity: f64);
    fn set_opacity(&mut self, slot: Slot, opacity: f64);
    fn set_background_fill(&mut self, color: ArgbColor);
    fn set_corner_radius(&mut self, radius: f64);
    fn set_font_size(&mut self, size: f64);
    fn set_text_content(&mut self, content: &str);
    fn set_avatar_image(&mut self, side: AvatarSide, source: AvatarSource);
    fn set_avatar_name(&mut self, side: AvatarSide, name: &str);
    fn set_timer(&mut self, timer: TimerPresenter);
    /// Current window size as `(width, height)`.
    fn size(&self) -> (f64, f64);
    fn set_position(&mut self, left: f64, top: f64);
    fn set_show_in_taskbar(&mut self, show: bool);
    fn set_topmost(&mut self, topmost: bool);
}

/// Background slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundState {
    pub fill: ArgbColor,
    pub opacity: f64,
    pub corner_radius: f64,
}

/// Text slot.
#[derive(Debug, Clone, PartialEq)]
pub struct TextState {
    pub content: String,
    pub font_size: f64,
    pub opacity: f64,
}

/// One avatar image plus the name under it.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarState {
    pub image: Option<AvatarSource>,
    pub image_opacity: f64,
    pub name: String,
    pub name_opacity: f64,
}

impl Default for AvatarState {
    fn default() -> Self {
        Self {
            image: None,
            image_opacity: 1.0,
            name: String::new(),
            name_opacity: 1.0,
        }
    }
}

/// In-memory presentation state; what the desktop shell renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub window_opacity: f64,
    pub background: BackgroundState,
    pub text: TextState,
    pub left_avatar: AvatarState,
    pub right_avatar: AvatarState,
    pub center_icon_opacity: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub show_in_taskbar: bool,
    pub topmost: bool,
    pub timer: TimerPresenter,
}

impl SurfaceState {
    /// Blank surface of the given size at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        let defaults = SettingsDocument::default();
        Self {
            window_opacity: 1.0,
            background: BackgroundState {
                fill: ArgbColor::new(0xFF, 0, 0, 0),
                opacity: 1.0,
                corner_radius: 0.0,
            },
            text: TextState {
                content: String::new(),
                font_size: 14.0,
                opacity: 1.0,
            },
            left_avatar: AvatarState::default(),
            right_avatar: AvatarState::default(),
            center_icon_opacity: 1.0,
            left: 0.0,
            top: 0.0,
            width,
            height,
            show_in_taskbar: true,
            topmost: false,
            timer: TimerPresenter::new(default_start_time(), true, defaults.custom_text),
        }
    }

    pub const fn avatar(&self, side: AvatarSide) -> &AvatarState {
        match side {
            AvatarSide::Left => &self.left_avatar,
            AvatarSide::Right => &self.right_avatar,
        }
    }

    fn avatar_mut(&mut self, side: AvatarSide) -> &mut AvatarState {
        match side {
            AvatarSide::Left => &mut self.left_avatar,
            AvatarSide::Right => &mut self.right_avatar,
        }
    }
}

impl PresentationSurface for SurfaceState {
    fn set_window_opacity(&mut self, opacity: f64) {
        self.window_opacity = opacity;
    }

    fn set_opacity(&mut self, slot: Slot, opacity: f64) {
        match slot {
            Slot::Background => self.background.opacity = opacity,
            Slot::Text => self.text.opacity = opacity,
            Slot::LeftAvatarImage => self.left_avatar.image_opacity = opacity,
            Slot::RightAvatarImage => self.right_avatar.image_opacity = opacity,
            Slot::LeftAvatarName => self.left_avatar.name_opacity = opacity,
            Slot::RightAvatarName => self.right_avatar.name_opacity = opacity,
            Slot::CenterIcon => self.center_icon_opacity = opacity,
        }
    }

    fn set_background_fill(&mut self, color: ArgbColor) {
        self.background.fill = color;
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.background.corner_radius = radius;
    }

    fn set_font_size(&mut self, size: f64) {
        self.text.font_size = size;
    }

    fn set_text_content(&mut self, content: &str) {
        content.clone_into(&mut self.text.content);
    }

    fn set_avatar_image(&mut self, side: AvatarSide, source: AvatarSource) {
        self.avatar_mut(side).image = Some(source);
    }

    fn set_avatar_name(&mut self, side: AvatarSide, name: &str) {
        name.clone_into(&mut self.avatar_mut(side).name);
    }

    fn set_timer(&mut self, timer: TimerPresenter) {
        self.timer = timer;
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_position(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
    }

    fn set_show_in_taskbar(&mut self, show: bool) {
        self.show_in_taskbar = show;
    }

    fn set_topmost(&mut self, topmost: bool) {
        self.topmost = topmost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn work_area_dimensions() {
        let area = WorkArea::new(100.0, 20.0, 1920.0, 1040.0);
        assert_eq!(area.width(), 1820.0);
        assert_eq!(area.height(), 1020.0);
    }

    #[test]
    fn slot_opacity_targets_only_that_slot() {
        let mut surface = SurfaceState::new(200.0, 80.0);
        surface.set_opacity(Slot::RightAvatarImage, 0.4);

        assert_eq!(surface.right_avatar.image_opacity, 0.4);
        assert_eq!(surface.left_avatar.image_opacity, 1.0);
        assert_eq!(surface.right_avatar.name_opacity, 1.0);
        assert_eq!(surface.background.opacity, 1.0);
    }

    #[test]
    fn avatar_setters_address_one_side() {
        let mut surface = SurfaceState::new(200.0, 80.0);
        surface.set_avatar_name(AvatarSide::Left, "L");
        surface.set_avatar_image(
            AvatarSide::Right,
            AvatarSource::LocalFile("/tmp/r.png".into()),
        );

        assert_eq!(surface.avatar(AvatarSide::Left).name, "L");
        assert_eq!(surface.avatar(AvatarSide::Left).image, None);
        assert_eq!(surface.avatar(AvatarSide::Right).name, "");
        assert!(surface.avatar(AvatarSide::Right).image.is_some());
    }
}
