//! Data models for Since

mod color;
mod settings;
pub mod timestamp;

pub use color::ArgbColor;
pub use settings::{
    AnchorPosition, AvatarSettings, FontSizeBucket, SettingsDocument, DEFAULT_AVATAR_NAME,
    DEFAULT_CUSTOM_TEXT, DEFAULT_THEME_COLOR,
};
