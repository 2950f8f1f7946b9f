//! Widget settings document

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::timestamp::{self, default_start_time};

/// Default background fill, `#AARRGGBB`.
pub const DEFAULT_THEME_COLOR: &str = "#AA222222";
/// Default prefix shown before the elapsed time.
pub const DEFAULT_CUSTOM_TEXT: &str = "我们一起";
/// Default name shown under each avatar.
pub const DEFAULT_AVATAR_NAME: &str = "XX";

/// Text size buckets offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSizeBucket {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSizeBucket {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Concrete point size for the text slot.
    pub const fn points(self) -> f64 {
        match self {
            Self::Small => 12.0,
            Self::Medium => 14.0,
            Self::Large => 18.0,
        }
    }

    /// Label shown in the editor.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "小",
            Self::Medium => "中",
            Self::Large => "大",
        }
    }

    /// Accepts both the persisted key and the editor label.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "small" | "小" => Some(Self::Small),
            "medium" | "中" => Some(Self::Medium),
            "large" | "大" => Some(Self::Large),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for FontSizeBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(Self::from_label)
            .unwrap_or_default())
    }
}

/// Named screen placement for the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl AnchorPosition {
    pub const ALL: [Self; 5] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Center,
    ];

    /// Label shown in the editor.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "左上角",
            Self::TopRight => "右上角",
            Self::BottomLeft => "左下角",
            Self::BottomRight => "右下角",
            Self::Center => "中央",
        }
    }

    /// Accepts both the persisted key and the editor label.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "top-left" | "左上角" => Some(Self::TopLeft),
            "top-right" | "右上角" => Some(Self::TopRight),
            "bottom-left" | "左下角" => Some(Self::BottomLeft),
            "bottom-right" | "右下角" => Some(Self::BottomRight),
            "center" | "中央" => Some(Self::Center),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for AnchorPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(Self::from_label)
            .unwrap_or_default())
    }
}

/// Where one avatar image comes from and what name sits under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarSettings {
    /// Filesystem path or absolute URI
    pub source_path: String,
    pub display_name: String,
    /// Interpret `source_path` as a local file first
    pub is_local_mode: bool,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            source_path: String::new(),
            display_name: DEFAULT_AVATAR_NAME.to_string(),
            is_local_mode: true,
        }
    }
}

/// Everything the widget and its editor can configure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsDocument {
    /// Background fill as `#AARRGGBB`
    pub theme_color: String,
    pub background_opacity: f64,
    pub text_opacity: f64,
    pub left_avatar_opacity: f64,
    pub right_avatar_opacity: f64,
    pub center_icon_opacity: f64,
    pub corner_radius: f64,
    pub show_in_taskbar: bool,
    #[serde(rename = "startWithOS")]
    pub start_with_os: bool,
    pub is_topmost: bool,
    pub show_seconds: bool,
    pub font_size_bucket: FontSizeBucket,
    pub anchor_position: AnchorPosition,
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    pub custom_text: String,
    pub left_avatar: AvatarSettings,
    pub right_avatar: AvatarSettings,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            background_opacity: 0.7,
            text_opacity: 1.0,
            left_avatar_opacity: 1.0,
            right_avatar_opacity: 1.0,
            center_icon_opacity: 1.0,
            corner_radius: 16.0,
            show_in_taskbar: false,
            start_with_os: false,
            is_topmost: false,
            show_seconds: true,
            font_size_bucket: FontSizeBucket::Medium,
            anchor_position: AnchorPosition::TopRight,
            start_time: default_start_time(),
            custom_text: DEFAULT_CUSTOM_TEXT.to_string(),
            left_avatar: AvatarSettings::default(),
            right_avatar: AvatarSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_settings_default() {
        let settings = SettingsDocument::default();
        assert_eq!(settings.background_opacity, 0.7);
        assert_eq!(settings.corner_radius, 16.0);
        assert!(settings.show_seconds);
        assert!(!settings.is_topmost);
        assert!(settings.left_avatar.is_local_mode);
        assert_eq!(settings.font_size_bucket, FontSizeBucket::Medium);
        assert_eq!(settings.anchor_position, AnchorPosition::TopRight);
        assert!(!settings.custom_text.is_empty());
    }

    #[test]
    fn font_bucket_points() {
        assert_eq!(FontSizeBucket::Small.points(), 12.0);
        assert_eq!(FontSizeBucket::Medium.points(), 14.0);
        assert_eq!(FontSizeBucket::Large.points(), 18.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: SettingsDocument =
            serde_json::from_str(r#"{ "customText": "Hi", "leftAvatar": { "sourcePath": "a.png" } }"#)
                .unwrap();
        assert_eq!(parsed.custom_text, "Hi");
        assert_eq!(parsed.left_avatar.source_path, "a.png");
        assert_eq!(parsed.left_avatar.display_name, DEFAULT_AVATAR_NAME);
        assert!(parsed.left_avatar.is_local_mode);
        assert_eq!(parsed.theme_color, DEFAULT_THEME_COLOR);
        assert_eq!(parsed.start_time, default_start_time());
    }

    #[test]
    fn unknown_enum_values_fall_back_to_defaults() {
        let parsed: SettingsDocument = serde_json::from_str(
            r#"{ "fontSizeBucket": "huge", "anchorPosition": 7 }"#,
        )
        .unwrap();
        assert_eq!(parsed.font_size_bucket, FontSizeBucket::Medium);
        assert_eq!(parsed.anchor_position, AnchorPosition::TopRight);
    }

    #[test]
    fn enum_values_accept_editor_labels() {
        let parsed: SettingsDocument = serde_json::from_str(
            r#"{ "fontSizeBucket": "大", "anchorPosition": "左下角" }"#,
        )
        .unwrap();
        assert_eq!(parsed.font_size_bucket, FontSizeBucket::Large);
        assert_eq!(parsed.anchor_position, AnchorPosition::BottomLeft);
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let value = serde_json::to_value(SettingsDocument::default()).unwrap();
        assert_eq!(value["themeColor"], "#AA222222");
        assert_eq!(value["startWithOS"], false);
        assert_eq!(value["anchorPosition"], "top-right");
        assert_eq!(value["fontSizeBucket"], "medium");
        assert_eq!(value["startTime"], "2025-03-17T00:27:00");
        assert_eq!(value["leftAvatar"]["isLocalMode"], true);
    }
}
