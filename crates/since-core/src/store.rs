//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::SettingsDocument;
use crate::{Error, Result};

/// Directory created under the per-user config dir.
pub const APP_DIR_NAME: &str = "Since";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// `<config dir>/Since/settings.json`, e.g. `%APPDATA%\Since\settings.json`.
pub fn default_settings_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        Error::InvalidInput("Failed to resolve the per-user config directory".to_string())
    })?;
    Ok(base.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Reads and writes one settings document at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_settings_path`].
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(default_settings_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, substituting defaults for any failure.
    ///
    /// A missing, unreadable or unparsable file yields
    /// [`SettingsDocument::default`]; the file itself is left untouched.
    pub fn load(&self) -> SettingsDocument {
        match self.try_load() {
            Ok(document) => document,
            Err(error) => {
                tracing::warn!(
                    "Failed to load settings from {}: {}. Using defaults.",
                    self.path.display(),
                    error
                );
                SettingsDocument::default()
            }
        }
    }

    /// Load the document, reporting read and parse failures.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn try_load(&self) -> Result<SettingsDocument> {
        self.ensure_parent_dir()?;
        if !self.path.exists() {
            tracing::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(SettingsDocument::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let document = serde_json::from_str::<SettingsDocument>(&raw)?;
        tracing::debug!("Loaded settings from {}", self.path.display());
        Ok(document)
    }

    /// Write the whole document as indented JSON.
    ///
    /// The bytes go to a sibling temp file first and are renamed over the
    /// target, so a failed write never leaves a truncated settings file.
    pub fn save(&self, document: &SettingsDocument) -> Result<()> {
        self.ensure_parent_dir()?;
        let serialized = serde_json::to_string_pretty(document)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, serialized)?;
        if let Err(error) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(error.into());
        }

        tracing::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::models::{AnchorPosition, AvatarSettings, FontSizeBucket};

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("nested").join("settings.json"))
    }

    fn customized_document() -> SettingsDocument {
        SettingsDocument {
            theme_color: "#FF102030".to_string(),
            background_opacity: 0.35,
            text_opacity: 0.9,
            left_avatar_opacity: 0.5,
            right_avatar_opacity: 0.25,
            center_icon_opacity: 0.0,
            corner_radius: 4.5,
            show_in_taskbar: true,
            start_with_os: true,
            is_topmost: true,
            show_seconds: false,
            font_size_bucket: FontSizeBucket::Large,
            anchor_position: AnchorPosition::BottomLeft,
            start_time: NaiveDate::from_ymd_opt(2023, 11, 5)
                .and_then(|date| date.and_hms_opt(8, 9, 10))
                .unwrap(),
            custom_text: "在一起".to_string(),
            left_avatar: AvatarSettings {
                source_path: "C:\\Users\\me\\a.png".to_string(),
                display_name: "A".to_string(),
                is_local_mode: true,
            },
            right_avatar: AvatarSettings {
                source_path: "https://example.com/b.png".to_string(),
                display_name: "B".to_string(),
                is_local_mode: false,
            },
        }
    }

    #[test]
    fn roundtrip_preserves_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let document = customized_document();

        store.save(&document).unwrap();
        assert_eq!(store.try_load().unwrap(), document);
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn roundtrip_truncates_start_time_to_seconds() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut document = customized_document();
        document.start_time = NaiveDate::from_ymd_opt(2023, 11, 5)
            .and_then(|date| date.and_hms_micro_opt(8, 9, 10, 654_321))
            .unwrap();

        store.save(&document).unwrap();
        let loaded = store.load();
        assert_eq!(
            loaded.start_time,
            NaiveDate::from_ymd_opt(2023, 11, 5)
                .and_then(|date| date.and_hms_opt(8, 9, 10))
                .unwrap()
        );
    }

    #[test]
    fn saved_file_uses_second_precision_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&customized_document()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"startTime\": \"2023-11-05T08:09:10\""));
        assert!(raw.contains('\n'), "settings should be indented");
    }

    #[test]
    fn missing_file_yields_defaults_and_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load(), SettingsDocument::default());
        assert!(store.path().parent().unwrap().is_dir());
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_yields_defaults_and_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.try_load().is_err());
        assert_eq!(store.load(), SettingsDocument::default());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ not json");
    }

    #[test]
    fn empty_start_time_reads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{ "startTime": "" }"#).unwrap();

        assert_eq!(store.try_load().unwrap(), SettingsDocument::default());
    }

    #[test]
    fn save_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&customized_document()).unwrap();
        store.save(&SettingsDocument::default()).unwrap();

        assert_eq!(store.try_load().unwrap(), SettingsDocument::default());
    }
}
