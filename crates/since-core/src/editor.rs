//! Settings editor: form model, validation and the apply/save actions.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::apply::{apply_settings, clamp_unit};
use crate::autostart::{set_startup_with_os, AutostartRegistrar};
use crate::error::{EditorError, ValidationError};
use crate::models::{AnchorPosition, AvatarSettings, FontSizeBucket, SettingsDocument};
use crate::store::SettingsStore;
use crate::surface::{PresentationSurface, WorkArea};

/// Time-of-day format of the start time text box.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";
/// Upper bound of the corner radius slider.
pub const MAX_CORNER_RADIUS: f64 = 50.0;

/// `round(opacity * 100)%`
pub fn percent_label(opacity: f64) -> String {
    format!("{:.0}%", (clamp_unit(opacity) * 100.0).round())
}

/// Whole-number label for the corner radius slider.
pub fn radius_label(radius: f64) -> String {
    format!("{:.0}", radius.max(0.0).round())
}

/// Editable copy of one avatar's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarForm {
    pub source_path: String,
    pub display_name: String,
    /// Local radio button checked; the online button is its complement
    pub is_local_mode: bool,
}

impl AvatarForm {
    fn load(avatar: &AvatarSettings) -> Self {
        Self {
            source_path: avatar.source_path.clone(),
            display_name: avatar.display_name.clone(),
            is_local_mode: avatar.is_local_mode,
        }
    }

    fn read(&self) -> AvatarSettings {
        AvatarSettings {
            source_path: self.source_path.trim().to_string(),
            display_name: self.display_name.trim().to_string(),
            is_local_mode: self.is_local_mode,
        }
    }

    /// The browse button only makes sense for local files.
    pub const fn browse_enabled(&self) -> bool {
        self.is_local_mode
    }
}

/// Every control of the settings window.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub theme_color: String,
    pub background_opacity: f64,
    pub text_opacity: f64,
    pub left_avatar_opacity: f64,
    pub right_avatar_opacity: f64,
    pub center_icon_opacity: f64,
    pub corner_radius: f64,
    pub show_in_taskbar: bool,
    pub start_with_os: bool,
    pub is_topmost: bool,
    pub show_seconds: bool,
    pub font_size_bucket: FontSizeBucket,
    pub anchor_position: AnchorPosition,
    pub custom_text: String,
    /// Date picker selection
    pub start_date: Option<NaiveDate>,
    /// `HH:mm:ss` text box
    pub start_time_of_day: String,
    pub left_avatar: AvatarForm,
    pub right_avatar: AvatarForm,
}

impl SettingsForm {
    /// Populate every control from `document`.
    pub fn load(document: &SettingsDocument) -> Self {
        Self {
            theme_color: document.theme_color.clone(),
            background_opacity: document.background_opacity,
            text_opacity: document.text_opacity,
            left_avatar_opacity: document.left_avatar_opacity,
            right_avatar_opacity: document.right_avatar_opacity,
            center_icon_opacity: document.center_icon_opacity,
            corner_radius: document.corner_radius,
            show_in_taskbar: document.show_in_taskbar,
            start_with_os: document.start_with_os,
            is_topmost: document.is_topmost,
            show_seconds: document.show_seconds,
            font_size_bucket: document.font_size_bucket,
            anchor_position: document.anchor_position,
            custom_text: document.custom_text.clone(),
            start_date: Some(document.start_time.date()),
            start_time_of_day: document.start_time.time().format(TIME_OF_DAY_FORMAT).to_string(),
            left_avatar: AvatarForm::load(&document.left_avatar),
            right_avatar: AvatarForm::load(&document.right_avatar),
        }
    }

    /// Build a document from the controls.
    ///
    /// Strings are trimmed and sliders clamped. Fails without producing
    /// anything when the date is missing or the time text is malformed.
    pub fn read(&self) -> Result<SettingsDocument, ValidationError> {
        let date = self.start_date.ok_or(ValidationError::MissingStartDate)?;
        let time = parse_time_of_day(&self.start_time_of_day)?;

        Ok(SettingsDocument {
            theme_color: self.theme_color.trim().to_string(),
            background_opacity: clamp_unit(self.background_opacity),
            text_opacity: clamp_unit(self.text_opacity),
            left_avatar_opacity: clamp_unit(self.left_avatar_opacity),
            right_avatar_opacity: clamp_unit(self.right_avatar_opacity),
            center_icon_opacity: clamp_unit(self.center_icon_opacity),
            corner_radius: if self.corner_radius.is_nan() {
                0.0
            } else {
                self.corner_radius.max(0.0)
            },
            show_in_taskbar: self.show_in_taskbar,
            start_with_os: self.start_with_os,
            is_topmost: self.is_topmost,
            show_seconds: self.show_seconds,
            font_size_bucket: self.font_size_bucket,
            anchor_position: self.anchor_position,
            start_time: date.and_time(time),
            custom_text: self.custom_text.trim().to_string(),
            left_avatar: self.left_avatar.read(),
            right_avatar: self.right_avatar.read(),
        })
    }
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_OF_DAY_FORMAT)
        .ok()
        // chrono reads `:60` as a leap second; the settings file cannot hold one
        .filter(|time| time.nanosecond() < 1_000_000_000)
        .ok_or_else(|| ValidationError::InvalidTimeOfDay(raw.to_string()))
}

/// Receives a validated document; the live widget or something standing in
/// for it.
pub trait ApplyTarget {
    fn apply_document(&mut self, document: &SettingsDocument);
}

/// Applies straight onto a surface with a known work area.
pub struct SurfaceTarget<'a, S: PresentationSurface + ?Sized> {
    pub surface: &'a mut S,
    pub work_area: Option<WorkArea>,
}

impl<S: PresentationSurface + ?Sized> ApplyTarget for SurfaceTarget<'_, S> {
    fn apply_document(&mut self, document: &SettingsDocument) {
        apply_settings(document, &mut *self.surface, self.work_area);
    }
}

/// Outcome of a successful apply.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Startup registration failed; shown to the user, nothing else is undone
    pub autostart_error: Option<String>,
}

/// Editor state: the form plus the document last applied from it.
#[derive(Debug, Clone)]
pub struct SettingsEditor {
    pub form: SettingsForm,
    applied: SettingsDocument,
}

impl SettingsEditor {
    /// Start editing `document`.
    pub fn open(document: SettingsDocument) -> Self {
        Self {
            form: SettingsForm::load(&document),
            applied: document,
        }
    }

    /// The document most recently applied (or opened with).
    pub const fn applied(&self) -> &SettingsDocument {
        &self.applied
    }

    /// Validate the form, push it to `target` and update startup registration.
    ///
    /// On a validation error nothing is applied and [`Self::applied`] is
    /// unchanged.
    pub fn apply<T, R>(&mut self, target: &mut T, autostart: &R) -> Result<ApplyReport, ValidationError>
    where
        T: ApplyTarget + ?Sized,
        R: AutostartRegistrar + ?Sized,
    {
        let document = self.form.read().inspect_err(|error| {
            tracing::warn!("Settings form rejected: {}", error);
        })?;

        target.apply_document(&document);
        let autostart_error = set_startup_with_os(autostart, document.start_with_os)
            .err()
            .map(|error| {
                tracing::error!("Failed to update startup registration: {}", error);
                format!("设置开机自启动失败: {error}")
            });
        self.applied = document;
        Ok(ApplyReport { autostart_error })
    }

    /// [`Self::apply`], then write the applied document to `store`.
    pub fn save<T, R>(
        &mut self,
        target: &mut T,
        autostart: &R,
        store: &SettingsStore,
    ) -> Result<ApplyReport, EditorError>
    where
        T: ApplyTarget + ?Sized,
        R: AutostartRegistrar + ?Sized,
    {
        let report = self.apply(target, autostart)?;
        store.save(&self.applied).inspect_err(|error| {
            tracing::error!("Failed to save settings: {}", error);
        })?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use chrono::NaiveDateTime;
    use pretty_assertions::assert_eq;

    use crate::surface::SurfaceState;
    use crate::{Error, Result};

    const AREA: WorkArea = WorkArea::new(0.0, 0.0, 1920.0, 1040.0);

    struct NoopAutostart;

    impl AutostartRegistrar for NoopAutostart {
        fn register(&self, _app_name: &str, _executable: &Path) -> Result<()> {
            Ok(())
        }

        fn unregister(&self, _app_name: &str) -> Result<()> {
            Ok(())
        }
    }

    struct FailingAutostart;

    impl AutostartRegistrar for FailingAutostart {
        fn register(&self, _app_name: &str, _executable: &Path) -> Result<()> {
            Err(Error::Autostart("access denied".to_string()))
        }

        fn unregister(&self, _app_name: &str) -> Result<()> {
            Err(Error::Autostart("access denied".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingTarget {
        applied: Vec<SettingsDocument>,
    }

    impl ApplyTarget for CountingTarget {
        fn apply_document(&mut self, document: &SettingsDocument) {
            self.applied.push(document.clone());
        }
    }

    fn at(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .and_then(|day| day.and_hms_opt(time.0, time.1, time.2))
            .unwrap()
    }

    #[test]
    fn percent_labels_round() {
        assert_eq!(percent_label(0.7), "70%");
        assert_eq!(percent_label(0.333), "33%");
        assert_eq!(percent_label(0.996), "100%");
        assert_eq!(percent_label(1.4), "100%");
        assert_eq!(radius_label(16.4), "16");
    }

    #[test]
    fn load_populates_every_field() {
        let document = SettingsDocument {
            start_time: at((2024, 6, 1), (7, 8, 9)),
            ..SettingsDocument::default()
        };
        let form = SettingsForm::load(&document);

        assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(form.start_time_of_day, "07:08:09");
        assert_eq!(form.read().unwrap(), document);
    }

    #[test]
    fn read_trims_and_clamps() {
        let mut form = SettingsForm::load(&SettingsDocument::default());
        form.custom_text = "  一起  ".to_string();
        form.theme_color = " #FF000000 ".to_string();
        form.left_avatar.source_path = " https://example.com/a.png ".to_string();
        form.right_avatar.display_name = "  B ".to_string();
        form.text_opacity = 3.0;
        form.corner_radius = -1.0;

        let document = form.read().unwrap();
        assert_eq!(document.custom_text, "一起");
        assert_eq!(document.theme_color, "#FF000000");
        assert_eq!(document.left_avatar.source_path, "https://example.com/a.png");
        assert_eq!(document.right_avatar.display_name, "B");
        assert_eq!(document.text_opacity, 1.0);
        assert_eq!(document.corner_radius, 0.0);
    }

    #[test]
    fn read_keeps_radius_above_slider_range() {
        let document = SettingsDocument {
            corner_radius: 80.0,
            ..SettingsDocument::default()
        };
        let form = SettingsForm::load(&document);

        assert_eq!(form.read().unwrap().corner_radius, 80.0);
    }

    #[test]
    fn last_second_of_day_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let mut form = SettingsForm::load(&SettingsDocument::default());
        form.start_time_of_day = "23:59:59".to_string();

        let document = form.read().unwrap();
        store.save(&document).unwrap();

        assert_eq!(store.try_load().unwrap(), document);
    }

    #[test]
    fn read_combines_date_and_time() {
        let mut form = SettingsForm::load(&SettingsDocument::default());
        form.start_date = NaiveDate::from_ymd_opt(2022, 2, 22);
        form.start_time_of_day = " 22:02:20 ".to_string();

        assert_eq!(
            form.read().unwrap().start_time,
            at((2022, 2, 22), (22, 2, 20))
        );
    }

    #[test]
    fn read_keeps_source_path_when_mode_changes() {
        let mut form = SettingsForm::load(&SettingsDocument::default());
        form.left_avatar.source_path = "/home/me/a.png".to_string();
        form.left_avatar.is_local_mode = false;

        let avatar = form.read().unwrap().left_avatar;
        assert_eq!(avatar.source_path, "/home/me/a.png");
        assert!(!avatar.is_local_mode);
        assert!(!form.left_avatar.browse_enabled());
    }

    #[test]
    fn missing_date_is_rejected() {
        let mut form = SettingsForm::load(&SettingsDocument::default());
        form.start_date = None;
        assert_eq!(form.read(), Err(ValidationError::MissingStartDate));
    }

    #[test]
    fn malformed_time_is_rejected() {
        let mut form = SettingsForm::load(&SettingsDocument::default());
        for bad in ["25:00:00", "23:59:60", "12:00", "noon", ""] {
            form.start_time_of_day = bad.to_string();
            assert_eq!(
                form.read(),
                Err(ValidationError::InvalidTimeOfDay(bad.to_string()))
            );
        }
    }

    #[test]
    fn apply_without_date_leaves_live_document_untouched() {
        let mut editor = SettingsEditor::open(SettingsDocument::default());
        editor.form.custom_text = "changed".to_string();
        editor.form.start_date = None;
        let mut target = CountingTarget::default();

        let result = editor.apply(&mut target, &NoopAutostart);

        assert!(matches!(result, Err(ValidationError::MissingStartDate)));
        assert!(target.applied.is_empty());
        assert_eq!(editor.applied(), &SettingsDocument::default());
    }

    #[test]
    fn apply_pushes_document_to_surface() {
        let mut editor = SettingsEditor::open(SettingsDocument::default());
        editor.form.anchor_position = AnchorPosition::BottomRight;
        editor.form.font_size_bucket = FontSizeBucket::Small;
        let mut surface = SurfaceState::new(200.0, 80.0);

        let report = editor
            .apply(
                &mut SurfaceTarget {
                    surface: &mut surface,
                    work_area: Some(AREA),
                },
                &NoopAutostart,
            )
            .unwrap();

        assert!(report.autostart_error.is_none());
        assert_eq!((surface.left, surface.top), (1720.0, 960.0));
        assert_eq!(surface.text.font_size, 12.0);
        assert_eq!(editor.applied().anchor_position, AnchorPosition::BottomRight);
    }

    #[test]
    fn autostart_failure_is_reported_but_not_fatal() {
        let mut editor = SettingsEditor::open(SettingsDocument::default());
        editor.form.start_with_os = true;
        let mut target = CountingTarget::default();

        let report = editor.apply(&mut target, &FailingAutostart).unwrap();

        assert_eq!(target.applied.len(), 1);
        assert!(report
            .autostart_error
            .as_deref()
            .is_some_and(|message| message.contains("access denied")));
        assert!(editor.applied().start_with_os);
    }

    #[test]
    fn save_persists_applied_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let mut editor = SettingsEditor::open(store.load());
        editor.form.custom_text = "saved".to_string();
        let mut target = CountingTarget::default();

        editor.save(&mut target, &NoopAutostart, &store).unwrap();

        assert_eq!(store.try_load().unwrap().custom_text, "saved");
        assert_eq!(target.applied.len(), 1);
    }

    #[test]
    fn save_with_invalid_form_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let mut editor = SettingsEditor::open(SettingsDocument::default());
        editor.form.start_time_of_day = "7pm".to_string();
        let mut target = CountingTarget::default();

        let result = editor.save(&mut target, &NoopAutostart, &store);

        assert!(matches!(
            result,
            Err(EditorError::Validation(ValidationError::InvalidTimeOfDay(_)))
        ));
        assert!(!store.path().exists());
        assert!(target.applied.is_empty());
    }
}
