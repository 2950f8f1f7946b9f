//! Settings window
//!
//! Opens as its own native window with a fresh editor loaded from disk.
//! Apply pushes the validated form to the widget; Save also persists it.

mod appearance;
mod avatars;
mod behavior;
mod row;

use std::time::Duration;

use dioxus::desktop::{window, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use since_core::autostart::SystemAutostart;
use since_core::editor::{ApplyReport, SettingsEditor};
use since_core::{SettingsDocument, SettingsStore};

use crate::bridge::WidgetTarget;
use appearance::AppearanceSection;
use avatars::AvatarSection;
use behavior::BehaviorSection;

const SAVED_MESSAGE: &str = "设置已保存";
const APPLIED_MESSAGE: &str = "设置已应用";

/// Inline feedback under the buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Info(String),
    Error(String),
}

/// Standalone settings window; shares nothing with the widget but the bridge.
#[component]
pub fn SettingsWindow() -> Element {
    let store = use_hook(|| {
        SettingsStore::open_default()
            .inspect_err(|e| tracing::error!("Settings directory unavailable: {}", e))
            .ok()
    });
    let mut editor = use_signal(|| {
        let document = store
            .as_ref()
            .map_or_else(SettingsDocument::default, SettingsStore::load);
        SettingsEditor::open(document)
    });
    let mut notice = use_signal(|| None::<Notice>);

    let apply = move |_: MouseEvent| {
        let result = editor.write().apply(&mut WidgetTarget, &SystemAutostart);
        match result {
            Ok(report) => notice.set(Some(report_notice(report, APPLIED_MESSAGE))),
            Err(e) => notice.set(Some(Notice::Error(e.to_string()))),
        }
    };

    let save = move |_: MouseEvent| {
        let Some(store) = store.as_ref() else {
            notice.set(Some(Notice::Error("无法确定设置文件的位置".to_string())));
            return;
        };

        let result = editor
            .write()
            .save(&mut WidgetTarget, &SystemAutostart, store);
        match result {
            Ok(report) => {
                let keep_open = report.autostart_error.is_some();
                notice.set(Some(report_notice(report, SAVED_MESSAGE)));
                if !keep_open {
                    tracing::info!("Settings saved to {}", store.path().display());
                    spawn(async move {
                        tokio::time::sleep(Duration::from_millis(600)).await;
                        window().close();
                    });
                }
            }
            // Validation and write failures both leave the window open
            Err(e) => notice.set(Some(Notice::Error(e.to_string()))),
        }
    };

    let close = move |_: MouseEvent| {
        window().close();
    };

    let (notice_class, notice_text) = match notice() {
        Some(Notice::Info(message)) => ("settings-notice", message),
        Some(Notice::Error(message)) => ("settings-notice error", message),
        None => ("settings-notice", String::new()),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/settings.css") }

        div {
            class: "settings-container",

            div {
                class: "settings-content",

                h2 { class: "settings-section-title", "外观" }
                AppearanceSection { editor }

                h2 { class: "settings-section-title", "计时" }
                BehaviorSection { editor }

                h2 { class: "settings-section-title", "头像" }
                AvatarSection { editor }
            }

            div {
                class: "settings-footer",

                span { class: "{notice_class}", "{notice_text}" }

                div {
                    class: "settings-actions",
                    button { class: "btn btn-secondary", onclick: apply, "应用" }
                    button { class: "btn btn-primary", onclick: save, "保存" }
                    button { class: "btn btn-ghost", onclick: close, "关闭" }
                }
            }
        }
    }
}

fn report_notice(report: ApplyReport, success: &str) -> Notice {
    match report.autostart_error {
        Some(error) => Notice::Error(format!("{success}；{error}")),
        None => Notice::Info(success.to_string()),
    }
}

/// Opens a settings window next to the widget.
pub fn open_settings_window() {
    let cfg = dioxus::desktop::Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("设置")
                .with_inner_size(LogicalSize::new(560.0, 720.0))
                .with_resizable(true)
                .with_decorations(true)
                .with_focused(true),
        )
        .with_menu(None);

    let dom = VirtualDom::new(SettingsWindow);
    window().new_window(dom, cfg);
    tracing::debug!("Opened settings window");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_apply_reports_success() {
        let notice = report_notice(ApplyReport::default(), SAVED_MESSAGE);
        assert_eq!(notice, Notice::Info("设置已保存".to_string()));
    }

    #[test]
    fn autostart_failure_is_shown_with_the_success() {
        let report = ApplyReport {
            autostart_error: Some("设置开机自启动失败: denied".to_string()),
        };
        assert_eq!(
            report_notice(report, APPLIED_MESSAGE),
            Notice::Error("设置已应用；设置开机自启动失败: denied".to_string())
        );
    }
}
