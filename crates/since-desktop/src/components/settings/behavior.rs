use chrono::NaiveDate;
use dioxus::prelude::*;

use since_core::editor::SettingsEditor;

use super::row::SettingRow;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Start moment, caption and window behavior toggles.
#[component]
pub(super) fn BehaviorSection(editor: Signal<SettingsEditor>) -> Element {
    let mut editor = editor;
    let form = editor.read().form.clone();
    let start_date = form
        .start_date
        .map(|date| date.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default();

    rsx! {
        SettingRow {
            label: "起始日期",

            input {
                class: "input",
                r#type: "date",
                value: "{start_date}",
                oninput: move |evt: FormEvent| {
                    editor.write().form.start_date =
                        NaiveDate::parse_from_str(&evt.value(), DATE_INPUT_FORMAT).ok();
                },
            }
        }

        SettingRow {
            label: "起始时间",
            description: "HH:mm:ss",

            input {
                class: "input",
                r#type: "text",
                spellcheck: "false",
                placeholder: "00:00:00",
                value: "{form.start_time_of_day}",
                oninput: move |evt: FormEvent| editor.write().form.start_time_of_day = evt.value(),
            }
        }

        SettingRow {
            label: "自定义文字",

            input {
                class: "input",
                r#type: "text",
                value: "{form.custom_text}",
                oninput: move |evt: FormEvent| editor.write().form.custom_text = evt.value(),
            }
        }

        ToggleRow {
            label: "显示秒数",
            checked: form.show_seconds,
            on_toggle: move |checked| editor.write().form.show_seconds = checked,
        }

        ToggleRow {
            label: "在任务栏中显示",
            checked: form.show_in_taskbar,
            on_toggle: move |checked| editor.write().form.show_in_taskbar = checked,
        }

        ToggleRow {
            label: "窗口置顶",
            checked: form.is_topmost,
            on_toggle: move |checked| editor.write().form.is_topmost = checked,
        }

        ToggleRow {
            label: "开机自启动",
            checked: form.start_with_os,
            on_toggle: move |checked| editor.write().form.start_with_os = checked,
        }
    }
}

#[component]
fn ToggleRow(#[props(into)] label: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        SettingRow {
            label,

            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| on_toggle.call(!checked),
            }
        }
    }
}
