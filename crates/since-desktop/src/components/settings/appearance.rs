use dioxus::prelude::*;

use since_core::editor::{percent_label, radius_label, SettingsEditor, MAX_CORNER_RADIUS};
use since_core::models::{AnchorPosition, FontSizeBucket};

use super::row::{SettingRow, SliderRow};

/// Colors, opacities, corner radius, font size and screen anchor.
#[component]
pub(super) fn AppearanceSection(editor: Signal<SettingsEditor>) -> Element {
    let mut editor = editor;
    let form = editor.read().form.clone();
    let font_size_label = form.font_size_bucket.label();
    let anchor_label = form.anchor_position.label();

    rsx! {
        SettingRow {
            label: "主题颜色",
            description: "#AARRGGBB 或 #RRGGBB",

            input {
                class: "input",
                r#type: "text",
                spellcheck: "false",
                value: "{form.theme_color}",
                oninput: move |evt: FormEvent| editor.write().form.theme_color = evt.value(),
            }
        }

        SliderRow {
            label: "背景透明度",
            value: form.background_opacity,
            max: 1.0,
            step: 0.01,
            value_label: percent_label(form.background_opacity),
            on_change: move |value| editor.write().form.background_opacity = value,
        }

        SliderRow {
            label: "文字透明度",
            value: form.text_opacity,
            max: 1.0,
            step: 0.01,
            value_label: percent_label(form.text_opacity),
            on_change: move |value| editor.write().form.text_opacity = value,
        }

        SliderRow {
            label: "左头像透明度",
            value: form.left_avatar_opacity,
            max: 1.0,
            step: 0.01,
            value_label: percent_label(form.left_avatar_opacity),
            on_change: move |value| editor.write().form.left_avatar_opacity = value,
        }

        SliderRow {
            label: "右头像透明度",
            value: form.right_avatar_opacity,
            max: 1.0,
            step: 0.01,
            value_label: percent_label(form.right_avatar_opacity),
            on_change: move |value| editor.write().form.right_avatar_opacity = value,
        }

        SliderRow {
            label: "中间图标透明度",
            value: form.center_icon_opacity,
            max: 1.0,
            step: 0.01,
            value_label: percent_label(form.center_icon_opacity),
            on_change: move |value| editor.write().form.center_icon_opacity = value,
        }

        SliderRow {
            label: "圆角",
            value: form.corner_radius,
            max: MAX_CORNER_RADIUS,
            step: 1.0,
            value_label: radius_label(form.corner_radius),
            on_change: move |value| editor.write().form.corner_radius = value,
        }

        SettingRow {
            label: "字体大小",

            select {
                class: "select",
                value: "{font_size_label}",
                onchange: move |evt: FormEvent| {
                    if let Some(bucket) = FontSizeBucket::from_label(&evt.value()) {
                        editor.write().form.font_size_bucket = bucket;
                    }
                },
                for (bucket, label) in FontSizeBucket::ALL.map(|bucket| (bucket, bucket.label())) {
                    option {
                        value: "{label}",
                        selected: bucket == form.font_size_bucket,
                        "{label}"
                    }
                }
            }
        }

        SettingRow {
            label: "窗口位置",

            select {
                class: "select",
                value: "{anchor_label}",
                onchange: move |evt: FormEvent| {
                    if let Some(anchor) = AnchorPosition::from_label(&evt.value()) {
                        editor.write().form.anchor_position = anchor;
                    }
                },
                for (anchor, label) in AnchorPosition::ALL.map(|anchor| (anchor, anchor.label())) {
                    option {
                        value: "{label}",
                        selected: anchor == form.anchor_position,
                        "{label}"
                    }
                }
            }
        }
    }
}
