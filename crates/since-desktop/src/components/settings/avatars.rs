use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use since_core::editor::{AvatarForm, SettingsEditor};
use since_core::surface::AvatarSide;

use super::row::SettingRow;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Both avatar panels.
#[component]
pub(super) fn AvatarSection(editor: Signal<SettingsEditor>) -> Element {
    rsx! {
        AvatarPanel { editor, side: AvatarSide::Left }
        AvatarPanel { editor, side: AvatarSide::Right }
    }
}

fn avatar_form(editor: &mut SettingsEditor, side: AvatarSide) -> &mut AvatarForm {
    match side {
        AvatarSide::Left => &mut editor.form.left_avatar,
        AvatarSide::Right => &mut editor.form.right_avatar,
    }
}

#[component]
fn AvatarPanel(editor: Signal<SettingsEditor>, side: AvatarSide) -> Element {
    let mut editor = editor;
    let avatar = match side {
        AvatarSide::Left => editor.read().form.left_avatar.clone(),
        AvatarSide::Right => editor.read().form.right_avatar.clone(),
    };
    let (title, group) = match side {
        AvatarSide::Left => ("左下角头像", "left-avatar-mode"),
        AvatarSide::Right => ("右下角头像", "right-avatar-mode"),
    };
    let placeholder = if avatar.is_local_mode {
        "本地图片路径"
    } else {
        "https://..."
    };

    let browse = move |_: MouseEvent| {
        spawn(async move {
            let Some(file) = AsyncFileDialog::new()
                .set_title(format!("选择{title}"))
                .add_filter("图片文件", IMAGE_EXTENSIONS)
                .add_filter("所有文件", &["*"])
                .pick_file()
                .await
            else {
                return;
            };

            let path = file.path().to_string_lossy().into_owned();
            tracing::debug!("Picked avatar image {}", path);
            avatar_form(&mut editor.write(), side).source_path = path;
        });
    };

    rsx! {
        div {
            class: "avatar-panel",

            h3 { class: "avatar-panel-title", "{title}" }

            SettingRow {
                label: "来源",

                div {
                    class: "radio-group",
                    label {
                        input {
                            r#type: "radio",
                            name: "{group}",
                            checked: avatar.is_local_mode,
                            onchange: move |_| avatar_form(&mut editor.write(), side).is_local_mode = true,
                        }
                        "本地"
                    }
                    label {
                        input {
                            r#type: "radio",
                            name: "{group}",
                            checked: !avatar.is_local_mode,
                            onchange: move |_| avatar_form(&mut editor.write(), side).is_local_mode = false,
                        }
                        "在线"
                    }
                }
            }

            SettingRow {
                label: "图片",

                div {
                    class: "path-control",
                    input {
                        class: "input",
                        r#type: "text",
                        spellcheck: "false",
                        placeholder: "{placeholder}",
                        value: "{avatar.source_path}",
                        oninput: move |evt: FormEvent| {
                            avatar_form(&mut editor.write(), side).source_path = evt.value();
                        },
                    }
                    button {
                        class: "btn btn-secondary",
                        disabled: !avatar.browse_enabled(),
                        onclick: browse,
                        "浏览..."
                    }
                }
            }

            SettingRow {
                label: "名字",

                input {
                    class: "input",
                    r#type: "text",
                    value: "{avatar.display_name}",
                    oninput: move |evt: FormEvent| {
                        avatar_form(&mut editor.write(), side).display_name = evt.value();
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use since_core::SettingsDocument;

    #[test]
    fn avatar_form_picks_the_matching_side() {
        let mut editor = SettingsEditor::open(SettingsDocument::default());
        avatar_form(&mut editor, AvatarSide::Right).display_name = "B".to_string();

        assert_eq!(editor.form.right_avatar.display_name, "B");
        assert_eq!(editor.form.left_avatar.display_name, "XX");
    }
}
