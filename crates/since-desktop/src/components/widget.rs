//! The widget face: background, elapsed-time text, avatars and heart

use dioxus::desktop::window;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use since_core::surface::AvatarSide;

use super::avatar::AvatarBadge;
use super::settings::open_settings_window;
use crate::state::{MenuAnchor, WidgetState};

const MENU_WIDTH: f64 = 112.0;
const MENU_HEIGHT: f64 = 96.0;

/// Everything shown in the widget window
#[component]
pub fn Widget() -> Element {
    let mut state = use_context::<WidgetState>();
    let mut menu = state.menu;
    let surface = (state.surface)();

    let background = &surface.background;
    let fill = background.fill.to_css();
    let text = &surface.text;
    let pin_label = state.pin_label();
    let menu_origin = menu().map(|anchor| {
        (
            anchor.x.min(surface.width - MENU_WIDTH).max(0.0),
            anchor.y.min(surface.height - MENU_HEIGHT).max(0.0),
        )
    });

    let handle_mousedown = move |evt: MouseEvent| {
        if evt.trigger_button() != Some(MouseButton::Primary) {
            return;
        }
        if menu().is_some() {
            menu.set(None);
            return;
        }
        if !(state.pinned)() {
            window().drag();
        }
    };

    let handle_contextmenu = move |evt: MouseEvent| {
        evt.prevent_default();
        let point = evt.client_coordinates();
        menu.set(Some(MenuAnchor {
            x: point.x,
            y: point.y,
        }));
    };

    rsx! {
        div {
            class: "widget",
            style: "opacity: {surface.window_opacity};",
            onmousedown: handle_mousedown,
            oncontextmenu: handle_contextmenu,

            div {
                class: "widget-background",
                style: "
                    background: {fill};
                    opacity: {background.opacity};
                    border-radius: {background.corner_radius}px;
                ",
            }

            div {
                class: "widget-text",
                style: "font-size: {text.font_size}px; opacity: {text.opacity};",
                "{text.content}"
            }

            AvatarBadge { side: AvatarSide::Left }
            AvatarBadge { side: AvatarSide::Right }

            svg {
                class: "widget-heart",
                view_box: "0 0 24 24",
                style: "opacity: {surface.center_icon_opacity};",
                path {
                    fill: "#FF5A8C",
                    d: "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z",
                }
            }

            if let Some((menu_left, menu_top)) = menu_origin {
                div {
                    class: "context-menu",
                    style: "left: {menu_left}px; top: {menu_top}px;",
                    onmousedown: move |evt: MouseEvent| evt.stop_propagation(),

                    div {
                        class: "context-menu-item",
                        onclick: move |_| {
                            state.toggle_pinned();
                            menu.set(None);
                        },
                        "{pin_label}"
                    }
                    div {
                        class: "context-menu-item",
                        onclick: move |_| {
                            menu.set(None);
                            open_settings_window();
                        },
                        "设置"
                    }
                    div { class: "context-menu-separator" }
                    div {
                        class: "context-menu-item",
                        onclick: move |_| -> () {
                            tracing::info!("Closing widget from context menu");
                            std::process::exit(0);
                        },
                        "关闭"
                    }
                }
            }
        }
    }
}
