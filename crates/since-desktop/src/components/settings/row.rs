use dioxus::prelude::*;

/// Label on the left, control on the right.
#[component]
pub(super) fn SettingRow(
    #[props(into)] label: String,
    #[props(into, default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "settings-row",

            div {
                class: "settings-row-info",
                label {
                    class: "settings-row-label",
                    "{label}"
                }
                if !description.is_empty() {
                    div {
                        class: "settings-row-description",
                        "{description}"
                    }
                }
            }
            div {
                class: "settings-row-control",
                {children}
            }
        }
    }
}

/// Range input with its live label.
#[component]
pub(super) fn SliderRow(
    #[props(into)] label: String,
    value: f64,
    max: f64,
    step: f64,
    value_label: String,
    on_change: EventHandler<f64>,
) -> Element {
    rsx! {
        SettingRow {
            label,

            div {
                class: "slider-control",
                input {
                    r#type: "range",
                    min: "0",
                    max: "{max}",
                    step: "{step}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(value) = evt.value().parse::<f64>() {
                            on_change.call(value);
                        }
                    },
                }
                span {
                    class: "slider-value",
                    "{value_label}"
                }
            }
        }
    }
}
