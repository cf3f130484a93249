//! Labelled numeric input for a neighborhood metric.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricInputProps {
    pub label: String,
    pub value: f64,
    /// Called only with finite numbers; other input is ignored.
    pub on_change: EventHandler<f64>,
    #[props(default = "any".to_string())]
    pub step: String,
}

/// Parse what the user typed, rejecting blanks, NaN and infinities.
pub(crate) fn parse_metric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[component]
pub fn MetricInput(props: MetricInputProps) -> Element {
    let on_change = props.on_change;
    rsx! {
        label {
            style: "font-weight: bold; display: flex; flex-direction: column; font-size: 13px;",
            "{props.label}"
            input {
                r#type: "number",
                step: "{props.step}",
                value: "{props.value}",
                style: "width: 110px;",
                onchange: move |evt: Event<FormData>| {
                    if let Some(value) = parse_metric(&evt.value()) {
                        on_change.call(value);
                    }
                },
            }
        }
    }
}
