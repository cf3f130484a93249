//! The "Run Neighborhood Analysis" widget.
//!
//! Owns its own `AnalysisWidget` state machine. A click spawns one request
//! task scoped to this component; unmounting cancels the task and abandons
//! the widget, so a late reply never lands.

use std::cell::Cell;
use std::rc::Rc;

use crate::components::{ErrorDisplay, MetricInput};
use crate::js_bridge::FetchTransport;
use crate::state::AppState;
use dioxus::core::Task;
use dioxus::prelude::*;
use upi_core::{AnalysisClient, AnalysisInput, AnalysisWidget};

const BOX_STYLE: &str = "border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px; max-width: 640px; font-family: system-ui, sans-serif; background: #fff; color: #111;";
const BUTTON_STYLE: &str = "padding: 8px 12px; border-radius: 8px; border: 1px solid #111; background: #fff; cursor: pointer;";
const PRE_STYLE: &str = "margin-top: 12px; white-space: pre-wrap; background: #fafafa; padding: 12px; border-radius: 8px; border: 1px solid #eee; font-size: 12px;";

/// Copy a dropdown choice into the form; the empty placeholder leaves it alone.
pub(crate) fn apply_selection(form: &mut AnalysisInput, selected: &str) -> bool {
    if selected.is_empty() {
        return false;
    }
    form.neighborhood = selected.to_string();
    true
}

#[component]
pub fn AnalysisPanel() -> Element {
    let state = use_context::<AppState>();
    let mut widget = use_signal(AnalysisWidget::new);
    let mut form = use_signal(AnalysisInput::default);
    let in_flight: Rc<Cell<Option<Task>>> = use_hook(|| Rc::new(Cell::new(None)));

    // Picking a neighborhood in the dropdown fills the form.
    use_effect(move || {
        let selected = (state.selected_neighborhood)();
        apply_selection(&mut form.write(), &selected);
    });

    let on_unmount = in_flight.clone();
    use_drop(move || {
        if let Some(task) = on_unmount.take() {
            log::debug!("analysis panel unmounted, cancelling request");
            task.cancel();
        }
        // The signal may already be gone when the scope is torn down.
        if let Ok(mut w) = widget.try_write() {
            w.abandon();
        }
    });

    let on_run = move |_| {
        let Some(ticket) = widget.write().begin() else {
            return;
        };
        let config = state.config.read().clone();
        let input = form.read().clone();
        let slot = in_flight.clone();

        let task = spawn(async move {
            let client = AnalysisClient::new(config, FetchTransport);
            let outcome = client.run(Some(&input)).await;
            if let Err(e) = &outcome {
                log::warn!("Analysis for {} failed: {}", input.neighborhood, e);
            }
            widget.write().finish(ticket, outcome);
            slot.set(None);
        });
        in_flight.set(Some(task));
    };

    let current = widget.read().state().clone();
    let loading = current.is_loading();
    let values = form.read().clone();

    rsx! {
        div {
            style: BOX_STYLE,
            h3 { style: "margin: 0;", "Run Neighborhood Analysis" }
            p {
                style: "margin-top: 8px; font-size: 14px; opacity: 0.8;",
                "Click the button to run analysis on the chosen neighborhood."
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 12px;",
                label {
                    style: "font-weight: bold; display: flex; flex-direction: column; font-size: 13px;",
                    "Neighborhood"
                    input {
                        r#type: "text",
                        value: "{values.neighborhood}",
                        oninput: move |evt: Event<FormData>| form.write().neighborhood = evt.value(),
                    }
                }
                MetricInput {
                    label: "Historical AQI".to_string(),
                    value: values.aqi,
                    on_change: move |v| form.write().aqi = v,
                }
                MetricInput {
                    label: "Grocery stores (2 mi)".to_string(),
                    value: values.stores,
                    step: "1".to_string(),
                    on_change: move |v| form.write().stores = v,
                }
                MetricInput {
                    label: "Tree canopy (%)".to_string(),
                    value: values.cover,
                    on_change: move |v| form.write().cover = v,
                }
            }

            button {
                style: BUTTON_STYLE,
                disabled: loading,
                onclick: on_run,
                if loading { "Running…" } else { "Run chat" }
            }

            if let Some(message) = current.error_message() {
                ErrorDisplay { message: message.to_string() }
            }
            if let Some(text) = current.result_text() {
                pre { style: PRE_STYLE, "{text}" }
            }
        }
    }
}
