//! Shared Dioxus components and browser bridge for the Urban Planning Initiative page.
//!
//! This crate provides:
//! - `js_bridge`: `fetch`-based `Transport` and text loading via `web-sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (analysis widget, selector, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
