//! Core types for the Urban Planning Initiative page.
//!
//! This crate is platform-neutral and compiles both for the WASM page and
//! for the native CLI:
//! - `state`: the analysis widget's request state machine
//! - `client`: the `/chat` analysis client over a pluggable `Transport`
//! - `transport`: HTTP request/response types and the `Transport` trait
//! - `neighborhoods`: dropdown options extracted from the community CSV
//! - `config`: the injected endpoint configuration
//! - `error`: the request error taxonomy

pub mod client;
pub mod config;
pub mod error;
pub mod neighborhoods;
pub mod state;
pub mod transport;

pub use client::{AnalysisClient, AnalysisInput, AnalysisReply, NO_TEXT_PLACEHOLDER};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use neighborhoods::NeighborhoodOptions;
pub use state::{AnalysisWidget, RequestState, Ticket};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
