//! Request lifecycle of the analysis widget.
//!
//! `AnalysisWidget` is a small state machine:
//!
//! ```text
//! Idle --begin--> Loading --finish--> Succeeded | Failed --begin--> Loading ...
//! ```
//!
//! Every `begin()` hands out a `Ticket`. A completion is applied only while
//! its ticket is current, so once the caller calls `abandon()` (e.g. the
//! component unmounted) a late response cannot touch the state.

use crate::client::NO_TEXT_PLACEHOLDER;
use crate::error::AnalysisError;

/// Current phase of a widget's request, with the payload of that phase only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded { result_text: String },
    Failed { error_message: String },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result_text(&self) -> Option<&str> {
        match self {
            RequestState::Succeeded { result_text } => Some(result_text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { error_message } => Some(error_message),
            _ => None,
        }
    }
}

/// Token tying a completion to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisWidget {
    state: RequestState,
    generation: u64,
}

impl AnalysisWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Enter `Loading` and return a ticket, or `None` if a request is already in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_loading() {
            log::debug!("analysis already running, ignoring trigger");
            return None;
        }
        self.generation += 1;
        self.state = RequestState::Loading;
        Some(Ticket(self.generation))
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Empty text is replaced by the placeholder. Returns `false` (and changes
    /// nothing) if the ticket is stale.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<String, AnalysisError>) -> bool {
        if ticket.0 != self.generation || !self.is_loading() {
            log::debug!("dropping stale analysis result {:?}", ticket);
            return false;
        }
        self.state = match outcome {
            Ok(text) if text.is_empty() => RequestState::Succeeded {
                result_text: NO_TEXT_PLACEHOLDER.to_string(),
            },
            Ok(result_text) => RequestState::Succeeded { result_text },
            Err(e) => RequestState::Failed {
                error_message: e.to_string(),
            },
        };
        true
    }

    /// Stop caring about the in-flight request, if any.
    pub fn abandon(&mut self) {
        self.generation += 1;
        if self.is_loading() {
            self.state = RequestState::Idle;
        }
    }
}
