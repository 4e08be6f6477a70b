//! Request lifecycle controller: one question/answer round trip at a time.

use crate::client::Backend;
use crate::config::DEFAULT_N_RESULTS;
use crate::loaders::{self, ServiceStatus, StatsPanel};
use crate::render;
use crate::transcript::{ChatMessage, Citation, Transcript};
use crate::view::View;

/// Bot reply shown when a question could not be answered, whatever the cause.
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error while processing your question. Please make sure the API server is running and try again.";

/// What a call to [`ChatController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank question; nothing happened.
    Ignored,
    Answered,
    /// The request failed and the apology was shown instead.
    Failed,
}

/// Owns the transcript and drives the view through each round trip.
pub struct ChatController<B, V> {
    backend: B,
    view: V,
    transcript: Transcript,
    n_results: u32,
}

impl<B: Backend, V: View> ChatController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            transcript: Transcript::new(),
            n_results: DEFAULT_N_RESULTS,
        }
    }

    pub fn with_n_results(mut self, n_results: u32) -> Self {
        self.n_results = n_results;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_parts(self) -> (B, V, Transcript) {
        (self.backend, self.view, self.transcript)
    }

    /// Run the health and stats loaders once.
    pub async fn start(&mut self) -> (ServiceStatus, StatsPanel) {
        loaders::startup(&self.backend, &mut self.view).await
    }

    /// Ask `question` and append the user message and the bot reply.
    ///
    /// A blank question is ignored without touching the view. Otherwise the
    /// input is disabled for the duration of the request and always re-enabled
    /// afterwards, whether the request succeeded or not.
    pub async fn submit(&mut self, question: &str) -> SubmitOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.view.set_input_enabled(false);
        self.view.set_busy(true);
        render::append(
            &mut self.transcript,
            &mut self.view,
            ChatMessage::user(question),
        );
        self.view.clear_input();

        let outcome = match self.backend.ask(question, self.n_results).await {
            Ok(response) => {
                tracing::debug!(sources = response.sources.len(), "answer received");
                let citations = response.sources.into_iter().map(Citation::from).collect();
                render::append(
                    &mut self.transcript,
                    &mut self.view,
                    ChatMessage::bot(response.answer, citations),
                );
                SubmitOutcome::Answered
            }
            Err(e) => {
                tracing::error!(error = %e, "ask request failed");
                render::append(
                    &mut self.transcript,
                    &mut self.view,
                    ChatMessage::bot(APOLOGY_MESSAGE, Vec::new()),
                );
                SubmitOutcome::Failed
            }
        };

        self.view.set_input_enabled(true);
        self.view.set_busy(false);
        self.view.focus_input();
        outcome
    }
}
