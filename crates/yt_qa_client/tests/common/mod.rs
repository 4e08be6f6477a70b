//! Shared test doubles: a scripted in-memory backend and a view that records every call.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use yt_qa_client::messages::{AskResponse, HealthResponse, StatsResponse};
use yt_qa_client::{Backend, ClientError, RenderedEntry, StatsPanel, StatusIndicator, View};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    InputEnabled(bool),
    Busy(bool),
    ClearInput,
    FocusInput,
    Append(RenderedEntry),
    ScrollToLatest,
    Status(StatusIndicator),
    Stats(StatsPanel),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn appended(&self) -> Vec<&RenderedEntry> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Append(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<StatusIndicator> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Status(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn stats(&self) -> Vec<StatsPanel> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Stats(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }
}

impl View for RecordingView {
    fn set_input_enabled(&mut self, enabled: bool) {
        self.events.push(ViewEvent::InputEnabled(enabled));
    }

    fn set_busy(&mut self, busy: bool) {
        self.events.push(ViewEvent::Busy(busy));
    }

    fn clear_input(&mut self) {
        self.events.push(ViewEvent::ClearInput);
    }

    fn focus_input(&mut self) {
        self.events.push(ViewEvent::FocusInput);
    }

    fn append_entry(&mut self, entry: &RenderedEntry) {
        self.events.push(ViewEvent::Append(entry.clone()));
    }

    fn scroll_to_latest(&mut self) {
        self.events.push(ViewEvent::ScrollToLatest);
    }

    fn set_status(&mut self, indicator: &StatusIndicator) {
        self.events.push(ViewEvent::Status(*indicator));
    }

    fn set_stats(&mut self, panel: &StatsPanel) {
        self.events.push(ViewEvent::Stats(panel.clone()));
    }
}

fn failure() -> ClientError {
    ClientError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "boom".into(),
    }
}

/// Backend answering from canned JSON values; `None` means the call fails.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub health: Option<serde_json::Value>,
    pub stats: Option<serde_json::Value>,
    pub answer: Option<serde_json::Value>,
    /// Every (question, n_results) pair passed to `ask`.
    pub asked: Mutex<Vec<(String, u32)>>,
}

impl FakeBackend {
    pub fn answering(answer: serde_json::Value) -> Self {
        Self {
            answer: Some(answer),
            ..Self::default()
        }
    }

    pub fn asked(&self) -> Vec<(String, u32)> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let value = self.health.clone().ok_or_else(failure)?;
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn stats(&self) -> Result<StatsResponse, ClientError> {
        let value = self.stats.clone().ok_or_else(failure)?;
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn ask(&self, question: &str, n_results: u32) -> Result<AskResponse, ClientError> {
        self.asked
            .lock()
            .unwrap()
            .push((question.to_string(), n_results));
        let value = self.answer.clone().ok_or_else(failure)?;
        Ok(serde_json::from_value(value).unwrap())
    }
}

/// Pick a free port by binding to :0; nothing listens on it afterwards.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
