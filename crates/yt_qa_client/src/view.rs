//! Presentation surface notified by the controller and loaders.
//! Implementations own the actual widgets (terminal, webview, test recorder).

use crate::loaders::{StatsPanel, StatusIndicator};
use crate::transcript::ChatMessage;

/// One transcript message together with its HTML fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntry {
    pub message: ChatMessage,
    pub html: String,
}

pub trait View {
    /// Enable or disable both the input field and the submit control.
    fn set_input_enabled(&mut self, enabled: bool);

    /// Switch the submit control between its busy and idle looks.
    fn set_busy(&mut self, busy: bool);

    fn clear_input(&mut self);

    fn focus_input(&mut self);

    /// A message was appended to the transcript.
    fn append_entry(&mut self, entry: &RenderedEntry);

    /// Bring the newest transcript entry into view.
    fn scroll_to_latest(&mut self);

    fn set_status(&mut self, indicator: &StatusIndicator);

    fn set_stats(&mut self, panel: &StatsPanel);
}
