//! Video Q&A chat client library (config, HTTP API, transcript rendering, controller).
//! Used by the `yt-qa` terminal front end.

pub mod client;
pub mod config;
pub mod controller;
pub mod format;
pub mod loaders;
pub mod messages;
pub mod render;
pub mod transcript;
pub mod view;

pub use client::{Backend, Client, ClientError};
pub use config::{default_config_path, ApiSection, ChatSection, Config, ConfigError};
pub use controller::{ChatController, SubmitOutcome, APOLOGY_MESSAGE};
pub use loaders::{ServiceStatus, StatsPanel, StatsSnapshot, StatusIndicator};
pub use transcript::{ChatMessage, Citation, Role, Transcript};
pub use view::{RenderedEntry, View};
