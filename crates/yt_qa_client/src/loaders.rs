//! One-shot startup loaders: backend health indicator and statistics panel.

use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::FutureExt;

use crate::client::Backend;
use crate::messages::{HealthResponse, StatsResponse};
use crate::view::View;

/// Number of sample videos shown in the stats panel.
pub const SAMPLE_VIDEO_LIMIT: usize = 5;

pub const STATS_ERROR_CAPTION: &str = "Failed to load statistics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Connected,
    Degraded,
    Unreachable,
}

impl From<&HealthResponse> for ServiceStatus {
    fn from(h: &HealthResponse) -> Self {
        if h.status == "healthy" {
            ServiceStatus::Connected
        } else {
            ServiceStatus::Degraded
        }
    }
}

/// Glyph, color and caption of the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIndicator {
    pub glyph: &'static str,
    pub color: &'static str,
    pub caption: &'static str,
}

impl StatusIndicator {
    /// Shown before the first health check resolves.
    pub fn checking() -> Self {
        Self {
            glyph: "●",
            color: "#9ca3af",
            caption: "Checking...",
        }
    }
}

impl From<ServiceStatus> for StatusIndicator {
    fn from(status: ServiceStatus) -> Self {
        match status {
            ServiceStatus::Connected => Self {
                glyph: "●",
                color: "#22c55e",
                caption: "Connected",
            },
            ServiceStatus::Degraded => Self {
                glyph: "●",
                color: "#f59e0b",
                caption: "Degraded",
            },
            ServiceStatus::Unreachable => Self {
                glyph: "●",
                color: "#ef4444",
                caption: "Disconnected",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleVideo {
    pub title: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total_chunks: u64,
    pub total_videos: u64,
    /// At most [`SAMPLE_VIDEO_LIMIT`] entries, in server order.
    pub sample_videos: Vec<SampleVideo>,
}

impl From<StatsResponse> for StatsSnapshot {
    fn from(s: StatsResponse) -> Self {
        Self {
            total_chunks: s.total_chunks,
            total_videos: s.total_videos,
            sample_videos: s
                .sample_videos
                .into_iter()
                .take(SAMPLE_VIDEO_LIMIT)
                .map(|v| SampleVideo {
                    title: v.title,
                    url: v.url,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsPanel {
    Loading,
    Loaded(StatsSnapshot),
    Unavailable,
}

impl StatsPanel {
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            StatsPanel::Loading => Some("Loading statistics..."),
            StatsPanel::Loaded(_) => None,
            StatsPanel::Unavailable => Some(STATS_ERROR_CAPTION),
        }
    }
}

/// Query `/health` and map the answer to a [`ServiceStatus`]. Never fails.
pub async fn fetch_health<B: Backend + ?Sized>(backend: &B) -> ServiceStatus {
    match backend.health().await {
        Ok(health) => {
            let status = ServiceStatus::from(&health);
            if status == ServiceStatus::Degraded {
                tracing::warn!(
                    status = %health.status,
                    chromadb = ?health.chromadb,
                    openai = ?health.openai,
                    "backend reports degraded health"
                );
            } else {
                tracing::debug!(
                    chromadb = ?health.chromadb,
                    openai = ?health.openai,
                    "backend healthy"
                );
            }
            status
        }
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            ServiceStatus::Unreachable
        }
    }
}

/// Query `/stats`. Never fails; errors become [`StatsPanel::Unavailable`].
pub async fn fetch_stats<B: Backend + ?Sized>(backend: &B) -> StatsPanel {
    match backend.stats().await {
        Ok(stats) => StatsPanel::Loaded(stats.into()),
        Err(e) => {
            tracing::error!(error = %e, "loading stats failed");
            StatsPanel::Unavailable
        }
    }
}

/// Run one health check and set the indicator once.
pub async fn check_health<B, V>(backend: &B, view: &mut V) -> ServiceStatus
where
    B: Backend + ?Sized,
    V: View + ?Sized,
{
    let status = fetch_health(backend).await;
    view.set_status(&status.into());
    status
}

/// Load statistics once and render the panel.
pub async fn load_stats<B, V>(backend: &B, view: &mut V) -> StatsPanel
where
    B: Backend + ?Sized,
    V: View + ?Sized,
{
    let panel = fetch_stats(backend).await;
    view.set_stats(&panel);
    panel
}

enum Loaded {
    Health(ServiceStatus),
    Stats(StatsPanel),
}

/// Render the initial unknown states, then run both loaders concurrently,
/// rendering each result as soon as it arrives.
pub async fn startup<B, V>(backend: &B, view: &mut V) -> (ServiceStatus, StatsPanel)
where
    B: Backend + ?Sized,
    V: View + ?Sized,
{
    view.set_status(&StatusIndicator::checking());
    view.set_stats(&StatsPanel::Loading);

    let mut pending = FuturesUnordered::new();
    pending.push(fetch_health(backend).map(Loaded::Health).boxed_local());
    pending.push(fetch_stats(backend).map(Loaded::Stats).boxed_local());

    let mut status = ServiceStatus::Unreachable;
    let mut panel = StatsPanel::Unavailable;
    while let Some(loaded) = pending.next().await {
        match loaded {
            Loaded::Health(s) => {
                view.set_status(&s.into());
                status = s;
            }
            Loaded::Stats(p) => {
                view.set_stats(&p);
                panel = p;
            }
        }
    }
    (status, panel)
}
