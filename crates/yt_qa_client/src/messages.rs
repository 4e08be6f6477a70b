//! JSON bodies exchanged with the Q&A backend (`/health`, `/stats`, `/ask`).

use serde::{Deserialize, Serialize};

/// Client → server: `POST /ask` body.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
    pub n_results: u32,
}

impl<'a> AskRequest<'a> {
    pub fn new(question: &'a str, n_results: u32) -> Self {
        Self {
            question,
            n_results,
        }
    }
}

/// One retrieved transcript chunk backing an answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceInfo {
    pub video_id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub chunk_index: Option<u32>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
}

/// Server → client: `POST /ask` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceInfo>,
    /// Echo of the question as the server received it.
    #[serde(default)]
    pub query: Option<String>,
}

/// Server → client: `GET /health` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Whether the vector store is loaded.
    #[serde(default)]
    pub chromadb: Option<bool>,
    /// Whether the LLM client is configured.
    #[serde(default)]
    pub openai: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Server → client: `GET /stats` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsResponse {
    pub total_chunks: u64,
    pub total_videos: u64,
    #[serde(default)]
    pub sample_videos: Vec<VideoInfo>,
}
