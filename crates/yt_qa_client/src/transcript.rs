//! Chat messages and the append-only session transcript.

use std::collections::HashSet;

use crate::messages::SourceInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

/// A source video backing an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub video_id: String,
    pub title: String,
    pub url: String,
}

impl From<SourceInfo> for Citation {
    fn from(s: SourceInfo) -> Self {
        Self {
            video_id: s.video_id,
            title: s.title,
            url: s.url,
        }
    }
}

/// Keep the first citation per video, preserving arrival order.
pub fn deduplicate_citations(citations: Vec<Citation>) -> Vec<Citation> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for citation in citations {
        if seen.insert(citation.video_id.clone()) {
            unique.push(citation);
        }
    }
    unique
}

/// One transcript entry. Citations hold at most one entry per `video_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    role: Role,
    content: String,
    citations: Vec<Citation>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            role,
            content: content.into(),
            citations: deduplicate_citations(citations),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, Vec::new())
    }

    pub fn bot(content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self::new(Role::Bot, content, citations)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }
}

/// Ordered messages of the current session. Only grows.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
