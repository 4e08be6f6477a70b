//! Message renderer: transcript entries as HTML fragments.

use crate::format::{escape_html, render_answer};
use crate::transcript::{ChatMessage, Citation, Role, Transcript};
use crate::view::{RenderedEntry, View};

fn render_sources(citations: &[Citation]) -> String {
    let mut html = String::from(r#"<div class="sources"><div class="sources-title">Sources:</div>"#);
    for citation in citations {
        html.push_str(&format!(
            r#"<div class="source-item"><a href="{url}" target="_blank" rel="noopener noreferrer">{title}</a><span class="source-url">{url}</span></div>"#,
            url = escape_html(&citation.url),
            title = escape_html(&citation.title),
        ));
    }
    html.push_str("</div>");
    html
}

/// Render one message. User text is escaped only; bot text is escaped, then formatted.
pub fn render(message: &ChatMessage) -> RenderedEntry {
    let body = match message.role() {
        Role::User => escape_html(message.content()),
        Role::Bot => render_answer(message.content()),
    };
    let mut html = format!(
        r#"<div class="message {role}-message"><div class="message-content">{body}</div>"#,
        role = message.role().as_str(),
    );
    if !message.citations().is_empty() {
        html.push_str(&render_sources(message.citations()));
    }
    html.push_str("</div>");
    RenderedEntry {
        message: message.clone(),
        html,
    }
}

/// Append `message` to the transcript, hand its rendering to the view and scroll to it.
pub fn append<V: View + ?Sized>(transcript: &mut Transcript, view: &mut V, message: ChatMessage) {
    let entry = render(transcript.push(message));
    view.append_entry(&entry);
    view.scroll_to_latest();
}

/// Standalone HTML page holding every transcript entry in order.
pub fn render_document(transcript: &Transcript) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Video Q&amp;A transcript</title>\n</head>\n<body>\n<div id=\"chat-messages\">\n",
    );
    for message in transcript.messages() {
        html.push_str(&render(message).html);
        html.push('\n');
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
