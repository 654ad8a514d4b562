use chrono::{DateTime, Local};
use panel_logging::panel_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    /// Written by a generation backend; none is wired into the terminal build.
    #[allow(dead_code)]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sent_at: Local::now(),
        }
    }
}

/// The conversation the panel feeds. It owns the message log and any
/// in-flight assistant generation.
pub trait ConversationSink: Send {
    fn append(&mut self, message: ChatMessage);
    fn set_messages(&mut self, messages: Vec<ChatMessage>);
    fn messages(&self) -> &[ChatMessage];
    fn is_loading(&self) -> bool;
    fn stop(&mut self);
}

/// In-memory log used by the terminal front end. No generation backend is
/// attached, so it never reports loading.
#[derive(Debug, Default)]
pub struct TranscriptSink {
    messages: Vec<ChatMessage>,
}

impl TranscriptSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationSink for TranscriptSink {
    fn append(&mut self, message: ChatMessage) {
        panel_info!(
            "Appending {:?} message, content_len={}",
            message.role,
            message.content.len()
        );
        self.messages.push(message);
    }

    fn set_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn is_loading(&self) -> bool {
        false
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_keeps_order_and_clears() {
        let mut sink = TranscriptSink::new();
        sink.append(ChatMessage::user("cats"));
        sink.append(ChatMessage::user("dogs"));
        let contents: Vec<_> = sink.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["cats", "dogs"]);
        assert_eq!(sink.messages()[0].role, Role::User);

        sink.set_messages(Vec::new());
        assert!(sink.messages().is_empty());
        assert!(!sink.is_loading());
    }
}
