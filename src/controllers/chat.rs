//! Chat Transcript
//!
//! Transcript state for the assistant widget. Each outgoing question leaves a
//! "thinking" placeholder that is later replaced by its own reply.

use crate::api::{ApiClient, ApiResult, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatEntry {
    Message { id: u64, sender: Sender, text: String },
    Thinking { id: u64 },
}

/// A question waiting for its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Id of the placeholder to replace
    pub ticket: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
    next_id: u64,
    intro_sent: bool,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// First open only: queue the introductory question without echoing it
    pub fn begin_intro(&mut self, intro_query: &str) -> Option<PendingReply> {
        if self.intro_sent || !self.entries.is_empty() {
            return None;
        }
        self.intro_sent = true;
        Some(self.push_thinking(intro_query.to_string()))
    }

    /// Echo a user message and queue it; blank input is ignored
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }
        self.intro_sent = true;
        let id = self.take_id();
        self.entries.push(ChatEntry::Message { id, sender: Sender::User, text: query.to_string() });
        Some(self.push_thinking(query.to_string()))
    }

    /// Swap the placeholder for the reply, or for `Error: ...`
    pub fn resolve(&mut self, ticket: u64, result: ApiResult<String>) {
        let text = match result {
            Ok(reply) => reply,
            Err(e) => format!("Error: {}", e),
        };
        let message = ChatEntry::Message { id: ticket, sender: Sender::Assistant, text };

        match self.entries.iter().position(|e| *e == ChatEntry::Thinking { id: ticket }) {
            Some(index) => self.entries[index] = message,
            None => self.entries.push(message),
        }
    }

    fn push_thinking(&mut self, query: String) -> PendingReply {
        let ticket = self.take_id();
        self.entries.push(ChatEntry::Thinking { id: ticket });
        PendingReply { ticket, query }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Send one question to the assistant
pub async fn ask<T: Transport>(api: &ApiClient<T>, pending: &PendingReply) -> ApiResult<String> {
    api.ask(&pending.query).await
}
