// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversation session log.
//!
//! Append-only record of the chat: user prompts, assistant replies, and tool
//! invocation snapshots. The playback side owns the snapshots; the most
//! recent pending tool entry is completed in place when its action finishes.

use serde_json::Value;

use crate::tui::widgets::tool_badge::ToolInvocation;

/// One entry in the conversation.
#[derive(Clone, Debug)]
pub enum ChatEntry {
    User(String),
    Assistant(String),
    Tool(ToolInvocation),
}

/// The conversation so far.
#[derive(Clone, Debug, Default)]
pub struct SessionLog {
    entries: Vec<ChatEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn push_user(&mut self, prompt: impl Into<String>) {
        self.entries.push(ChatEntry::User(prompt.into()));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.entries.push(ChatEntry::Assistant(text));
        }
    }

    pub fn push_tool(&mut self, invocation: ToolInvocation) {
        self.entries.push(ChatEntry::Tool(invocation));
    }

    /// Complete the most recent tool entry with a result payload.
    pub fn complete_last_tool(&mut self, result: Value) {
        if let Some(ChatEntry::Tool(invocation)) = self
            .entries
            .iter_mut()
            .rev()
            .find(|e| matches!(e, ChatEntry::Tool(_)))
        {
            invocation.finish(result);
        }
    }

    /// Number of tool entries still pending.
    pub fn pending_tools(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, ChatEntry::Tool(inv) if !inv.is_complete()))
            .count()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
