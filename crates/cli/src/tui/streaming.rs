// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token streaming simulation for assistant replies.

use std::time::Duration;

/// Pacing for streamed replies
#[derive(Clone, Debug)]
pub struct StreamingConfig {
    /// Tokens per second (0 = instant)
    pub tokens_per_second: u32,

    /// Thinking delay before streaming starts (ms)
    pub thinking_delay_ms: u64,

    /// Minimum chunk size for streaming
    pub min_chunk_size: usize,

    /// Maximum chunk size for streaming
    pub max_chunk_size: usize,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            tokens_per_second: 50,
            thinking_delay_ms: 400,
            min_chunk_size: 1,
            max_chunk_size: 5,
        }
    }
}

impl StreamingConfig {
    /// Instant streaming (no delays)
    pub fn instant() -> Self {
        Self {
            tokens_per_second: 0,
            thinking_delay_ms: 0,
            min_chunk_size: 100,
            max_chunk_size: 100,
        }
    }
}

/// Streaming reply state
pub struct StreamingResponse {
    full_text: String,
    position: usize,
    config: StreamingConfig,
    complete: bool,
}

impl StreamingResponse {
    pub fn new(text: String, config: StreamingConfig) -> Self {
        Self {
            full_text: text,
            position: 0,
            config,
            complete: false,
        }
    }

    /// Get the next chunk of text
    pub async fn next_chunk(&mut self) -> Option<String> {
        if self.complete {
            return None;
        }

        if self.position >= self.full_text.len() {
            self.complete = true;
            return None;
        }

        let remaining = self.full_text.len() - self.position;
        let chunk_size = if self.config.tokens_per_second == 0 {
            remaining
        } else {
            let base = (self.config.min_chunk_size + self.config.max_chunk_size) / 2;
            base.clamp(1, remaining)
        };

        // Snap to a char boundary so multibyte glyphs never split
        let mut end = self.position + chunk_size;
        while end < self.full_text.len() && !self.full_text.is_char_boundary(end) {
            end += 1;
        }

        let chunk = self.full_text[self.position..end].to_string();
        self.position = end;

        if self.config.tokens_per_second > 0 {
            let delay_ms = 1000 / self.config.tokens_per_second as u64;
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        Some(chunk)
    }

    /// Check if streaming is complete
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Get the full text (for immediate display)
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Skip to end (for interrupt handling)
    pub fn skip_to_end(&mut self) -> String {
        let rest = self.full_text[self.position..].to_string();
        self.position = self.full_text.len();
        self.complete = true;
        rest
    }
}

#[cfg(test)]
#[path = "streaming_tests.rs"]
mod tests;
