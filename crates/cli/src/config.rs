// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Script configuration types for TOML/JSON script files.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default model label shown in the header
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// Default user display name
pub const DEFAULT_USER_NAME: &str = "Alfred";
/// Default delay before a tool action completes (ms)
pub const DEFAULT_TOOL_DELAY_MS: u64 = 350;

/// Top-level script configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Name for logging/debugging
    #[serde(default)]
    pub name: String,

    /// User display name (default: "Alfred")
    #[serde(default)]
    pub user_name: Option<String>,

    /// Model label to report in the header
    #[serde(default)]
    pub model: Option<String>,

    /// Default reply if no pattern matches
    #[serde(default)]
    pub default_reply: Option<ReplySpec>,

    /// Ordered list of reply rules
    #[serde(default)]
    pub replies: Vec<ReplyRule>,

    /// Delay in milliseconds before each tool action completes
    #[serde(default)]
    pub tool_delay_ms: Option<u64>,

    /// Streaming pacing overrides
    #[serde(default)]
    pub stream: Option<StreamSpec>,
}

/// One prompt-matching rule
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReplyRule {
    pub pattern: PatternSpec,
    pub reply: ReplySpec,
}

/// Prompt pattern
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternSpec {
    /// Matches every prompt
    Any,
    /// Case-insensitive substring match
    Contains { value: String },
    /// Regular expression match
    Regex { value: String },
}

/// One assistant turn: tool requests first, then the reply text
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReplySpec {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

/// One tool request inside a reply
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ActionSpec {
    pub tool: String,

    #[serde(default)]
    pub args: serde_json::Value,
}

/// Streaming pacing overrides
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StreamSpec {
    #[serde(default)]
    pub tokens_per_second: Option<u32>,

    #[serde(default)]
    pub thinking_delay_ms: Option<u64>,
}

/// Script file loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML script: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON script: {0}")]
    Json(#[from] json5::Error),

    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

impl AppConfig {
    /// Load a script file; the extension picks the format (.json/.json5 are
    /// JSON5, everything else is TOML).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json") || e.eq_ignore_ascii_case("json5"));

        if is_json {
            Ok(json5::from_str(&contents)?)
        } else {
            Ok(toml::from_str(&contents)?)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
