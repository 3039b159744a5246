// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Terminal AI app builder
#[derive(Parser, Clone, Debug)]
#[command(name = "weft", version, about = "Terminal AI app builder")]
pub struct Cli {
    /// Initial prompt to send (required with --print)
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Print mode - non-interactive single turn, transcript to stdout
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Script file (TOML or JSON) driving the assistant
    #[arg(long, value_name = "FILE", env = "WEFT_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Model label shown in the header
    #[arg(long)]
    pub model: Option<String>,

    /// User display name shown in the header
    #[arg(long = "user-name")]
    pub user_name: Option<String>,

    /// Disable streaming and tool delays
    #[arg(long)]
    pub instant: bool,
}

impl Cli {
    /// Validate flag combinations; returns a user-facing message on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.print && self.prompt.is_none() {
            return Err("--print requires a prompt".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
