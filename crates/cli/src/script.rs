// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled assistant script: prompt matching and reply playback steps.
//!
//! The real product talks to a model; this build ships a deterministic
//! stand-in that satisfies the same boundary. Rules are checked in order and
//! the first match wins; unmatched prompts get the default step.

use regex::{Regex, RegexBuilder};
use serde_json::json;
use tracing::debug;

use crate::config::{AppConfig, ConfigError, PatternSpec, ReplySpec};

/// One tool request in a reply step.
#[derive(Clone, Debug)]
pub struct ToolRequest {
    pub tool: String,
    pub args: serde_json::Value,
}

/// One assistant turn: requests performed first, then the reply text.
#[derive(Clone, Debug, Default)]
pub struct ReplyStep {
    pub text: String,
    pub requests: Vec<ToolRequest>,
}

impl ReplyStep {
    fn from_spec(spec: &ReplySpec) -> Self {
        Self {
            text: spec.text.clone(),
            requests: spec
                .actions
                .iter()
                .map(|action| ToolRequest {
                    tool: action.tool.clone(),
                    args: action.args.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug)]
enum CompiledPattern {
    Any,
    Contains(String),
    Regex(Regex),
}

impl CompiledPattern {
    fn matches(&self, prompt: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Contains(needle) => prompt.to_lowercase().contains(&needle.to_lowercase()),
            Self::Regex(regex) => regex.is_match(prompt),
        }
    }
}

#[derive(Debug)]
struct CompiledRule {
    pattern: CompiledPattern,
    step: ReplyStep,
}

/// Compiled script, ready for prompt resolution.
#[derive(Debug)]
pub struct Script {
    rules: Vec<CompiledRule>,
    default_step: ReplyStep,
}

impl Script {
    /// Compile a loaded configuration.
    pub fn compile(config: &AppConfig) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(config.replies.len());
        for rule in &config.replies {
            let pattern = match &rule.pattern {
                PatternSpec::Any => CompiledPattern::Any,
                PatternSpec::Contains { value } => CompiledPattern::Contains(value.clone()),
                PatternSpec::Regex { value } => {
                    let regex = RegexBuilder::new(value)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| ConfigError::Pattern {
                            pattern: value.clone(),
                            source,
                        })?;
                    CompiledPattern::Regex(regex)
                }
            };
            rules.push(CompiledRule {
                pattern,
                step: ReplyStep::from_spec(&rule.reply),
            });
        }

        let default_step = config
            .default_reply
            .as_ref()
            .map(ReplyStep::from_spec)
            .unwrap_or_else(|| ReplyStep {
                text: "I can assemble small apps in this workspace. Describe a component \
                       or a mini app to get started."
                    .to_string(),
                requests: Vec::new(),
            });

        Ok(Self {
            rules,
            default_step,
        })
    }

    /// First matching step for a prompt, or the default step.
    pub fn resolve(&self, prompt: &str) -> &ReplyStep {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.pattern.matches(prompt) {
                debug!(rule = i, "script rule matched");
                return &rule.step;
            }
        }
        debug!("no script rule matched, using default step");
        &self.default_step
    }

    /// Built-in demo script used when no script file is given: scaffolds a
    /// small card app for any prompt.
    pub fn sample() -> Self {
        let card_jsx = "export default function Card({ title, children }) {\n\
                        \x20 return (\n\
                        \x20   <section className=\"rounded-tl-3xl rounded-br-3xl bg-gradient-to-br from-violet-600 to-rose-500 p-6 text-white shadow-2xl\">\n\
                        \x20     <h2 className=\"text-3xl font-black tracking-tight\">{title}</h2>\n\
                        \x20     <div className=\"mt-2 text-sm opacity-90\">{children}</div>\n\
                        \x20   </section>\n\
                        \x20 );\n\
                        }\n";
        let app_jsx = "import Card from '@/components/Card';\n\n\
                       export default function App() {\n\
                       \x20 return (\n\
                       \x20   <main className=\"min-h-screen bg-slate-950 p-10\">\n\
                       \x20     <Card title=\"Hello\">Welcome to your new workspace.</Card>\n\
                       \x20   </main>\n\
                       \x20 );\n\
                       }\n";

        Self {
            rules: vec![CompiledRule {
                pattern: CompiledPattern::Any,
                step: ReplyStep {
                    text: "Scaffolded a card app. Press tab to inspect the code view."
                        .to_string(),
                    requests: vec![
                        ToolRequest {
                            tool: "str_replace_editor".to_string(),
                            args: json!({
                                "command": "create",
                                "path": "/App.jsx",
                                "file_text": app_jsx,
                            }),
                        },
                        ToolRequest {
                            tool: "file_manager".to_string(),
                            args: json!({
                                "command": "create_directory",
                                "path": "/components",
                            }),
                        },
                        ToolRequest {
                            tool: "str_replace_editor".to_string(),
                            args: json!({
                                "command": "create",
                                "path": "/components/Card.jsx",
                                "file_text": card_jsx,
                            }),
                        },
                    ],
                },
            }],
            default_step: ReplyStep::default(),
        }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
