// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::config::{ActionSpec, ReplyRule};

fn rule(pattern: PatternSpec, text: &str) -> ReplyRule {
    ReplyRule {
        pattern,
        reply: ReplySpec {
            text: text.to_string(),
            actions: Vec::new(),
        },
    }
}

#[test]
fn test_first_matching_rule_wins() {
    let config = AppConfig {
        replies: vec![
            rule(
                PatternSpec::Contains {
                    value: "card".to_string(),
                },
                "card reply",
            ),
            rule(PatternSpec::Any, "fallback reply"),
        ],
        ..AppConfig::default()
    };
    let script = Script::compile(&config).unwrap();

    assert_eq!(script.resolve("please make a CARD app").text, "card reply");
    assert_eq!(script.resolve("anything else").text, "fallback reply");
}

#[test]
fn test_unmatched_prompt_gets_default_step() {
    let config = AppConfig {
        replies: vec![rule(
            PatternSpec::Contains {
                value: "todo".to_string(),
            },
            "todo reply",
        )],
        default_reply: Some(ReplySpec {
            text: "default".to_string(),
            actions: Vec::new(),
        }),
        ..AppConfig::default()
    };
    let script = Script::compile(&config).unwrap();

    assert_eq!(script.resolve("make a timer").text, "default");
}

#[test]
fn test_regex_pattern_matches_case_insensitively() {
    let config = AppConfig {
        replies: vec![rule(
            PatternSpec::Regex {
                value: "^build .*app$".to_string(),
            },
            "regex reply",
        )],
        ..AppConfig::default()
    };
    let script = Script::compile(&config).unwrap();

    assert_eq!(script.resolve("Build a Timer App").text, "regex reply");
    assert_ne!(script.resolve("apps are fun").text, "regex reply");
}

#[test]
fn test_invalid_regex_is_a_pattern_error() {
    let config = AppConfig {
        replies: vec![rule(
            PatternSpec::Regex {
                value: "(unclosed".to_string(),
            },
            "x",
        )],
        ..AppConfig::default()
    };

    let err = Script::compile(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Pattern { ref pattern, .. } if pattern == "(unclosed"));
}

#[test]
fn test_actions_carry_over_to_requests() {
    let config = AppConfig {
        replies: vec![ReplyRule {
            pattern: PatternSpec::Any,
            reply: ReplySpec {
                text: "done".to_string(),
                actions: vec![ActionSpec {
                    tool: "file_manager".to_string(),
                    args: serde_json::json!({ "command": "list" }),
                }],
            },
        }],
        ..AppConfig::default()
    };
    let script = Script::compile(&config).unwrap();

    let step = script.resolve("anything");
    assert_eq!(step.requests.len(), 1);
    assert_eq!(step.requests[0].tool, "file_manager");
}

#[test]
fn test_sample_script_scaffolds_entry_point() {
    let script = Script::sample();
    let step = script.resolve("make something");

    assert!(!step.requests.is_empty());
    let first = &step.requests[0];
    assert_eq!(first.tool, "str_replace_editor");
    assert_eq!(first.args["command"], "create");
    assert_eq!(first.args["path"], crate::prompts::ENTRY_PATH);
}

#[test]
fn test_compile_without_default_reply_has_builtin_fallback() {
    let script = Script::compile(&AppConfig::default()).unwrap();
    assert!(!script.resolve("hello").text.is_empty());
}
