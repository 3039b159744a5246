// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;

#[test]
fn test_entries_append_in_order() {
    let mut log = SessionLog::new();
    log.push_user("make a card");
    log.push_tool(ToolInvocation::pending(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
    ));
    log.push_assistant("Done.");

    assert_eq!(log.entries().len(), 3);
    assert!(matches!(log.entries()[0], ChatEntry::User(_)));
    assert!(matches!(log.entries()[1], ChatEntry::Tool(_)));
    assert!(matches!(log.entries()[2], ChatEntry::Assistant(_)));
}

#[test]
fn test_empty_assistant_text_is_dropped() {
    let mut log = SessionLog::new();
    log.push_assistant("");
    assert!(log.is_empty());
}

#[test]
fn test_complete_last_tool_targets_newest_tool_entry() {
    let mut log = SessionLog::new();
    log.push_tool(ToolInvocation::pending(
        "str_replace_editor",
        json!({ "command": "create", "path": "/a.js" }),
    ));
    log.push_tool(ToolInvocation::pending(
        "str_replace_editor",
        json!({ "command": "create", "path": "/b.js" }),
    ));

    assert_eq!(log.pending_tools(), 2);
    log.complete_last_tool(json!("Created /b.js"));
    assert_eq!(log.pending_tools(), 1);

    let entries = log.entries();
    match (&entries[0], &entries[1]) {
        (ChatEntry::Tool(first), ChatEntry::Tool(second)) => {
            assert!(!first.is_complete());
            assert!(second.is_complete());
        }
        _ => panic!("expected two tool entries"),
    }
}

#[test]
fn test_complete_without_tool_entry_is_a_noop() {
    let mut log = SessionLog::new();
    log.push_user("hello");
    log.complete_last_tool(json!("ok"));
    assert_eq!(log.pending_tools(), 0);
}
