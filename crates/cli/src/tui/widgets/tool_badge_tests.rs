// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;
use yare::parameterized;

fn invocation(tool_name: &str, args: Value) -> ToolInvocation {
    ToolInvocation::pending(tool_name, args)
}

#[parameterized(
    editor_create = { "str_replace_editor", json!({ "command": "create", "path": "/components/Button.jsx" }), "Creating /components/Button.jsx" },
    editor_str_replace = { "str_replace_editor", json!({ "command": "str_replace", "path": "/App.jsx" }), "Editing /App.jsx" },
    editor_insert = { "str_replace_editor", json!({ "command": "insert", "path": "/App.jsx" }), "Inserting into /App.jsx" },
    editor_view = { "str_replace_editor", json!({ "command": "view", "path": "/App.jsx" }), "Viewing /App.jsx" },
    editor_undo = { "str_replace_editor", json!({ "command": "undo_edit", "path": "/App.jsx" }), "Undoing changes to /App.jsx" },
    editor_unknown_command = { "str_replace_editor", json!({ "command": "format", "path": "/App.jsx" }), "Modifying /App.jsx" },
    manager_create_directory = { "file_manager", json!({ "command": "create_directory", "path": "/components" }), "Creating directory /components" },
    manager_delete = { "file_manager", json!({ "command": "delete", "path": "/old-file.js" }), "Deleting /old-file.js" },
    manager_rename = { "file_manager", json!({ "command": "rename", "path": "/a.js" }), "Renaming /a.js" },
    manager_list = { "file_manager", json!({ "command": "list", "path": "/components" }), "Listing /components" },
    manager_list_no_path = { "file_manager", json!({ "command": "list" }), "Listing /" },
    manager_list_empty_path = { "file_manager", json!({ "command": "list", "path": "" }), "Listing /" },
    manager_unknown_command = { "file_manager", json!({ "command": "chmod", "path": "/x" }), "Managing /x" },
    unknown_tool = { "unknown_tool", json!({ "foo": "bar" }), "unknown_tool" },
)]
fn message_table(tool_name: &str, args: Value, expected: &str) {
    let (_, message) = render_badge(&invocation(tool_name, args));
    assert_eq!(message, expected);
}

#[test]
fn test_known_tool_without_args_shows_raw_name() {
    let (_, message) = render_badge(&invocation("str_replace_editor", Value::Null));
    assert_eq!(message, "str_replace_editor");
}

#[test]
fn test_missing_command_uses_family_fallback() {
    let (_, message) = render_badge(&invocation(
        "str_replace_editor",
        json!({ "path": "/App.jsx" }),
    ));
    assert_eq!(message, "Modifying /App.jsx");

    let (_, message) = render_badge(&invocation("file_manager", json!({ "path": "/x" })));
    assert_eq!(message, "Managing /x");
}

#[test]
fn test_missing_path_substitutes_empty_string() {
    let (_, message) = render_badge(&invocation("str_replace_editor", json!({ "command": "create" })));
    assert_eq!(message, "Creating ");

    let (_, message) = render_badge(&invocation("file_manager", json!({ "command": "delete" })));
    assert_eq!(message, "Deleting ");
}

#[test]
fn test_pending_state_is_pending_indicator() {
    let inv = invocation("str_replace_editor", json!({ "command": "view", "path": "/a" }));
    let (indicator, _) = render_badge(&inv);
    assert_eq!(indicator, BadgeIndicator::Pending);
    assert!(!inv.is_complete());
}

#[test]
fn test_result_with_truthy_payload_is_complete() {
    let mut inv = invocation("file_manager", json!({ "command": "list" }));
    inv.finish(json!("success"));
    let (indicator, _) = render_badge(&inv);
    assert_eq!(indicator, BadgeIndicator::Complete);
}

#[test]
fn test_result_without_payload_stays_pending() {
    let mut inv = invocation("file_manager", json!({ "command": "list" }));
    inv.state = InvocationState::Result;
    inv.result = None;
    assert_eq!(render_badge(&inv).0, BadgeIndicator::Pending);
}

#[parameterized(
    null = { json!(null), false },
    bool_false = { json!(false), false },
    bool_true = { json!(true), true },
    zero = { json!(0), false },
    number = { json!(3), true },
    empty_string = { json!(""), false },
    string = { json!("ok"), true },
    empty_array = { json!([]), true },
    object = { json!({ "ok": true }), true },
)]
fn result_truthiness(payload: Value, complete: bool) {
    let mut inv = invocation("unknown_tool", Value::Null);
    inv.finish(payload);
    assert_eq!(inv.is_complete(), complete);
}

#[test]
fn test_regressed_state_renders_pending_again() {
    let mut inv = invocation("str_replace_editor", json!({ "command": "create", "path": "/App.jsx" }));
    inv.finish(json!("Created /App.jsx"));
    assert_eq!(render_badge(&inv).0, BadgeIndicator::Complete);

    // Upstream handed us an older snapshot; the renderer just reflects it.
    inv.state = InvocationState::Pending;
    assert_eq!(render_badge(&inv).0, BadgeIndicator::Pending);
}

#[test]
fn test_badge_line_complete_has_solid_dot() {
    let mut inv = invocation("str_replace_editor", json!({ "command": "create", "path": "/App.jsx" }));
    inv.finish(json!("Created /App.jsx"));
    let line = badge_line(&inv, 0, false);
    assert_eq!(line, "● Creating /App.jsx");
}

#[test]
fn test_badge_line_pending_uses_spinner_frame() {
    let inv = invocation("file_manager", json!({ "command": "list" }));
    let line = badge_line(&inv, 0, false);
    assert_eq!(line, format!("{} Listing /", crate::tui::spinner::frame_at(0)));
}

#[test]
fn test_badge_line_colors_wrap_indicator_only() {
    let mut inv = invocation("file_manager", json!({ "command": "delete", "path": "/x" }));
    inv.finish(json!("Deleted /x"));
    let line = badge_line(&inv, 0, true);
    assert!(line.contains("38;2;16;185;129"));
    assert!(line.ends_with("Deleting /x"));
}

#[test]
fn test_wire_snapshot_deserializes() {
    let inv: ToolInvocation = serde_json::from_str(
        r#"{ "toolName": "str_replace_editor", "state": "pending", "args": { "command": "create", "path": "/App.jsx" } }"#,
    )
    .unwrap();
    assert_eq!(inv.state, InvocationState::Pending);
    assert_eq!(render_badge(&inv).1, "Creating /App.jsx");

    let inv: ToolInvocation = serde_json::from_str(
        r#"{ "toolName": "file_manager", "state": "result", "result": "ok" }"#,
    )
    .unwrap();
    assert!(inv.is_complete());
    assert_eq!(render_badge(&inv).1, "file_manager");
}

#[test]
fn test_classify_is_closed_over_families() {
    let action = ToolAction::classify(&invocation(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
    ));
    assert_eq!(
        action,
        ToolAction::Editor {
            command: EditorCommand::Create,
            path: Some("/App.jsx".to_string()),
        }
    );

    let action = ToolAction::classify(&invocation("browser", json!({ "command": "open" })));
    assert_eq!(
        action,
        ToolAction::Unrecognized {
            name: "browser".to_string(),
        }
    );
}

mod fallback_property {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Any tool name outside the two known families renders verbatim,
        // whatever its arguments look like.
        #[test]
        fn unknown_names_render_verbatim(name in "[a-z_]{1,24}", key in "[a-z]{1,8}", value in "[a-z]{0,8}") {
            prop_assume!(name != EDITOR_TOOL && name != FILE_MANAGER_TOOL);
            let mut args = Map::new();
            args.insert(key, Value::String(value));
            let inv = ToolInvocation::pending(&name, Value::Object(args));
            let (_, message) = render_badge(&inv);
            prop_assert_eq!(message, name);
        }
    }
}
