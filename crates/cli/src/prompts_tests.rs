// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn test_template_pins_entry_path() {
    assert!(GENERATION_PROMPT.contains(ENTRY_PATH));
    assert!(GENERATION_PROMPT.contains("default export"));
}

#[test]
fn test_template_pins_import_alias() {
    assert!(GENERATION_PROMPT.contains(&format!("'{IMPORT_ALIAS}'")));
}

#[test]
fn test_template_forbids_alternate_entry_format() {
    assert!(GENERATION_PROMPT.contains("Do not create any HTML files"));
}
