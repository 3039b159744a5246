// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner animation for the TUI.
//!
//! Provides animated spinner frames for in-flight tool badges and the
//! whimsical verb options shown while the assistant is responding.

/// Spinner animation frames (platform-aware)
pub fn spinner_frames() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["·", "✢", "✳", "✶", "✻", "✽"]
    } else {
        &["·", "✢", "*", "✶", "✻", "✽"]
    }
}

/// Full animation cycle (forward + reverse for breathing effect)
pub fn spinner_cycle() -> Vec<&'static str> {
    let frames = spinner_frames();
    let mut cycle: Vec<&str> = frames.to_vec();
    // Add reverse (skip first and last to avoid duplicates at endpoints)
    cycle.extend(frames.iter().rev().skip(1).take(frames.len() - 2));
    cycle
}

/// Frame for a given animation tick.
pub fn frame_at(tick: u64) -> &'static str {
    let cycle = spinner_cycle();
    cycle[(tick as usize) % cycle.len()]
}

/// Whimsical verbs for the responding status line
pub const SPINNER_VERBS: &[&str] = &[
    "Weaving",
    "Assembling",
    "Composing",
    "Sketching",
    "Arranging",
    "Threading",
    "Drafting",
    "Shaping",
];

/// Get a random spinner verb
pub fn random_verb() -> &'static str {
    let idx = fastrand::usize(..SPINNER_VERBS.len());
    SPINNER_VERBS[idx]
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod tests;
