// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-TUI output: stderr diagnostics and the print-mode transcript.

use std::fmt::Display;

use crate::session::SessionLog;
use crate::tui::conversation::conversation_lines;
use crate::vfs::Vfs;

/// Width used for print-mode wrapping.
const PRINT_WIDTH: usize = 100;

/// Print an error line to stderr.
pub fn print_error(message: impl Display) {
    eprintln!("Error: {message}");
}

/// Print a warning line to stderr.
pub fn print_warning(message: impl Display) {
    eprintln!("Warning: {message}");
}

/// Print a finished conversation to stdout, followed by a workspace summary.
pub fn print_transcript(log: &SessionLog, vfs: &Vfs) {
    for line in conversation_lines(log, PRINT_WIDTH, 0, false) {
        println!("{line}");
    }

    let paths = vfs.paths();
    if !paths.is_empty() {
        println!();
        println!("Workspace ({} files):", paths.len());
        for path in paths {
            println!("  {path}");
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
