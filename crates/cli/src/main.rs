// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Weft binary entry point.

use std::io::IsTerminal;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use weft::cli::Cli;
use weft::config::AppConfig;
use weft::output::{print_error, print_transcript, print_warning};
use weft::script::Script;
use weft::tui::{TuiApp, TuiAppState, TuiConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Log to stderr; silent unless RUST_LOG is set, except in print mode.
    let filter = if cli.print {
        EnvFilter::from_default_env().add_directive("weft=warn".parse()?)
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(message) = cli.validate() {
        print_error(message);
        std::process::exit(1);
    }

    // Load the script file, or fall back to the built-in demo script.
    let config = match cli.script.as_deref() {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                print_error(e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    let script = if cli.script.is_some() {
        match Script::compile(&config) {
            Ok(script) => Arc::new(script),
            Err(e) => {
                print_error(e);
                std::process::exit(1);
            }
        }
    } else {
        Arc::new(Script::sample())
    };

    info!(script = %config.name, "weft starting");

    if cli.print {
        return run_print_mode(&cli, &config, script);
    }

    run_tui_mode(&cli, &config, script)
}

/// Non-interactive mode: one turn, transcript to stdout.
fn run_print_mode(
    cli: &Cli,
    config: &AppConfig,
    script: Arc<Script>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tui_config = TuiConfig::from_config(
        config,
        cli.model.as_deref(),
        cli.user_name.as_deref(),
        true, // always instant when printing
        false,
    );

    let state = TuiAppState::new(script, tui_config);
    if let Some(prompt) = cli.prompt.as_deref() {
        state.run_prompt_blocking(prompt);
    }

    let render = state.render_state();
    print_transcript(&render.log, &state.vfs_snapshot());
    Ok(())
}

/// Interactive TUI mode.
fn run_tui_mode(
    cli: &Cli,
    config: &AppConfig,
    script: Arc<Script>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Ignore SIGINT so Ctrl+C is captured as a key event rather than killing
    // the process.
    #[cfg(unix)]
    {
        use std::sync::atomic::AtomicBool;
        let flag = Arc::new(AtomicBool::new(false));
        if let Err(e) = signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag))
        {
            print_warning(format_args!("Failed to ignore SIGINT: {}", e));
        }
        // Leak the flag so it stays registered for the lifetime of the process
        std::mem::forget(flag);
    }

    let is_tty = std::io::stdout().is_terminal();
    let tui_config = TuiConfig::from_config(
        config,
        cli.model.as_deref(),
        cli.user_name.as_deref(),
        cli.instant,
        is_tty,
    );

    let mut app = TuiApp::new(script, tui_config);

    // An initial prompt starts playing while the interface mounts.
    if let Some(prompt) = cli.prompt.clone() {
        app.state().process_prompt(prompt);
    }

    app.run()?;
    Ok(())
}
