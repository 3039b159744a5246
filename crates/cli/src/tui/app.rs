// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI application state and main iocraft component.

use std::sync::Arc;
use std::time::Duration;

use iocraft::prelude::*;
use parking_lot::Mutex;
use tracing::debug;

use crate::config::{AppConfig, DEFAULT_MODEL, DEFAULT_TOOL_DELAY_MS, DEFAULT_USER_NAME};
use crate::script::{ReplyStep, Script};
use crate::session::SessionLog;
use crate::tui::colors::{styled_hint, styled_placeholder, styled_pending_indicator, styled_separator};
use crate::tui::conversation::conversation_lines;
use crate::tui::separator::make_separator;
use crate::tui::spinner::{frame_at, random_verb};
use crate::tui::streaming::{StreamingConfig, StreamingResponse};
use crate::tui::widgets::tool_badge::ToolInvocation;
use crate::tui::workspace::{project, render_workspace, ViewMode, WorkspaceState, WorkspaceView};
use crate::vfs::Vfs;

/// Default terminal width when not detected
pub const DEFAULT_TERMINAL_WIDTH: u16 = 120;

/// Matches a control key that may be encoded as raw ASCII or as modifier+char.
///
/// Terminal encoding varies - some send raw ASCII codes (e.g., Ctrl+C as 0x03),
/// while others send the character with CONTROL modifier. This macro handles both.
macro_rules! ctrl_key {
    // Ctrl+C: ASCII 0x03 or 'c' with CONTROL
    (c, $modifiers:expr, $code:expr) => {
        matches!($code, KeyCode::Char('\x03'))
            || (matches!($code, KeyCode::Char('c')) && $modifiers.contains(KeyModifiers::CONTROL))
    };
    // Ctrl+D: ASCII 0x04 or 'd' with CONTROL
    (d, $modifiers:expr, $code:expr) => {
        matches!($code, KeyCode::Char('\x04'))
            || (matches!($code, KeyCode::Char('d')) && $modifiers.contains(KeyModifiers::CONTROL))
    };
}

/// Configuration for TUI behavior
#[derive(Clone, Debug)]
pub struct TuiConfig {
    pub user_name: String,
    pub model: String,
    /// Delay in milliseconds before each tool action completes
    pub tool_delay_ms: u64,
    pub streaming: StreamingConfig,
    /// Whether output is connected to a TTY
    pub is_tty: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            model: DEFAULT_MODEL.to_string(),
            tool_delay_ms: DEFAULT_TOOL_DELAY_MS,
            streaming: StreamingConfig::default(),
            is_tty: false,
        }
    }
}

impl TuiConfig {
    /// Instant pacing for tests and print mode.
    pub fn instant() -> Self {
        Self {
            tool_delay_ms: 0,
            streaming: StreamingConfig::instant(),
            ..Self::default()
        }
    }

    pub fn from_config(
        config: &AppConfig,
        cli_model: Option<&str>,
        cli_user_name: Option<&str>,
        instant: bool,
        is_tty: bool,
    ) -> Self {
        let mut streaming = if instant {
            StreamingConfig::instant()
        } else {
            StreamingConfig::default()
        };
        if let Some(stream) = config.stream.as_ref().filter(|_| !instant) {
            if let Some(tps) = stream.tokens_per_second {
                streaming.tokens_per_second = tps;
            }
            if let Some(delay) = stream.thinking_delay_ms {
                streaming.thinking_delay_ms = delay;
            }
        }

        Self {
            user_name: cli_user_name
                .map(str::to_string)
                .or_else(|| config.user_name.clone())
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            model: cli_model
                .map(str::to_string)
                .or_else(|| config.model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            tool_delay_ms: if instant {
                0
            } else {
                config.tool_delay_ms.unwrap_or(DEFAULT_TOOL_DELAY_MS)
            },
            streaming,
            is_tty,
        }
    }
}

/// Application mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for user input
    Input,
    /// Playing back tool actions and streaming the reply
    Responding,
}

/// Reason for app exit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    UserQuit,    // Ctrl+D or explicit quit
    Interrupted, // Double Ctrl+C
}

struct TuiAppStateInner {
    mode: AppMode,
    workspace: WorkspaceState,
    log: SessionLog,
    vfs: Vfs,
    input_buffer: String,
    cursor_pos: usize,
    /// Reply text streamed so far for the in-flight turn
    response_buffer: String,
    responding_verb: &'static str,
    /// Index into `vfs.paths()` for the code view selection
    selected_index: usize,
    exit_hint: bool,
    should_exit: bool,
    exit_reason: Option<ExitReason>,
    interrupt: bool,
    terminal_width: u16,
    tick: u64,
    config: TuiConfig,
    script: Arc<Script>,
}

impl TuiAppStateInner {
    fn exit(&mut self, reason: ExitReason) {
        self.should_exit = true;
        self.exit_reason = Some(reason);
    }

    fn selected_path(&self) -> Option<String> {
        let paths = self.vfs.paths();
        if paths.is_empty() {
            return None;
        }
        let index = self.selected_index.min(paths.len() - 1);
        paths.into_iter().nth(index)
    }
}

/// Snapshot handed to the render pass.
#[derive(Clone, Debug)]
pub struct RenderState {
    pub mode: AppMode,
    pub log: SessionLog,
    pub response_buffer: String,
    pub responding_verb: &'static str,
    pub workspace_view: WorkspaceView,
    pub input_buffer: String,
    pub exit_hint: bool,
    pub user_name: String,
    pub model: String,
    pub terminal_width: u16,
    pub tick: u64,
    pub is_tty: bool,
}

/// Shared state for the TUI app that can be accessed from outside the component
#[derive(Clone)]
pub struct TuiAppState {
    inner: Arc<Mutex<TuiAppStateInner>>,
}

impl TuiAppState {
    pub fn new(script: Arc<Script>, config: TuiConfig) -> Self {
        let terminal_width = crossterm::terminal::size()
            .map(|(w, _)| w)
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);

        Self {
            inner: Arc::new(Mutex::new(TuiAppStateInner {
                mode: AppMode::Input,
                workspace: WorkspaceState::new(),
                log: SessionLog::new(),
                vfs: Vfs::new(),
                input_buffer: String::new(),
                cursor_pos: 0,
                response_buffer: String::new(),
                responding_verb: "Weaving",
                selected_index: 0,
                exit_hint: false,
                should_exit: false,
                exit_reason: None,
                interrupt: false,
                terminal_width,
                tick: 0,
                config,
                script,
            })),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn should_exit(&self) -> bool {
        self.inner.lock().should_exit
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.inner.lock().exit_reason
    }

    pub fn current_view(&self) -> ViewMode {
        self.inner.lock().workspace.current_view()
    }

    pub fn input_buffer(&self) -> String {
        self.inner.lock().input_buffer.clone()
    }

    pub fn mode(&self) -> AppMode {
        self.inner.lock().mode
    }

    pub fn set_terminal_width(&self, width: u16) {
        self.inner.lock().terminal_width = width;
    }

    /// Clone of the virtual tree, for the print-mode summary.
    pub fn vfs_snapshot(&self) -> Vfs {
        self.inner.lock().vfs.clone()
    }

    /// Advance the animation tick (driven by the component's timer).
    pub fn advance_tick(&self) {
        let mut inner = self.inner.lock();
        inner.tick = inner.tick.wrapping_add(1);
    }

    /// Set the active workspace view directly (tab activation).
    pub fn set_view(&self, mode: ViewMode) {
        self.inner.lock().workspace.set_view(mode);
    }

    pub fn render_state(&self) -> RenderState {
        let inner = self.inner.lock();
        let width = inner.terminal_width as usize;
        let selected = inner.selected_path();
        RenderState {
            mode: inner.mode,
            log: inner.log.clone(),
            response_buffer: inner.response_buffer.clone(),
            responding_verb: inner.responding_verb,
            workspace_view: project(&inner.workspace, &inner.vfs, selected.as_deref(), width),
            input_buffer: inner.input_buffer.clone(),
            exit_hint: inner.exit_hint,
            user_name: inner.config.user_name.clone(),
            model: inner.config.model.clone(),
            terminal_width: inner.terminal_width,
            tick: inner.tick,
            is_tty: inner.config.is_tty,
        }
    }

    // ── Key handling ─────────────────────────────────────────────────────

    pub fn handle_key_event(&self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let mut inner = self.inner.lock();

        if ctrl_key!(c, key.modifiers, key.code) {
            if inner.mode == AppMode::Responding {
                inner.interrupt = true;
                return;
            }
            if !inner.input_buffer.is_empty() {
                inner.input_buffer.clear();
                inner.cursor_pos = 0;
                inner.exit_hint = true;
                return;
            }
            if inner.exit_hint {
                inner.exit(ExitReason::Interrupted);
            } else {
                inner.exit_hint = true;
            }
            return;
        }

        if ctrl_key!(d, key.modifiers, key.code) {
            if inner.input_buffer.is_empty() {
                inner.exit(ExitReason::UserQuit);
            }
            return;
        }

        inner.exit_hint = false;

        match key.code {
            // Tab - toggle between the preview and code views
            KeyCode::Tab => inner.workspace.toggle(),

            // Up/Down - move the file selection in code view
            KeyCode::Up if inner.workspace.current_view() == ViewMode::Code => {
                inner.selected_index = inner.selected_index.saturating_sub(1);
            }
            KeyCode::Down if inner.workspace.current_view() == ViewMode::Code => {
                let count = inner.vfs.file_count();
                if count > 0 && inner.selected_index < count - 1 {
                    inner.selected_index += 1;
                }
            }

            // Enter - submit the prompt
            KeyCode::Enter => {
                if inner.mode == AppMode::Input && !inner.input_buffer.is_empty() {
                    let prompt = std::mem::take(&mut inner.input_buffer);
                    inner.cursor_pos = 0;
                    drop(inner);
                    self.process_prompt(prompt);
                }
            }

            KeyCode::Backspace => {
                if inner.cursor_pos > 0 {
                    let pos = inner.cursor_pos - 1;
                    let at = byte_index(&inner.input_buffer, pos);
                    inner.input_buffer.remove(at);
                    inner.cursor_pos = pos;
                }
            }

            KeyCode::Left => inner.cursor_pos = inner.cursor_pos.saturating_sub(1),
            KeyCode::Right => {
                let len = inner.input_buffer.chars().count();
                if inner.cursor_pos < len {
                    inner.cursor_pos += 1;
                }
            }

            KeyCode::Char(c)
                if inner.mode == AppMode::Input
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                let at = byte_index(&inner.input_buffer, inner.cursor_pos);
                inner.input_buffer.insert(at, c);
                inner.cursor_pos += 1;
            }

            _ => {}
        }
    }

    // ── Prompt playback ──────────────────────────────────────────────────

    /// Resolve a prompt against the script and play the reply step. Inside a
    /// tokio runtime the playback runs as a task so the UI keeps animating;
    /// otherwise (print mode, tests) it runs to completion synchronously.
    pub fn process_prompt(&self, prompt: String) {
        let step = {
            let inner = self.inner.lock();
            inner.script.resolve(&prompt).clone()
        };

        {
            let mut inner = self.inner.lock();
            debug!(prompt = %prompt, "processing prompt");
            inner.log.push_user(prompt);
            inner.mode = AppMode::Responding;
            inner.responding_verb = random_verb();
            inner.response_buffer.clear();
            inner.interrupt = false;
        }

        if tokio::runtime::Handle::try_current().is_ok() {
            let state = self.clone();
            tokio::spawn(async move {
                state.play_step(step).await;
            });
        } else {
            self.play_step_blocking(&step);
        }
    }

    /// Convenience for print mode and tests: submit and play synchronously.
    pub fn run_prompt_blocking(&self, prompt: &str) {
        let step = {
            let inner = self.inner.lock();
            inner.script.resolve(prompt).clone()
        };
        {
            let mut inner = self.inner.lock();
            inner.log.push_user(prompt);
            inner.mode = AppMode::Responding;
        }
        self.play_step_blocking(&step);
    }

    async fn play_step(&self, step: ReplyStep) {
        let (tool_delay_ms, streaming) = {
            let inner = self.inner.lock();
            (inner.config.tool_delay_ms, inner.config.streaming.clone())
        };

        for request in &step.requests {
            let invocation = ToolInvocation::pending(&request.tool, request.args.clone());
            {
                self.inner.lock().log.push_tool(invocation.clone());
            }
            if tool_delay_ms > 0 && !self.interrupted() {
                tokio::time::sleep(Duration::from_millis(tool_delay_ms)).await;
            }
            self.apply_tool(&invocation);
        }

        if streaming.thinking_delay_ms > 0 && !self.interrupted() {
            tokio::time::sleep(Duration::from_millis(streaming.thinking_delay_ms)).await;
        }

        let mut response = StreamingResponse::new(step.text, streaming);
        while let Some(chunk) = response.next_chunk().await {
            let mut inner = self.inner.lock();
            inner.response_buffer.push_str(&chunk);
            if inner.interrupt {
                let rest = response.skip_to_end();
                inner.response_buffer.push_str(&rest);
                break;
            }
        }

        self.finish_response();
    }

    fn play_step_blocking(&self, step: &ReplyStep) {
        for request in &step.requests {
            let invocation = ToolInvocation::pending(&request.tool, request.args.clone());
            {
                self.inner.lock().log.push_tool(invocation.clone());
            }
            self.apply_tool(&invocation);
        }

        let mut inner = self.inner.lock();
        inner.response_buffer.clear();
        let text = step.text.clone();
        inner.log.push_assistant(text);
        inner.mode = AppMode::Input;
        inner.interrupt = false;
    }

    /// Apply an invocation to the tree and complete its log entry.
    fn apply_tool(&self, invocation: &ToolInvocation) {
        let mut inner = self.inner.lock();
        let outcome = inner.vfs.apply(invocation);
        inner.log.complete_last_tool(outcome.into_value());

        // Follow the assistant: keep the selection on the file it last touched.
        if let Some(path) = invocation.args.as_ref().and_then(|a| a.get("path")).and_then(|v| v.as_str())
        {
            if let Some(index) = inner.vfs.paths().iter().position(|p| p == path) {
                inner.selected_index = index;
            }
        }
    }

    fn finish_response(&self) {
        let mut inner = self.inner.lock();
        let text = std::mem::take(&mut inner.response_buffer);
        inner.log.push_assistant(text);
        inner.mode = AppMode::Input;
        inner.interrupt = false;
    }

    fn interrupted(&self) -> bool {
        self.inner.lock().interrupt
    }
}

/// Char-position to byte-offset in the input buffer.
fn byte_index(buffer: &str, char_pos: usize) -> usize {
    buffer
        .char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(buffer.len())
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Header: product line plus model/user line.
fn format_header_lines(state: &RenderState) -> (String, String) {
    let line1 = format!(" ✳ Weft v{}", env!("CARGO_PKG_VERSION"));
    let line2 = format!("   {} · building with {}", state.user_name, state.model);
    if state.is_tty {
        (line1, styled_hint(&line2))
    } else {
        (line1, line2)
    }
}

/// Input line: prompt buffer, or a placeholder before the first message.
fn format_input_line(state: &RenderState) -> String {
    if !state.input_buffer.is_empty() {
        return format!("❯ {}", state.input_buffer);
    }
    if state.log.is_empty() {
        if state.is_tty {
            styled_placeholder("Try \"build a recipe card\"")
        } else {
            "❯ Try \"build a recipe card\"".to_string()
        }
    } else {
        "❯".to_string()
    }
}

/// Status bar: exit hint or the standing shortcut reminders.
fn format_status_bar(state: &RenderState) -> String {
    let text = if state.exit_hint {
        " press ctrl+c again to exit".to_string()
    } else if state.mode == AppMode::Responding {
        format!(
            " {} {}… (ctrl+c to interrupt)",
            frame_at(state.tick),
            state.responding_verb
        )
    } else {
        " enter to send · tab to toggle view · ↑/↓ to browse files".to_string()
    };
    if state.is_tty && state.mode != AppMode::Responding {
        styled_hint(&text)
    } else if state.is_tty {
        styled_pending_indicator(&text)
    } else {
        text
    }
}

/// Conversation area: the session log plus any in-flight reply text.
fn render_conversation_area(state: &RenderState) -> AnyElement<'static> {
    let width = state.terminal_width as usize;
    let mut lines = conversation_lines(&state.log, width, state.tick, state.is_tty);

    if state.mode == AppMode::Responding && !state.response_buffer.is_empty() {
        lines.push(String::new());
        lines.extend(crate::tui::conversation::reply_lines(
            &state.response_buffer,
            width,
        ));
    }

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            #(lines.into_iter().map(|line| {
                element! { Text(content: line, wrap: TextWrap::NoWrap) }
            }))
        }
    }
    .into()
}

/// Render the whole screen from a state snapshot.
fn render_main_content(state: &RenderState) -> AnyElement<'static> {
    let width = state.terminal_width as usize;
    let (header1, header2) = format_header_lines(state);
    let rule = if state.is_tty {
        styled_separator(&make_separator(width))
    } else {
        make_separator(width)
    };
    let input_line = format_input_line(state);
    let status_bar = format_status_bar(state);

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct, height: 100pct) {
            Text(content: header1, wrap: TextWrap::NoWrap)
            Text(content: header2, wrap: TextWrap::NoWrap)
            Text(content: "")
            #(render_conversation_area(state))
            Text(content: "")
            #(render_workspace(&state.workspace_view, width, state.is_tty))
            Text(content: rule, wrap: TextWrap::NoWrap)
            Text(content: input_line, wrap: TextWrap::NoWrap)
            Text(content: status_bar, wrap: TextWrap::NoWrap)
        }
    }
    .into()
}

/// Props for the main App component
#[derive(Default, Props)]
pub struct AppProps {
    pub state: Option<TuiAppState>,
}

/// Main TUI App component using iocraft
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    let Some(state) = props.state.clone() else {
        return element! {
            View(flex_direction: FlexDirection::Column) {
                Text(content: "Error: TuiAppState must be provided via props")
            }
        };
    };

    let mut should_exit = hooks.use_state(|| false);
    // Render counter to force re-renders when state changes
    let mut render_counter = hooks.use_state(|| 0u64);
    // Timer counter for periodic updates (spinner, streaming)
    let mut timer_counter = hooks.use_state(|| 0u64);
    let state_clone = state.clone();

    // Handle terminal events (keyboard input and resize)
    hooks.use_terminal_events({
        let state = state.clone();
        move |event| match event {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => {
                state.handle_key_event(key);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
                if state.should_exit() {
                    should_exit.set(true);
                }
            }
            TerminalEvent::Resize(width, _height) => {
                state.set_terminal_width(width);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
            }
            _ => {}
        }
    });

    // Periodic timer for spinner animation and streaming updates
    hooks.use_future({
        let state = state.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(100)).await;
                state.advance_tick();
                let current = *timer_counter.read();
                timer_counter.set(current.wrapping_add(1));
            }
        }
    });

    let render_state = state_clone.render_state();

    let should_exit_val = should_exit.read();
    if *should_exit_val || state_clone.should_exit() {
        hooks.use_context_mut::<SystemContext>().exit();
    }

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            #(render_main_content(&render_state))
        }
    }
}

/// Interactive app wrapper around the iocraft render loop.
pub struct TuiApp {
    state: TuiAppState,
}

impl TuiApp {
    pub fn new(script: Arc<Script>, config: TuiConfig) -> Self {
        Self {
            state: TuiAppState::new(script, config),
        }
    }

    pub fn state(&self) -> TuiAppState {
        self.state.clone()
    }

    /// Run the main event loop using iocraft fullscreen
    pub fn run(&mut self) -> std::io::Result<Option<ExitReason>> {
        let state = self.state.clone();

        if tokio::runtime::Handle::try_current().is_ok() {
            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async {
                    // ignore_ctrl_c() so Ctrl+C is handled as a key event
                    element!(App(state: Some(state.clone())))
                        .fullscreen()
                        .ignore_ctrl_c()
                        .await
                })
            })?;
        } else {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                element!(App(state: Some(state.clone())))
                    .fullscreen()
                    .ignore_ctrl_c()
                    .await
            })?;
        }

        Ok(self.state.exit_reason())
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
