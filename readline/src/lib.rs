// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # sqlsh_readline
//!
//! Blocking, single-line raw mode line editor used by the `sqlsh` database shell.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                 LineEditor::read_line(prompt)              │
//! ├────────────────────────────────────────────────────────────┤
//! │  RawModeGuard      InputDecoder      LineBuffer    History │
//! │  (termios snap,    (ESC [ A/B/C/D    (bytes +      (FIFO,  │
//! │   restore on       state machine)     cursor,       dedup, │
//! │   every exit)                         redraw)       nav)   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`TerminalModeController`] snapshots the terminal driver settings and puts the
//!   terminal into raw mode. [`RawModeGuard`] releases it on scope exit.
//! - [`InputDecoder`] turns one byte at a time into an [`EditEvent`].
//! - [`LineBuffer`] applies edit events and redraws `prompt + contents`.
//! - [`History`] keeps a bounded list of accepted lines with up/down navigation.
//! - [`LineEditor`] ties them together and returns a [`ReadlineEvent`].
//!
//! When raw mode can't be enabled (for example stdin is a pipe), the editor falls back
//! to reading newline terminated lines for the rest of the session.
//!
//! ```no_run
//! use sqlsh_readline::{LineEditor, LineEditorConfig, ReadlineEvent};
//!
//! let mut editor = LineEditor::new(LineEditorConfig::default());
//! loop {
//!     match editor.read_line("sqlsh> ") {
//!         Ok(ReadlineEvent::Line(line)) => editor.add_history_entry(&line),
//!         Ok(ReadlineEvent::Interrupted) => continue,
//!         Ok(ReadlineEvent::EndOfInput) | Err(_) => break,
//!     }
//! }
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod readline;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use readline::*;
