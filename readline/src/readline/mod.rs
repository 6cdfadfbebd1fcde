// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line editor: [`LineEditor`] drives a [`LineBuffer`] and a [`History`] from the
//! events produced by [`crate::InputDecoder`], with the terminal held in raw mode by a
//! [`crate::RawModeGuard`] for the duration of each [`LineEditor::read_line`] call.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
pub mod line_buffer;
pub mod line_editor;
pub mod readline_config;
pub mod readline_history;

// Re-export.
pub use line_buffer::*;
pub use line_editor::*;
pub use readline_config::*;
pub use readline_history::*;
