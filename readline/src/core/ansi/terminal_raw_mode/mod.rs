// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode control for the line editor.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends SIGINT, Ctrl+D is EOF)
//! - Echoing is enabled (typed characters appear on screen)
//! - Output is post-processed (`\n` becomes `\r\n`)
//!
//! **Raw Mode**:
//! - No line buffering, each byte is available immediately (VMIN=1, VTIME=0)
//! - No signal generation, Ctrl+C arrives as byte `0x03`
//! - No echo, the editor draws everything itself
//! - No output post-processing, the editor writes `\r\n` explicitly
//!
//! `stty -a` shows the same termios flags this module changes, which is handy when
//! a crashed program left the terminal in a bad state (`stty sane` fixes it).
//!
//! ## Ownership
//!
//! There are no module level statics. A [`TerminalModeController`] owns the snapshot
//! of the original settings and the `is_raw_active` flag, so independent editors (eg in
//! tests) don't interfere with each other. The platform calls live behind the
//! [`TerminalDriver`] trait:
//!
//! | Platform          | Driver                 | Mechanism                          |
//! |-------------------|------------------------|------------------------------------|
//! | Unix/Linux/macOS  | [`TermiosDriver`]      | rustix `tcgetattr` / `tcsetattr`   |
//! | Windows           | `ConsoleDriver`        | crossterm (`SetConsoleMode`)       |
//! | Tests             | [`TerminalDriverMock`] | records calls, can fail on demand  |
//!
//! ## Usage Example
//!
//! The recommended way to use raw mode is with the [`RawModeGuard`]:
//!
//! ```no_run
//! use sqlsh_readline::{PlatformTerminalDriver, RawModeGuard, TerminalModeController};
//!
//! let mut controller = TerminalModeController::new(PlatformTerminalDriver::default());
//! {
//!     let guard = RawModeGuard::try_new(&mut controller).expect("not a terminal");
//!     // Terminal is now in raw mode.
//!     guard.release().expect("failed to restore terminal");
//! } // Dropping the guard without calling release() also restores the terminal.
//! ```
//!
//! [`TerminalDriverMock`]: crate::TerminalDriverMock

// Private modules (hide internal structure).
mod raw_mode_core;

#[cfg(unix)]
mod raw_mode_unix;

#[cfg(windows)]
mod raw_mode_windows;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;

#[cfg(unix)]
pub use raw_mode_unix::*;

#[cfg(windows)]
pub use raw_mode_windows::*;

/// The driver [`crate::LineEditor::new`] uses for the real terminal.
#[cfg(unix)]
pub type PlatformTerminalDriver = TermiosDriver;

/// The driver [`crate::LineEditor::new`] uses for the real terminal.
#[cfg(windows)]
pub type PlatformTerminalDriver = ConsoleDriver;

/// The driver [`crate::LineEditor::new`] uses for the real terminal.
#[cfg(not(any(unix, windows)))]
pub type PlatformTerminalDriver = UnsupportedDriver;

/// Stand-in for platforms without raw mode support. The editor falls back to line
/// buffered input.
#[cfg(not(any(unix, windows)))]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDriver;

#[cfg(not(any(unix, windows)))]
impl TerminalDriver for UnsupportedDriver {
    type Settings = ();

    fn current_settings(&mut self) -> Result<(), TerminalError> {
        Err(TerminalError::Unsupported)
    }

    fn apply_raw_settings(&mut self, _original: &()) -> Result<(), TerminalError> {
        Err(TerminalError::Unsupported)
    }

    fn restore_settings(&mut self, _original: &()) -> Result<(), TerminalError> { Ok(()) }
}
