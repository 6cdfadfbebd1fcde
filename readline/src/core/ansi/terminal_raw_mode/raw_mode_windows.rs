// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Windows raw mode. crossterm wraps the console API (`GetConsoleMode` /
//! `SetConsoleMode`) and remembers the original mode itself, so the settings snapshot
//! is empty.

use super::{TerminalDriver, TerminalError};
use crossterm::tty::IsTty;
use std::io;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDriver;

impl TerminalDriver for ConsoleDriver {
    type Settings = ();

    fn current_settings(&mut self) -> Result<(), TerminalError> {
        if io::stdin().is_tty() {
            Ok(())
        } else {
            Err(TerminalError::NotATerminal)
        }
    }

    fn apply_raw_settings(&mut self, _original: &()) -> Result<(), TerminalError> {
        crossterm::terminal::enable_raw_mode().map_err(TerminalError::SetAttributes)
    }

    fn restore_settings(&mut self, _original: &()) -> Result<(), TerminalError> {
        crossterm::terminal::disable_raw_mode().map_err(TerminalError::SetAttributes)
    }
}
