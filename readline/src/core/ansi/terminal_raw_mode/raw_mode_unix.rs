// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix raw mode using rustix's safe termios API.

use super::{TerminalDriver, TerminalError};
use rustix::termios::{self, OptionalActions, SpecialCodeIndex, Termios};
use std::io;

/// Drives the terminal attached to stdin with `tcgetattr` / `tcsetattr`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermiosDriver;

impl TerminalDriver for TermiosDriver {
    type Settings = Termios;

    fn current_settings(&mut self) -> Result<Termios, TerminalError> {
        let stdin = io::stdin();
        if !termios::isatty(&stdin) {
            return Err(TerminalError::NotATerminal);
        }
        termios::tcgetattr(&stdin).map_err(|errno| TerminalError::GetAttributes(errno.into()))
    }

    fn apply_raw_settings(&mut self, original: &Termios) -> Result<(), TerminalError> {
        let mut raw = original.clone();

        // Same as `cfmakeraw()`: no echo, no canonical mode, no signals, no output
        // processing.
        raw.make_raw();

        // Block until at least one byte is available, with no timeout.
        raw.special_codes[SpecialCodeIndex::VMIN] = 1;
        raw.special_codes[SpecialCodeIndex::VTIME] = 0;

        termios::tcsetattr(io::stdin(), OptionalActions::Now, &raw)
            .map_err(|errno| TerminalError::SetAttributes(errno.into()))
    }

    fn restore_settings(&mut self, original: &Termios) -> Result<(), TerminalError> {
        termios::tcsetattr(io::stdin(), OptionalActions::Now, original)
            .map_err(|errno| TerminalError::SetAttributes(errno.into()))
    }
}
