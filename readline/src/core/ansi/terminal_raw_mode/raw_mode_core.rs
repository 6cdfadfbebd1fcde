// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, io};

/// Errors from switching the terminal in and out of raw mode.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TerminalError {
    #[error("standard input is not attached to a terminal")]
    #[diagnostic(
        code(sqlsh_readline::terminal::not_a_terminal),
        help("input is read line by line when it is piped or redirected")
    )]
    NotATerminal,

    #[error("failed to read the terminal attributes")]
    #[diagnostic(code(sqlsh_readline::terminal::get_attributes))]
    GetAttributes(#[source] io::Error),

    #[error("failed to set the terminal attributes")]
    #[diagnostic(
        code(sqlsh_readline::terminal::set_attributes),
        help("run `stty sane` if the terminal was left in a bad state")
    )]
    SetAttributes(#[source] io::Error),

    #[error("raw mode is not supported on this platform")]
    #[diagnostic(code(sqlsh_readline::terminal::unsupported))]
    Unsupported,
}

/// The platform seam for raw mode. Implementations talk to the real terminal (termios
/// on Unix, the console API on Windows) or record calls in tests.
pub trait TerminalDriver {
    /// Snapshot of the terminal state, enough to put it back exactly as it was.
    type Settings: Clone + Debug;

    /// Read the current settings. Fails with [`TerminalError::NotATerminal`] when input
    /// isn't a terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings can't be read.
    fn current_settings(&mut self) -> Result<Self::Settings, TerminalError>;

    /// Put the terminal in raw mode, derived from `original`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings can't be applied.
    fn apply_raw_settings(&mut self, original: &Self::Settings) -> Result<(), TerminalError>;

    /// Apply `original` verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings can't be applied.
    fn restore_settings(&mut self, original: &Self::Settings) -> Result<(), TerminalError>;
}

/// Owns the terminal's original settings and tracks whether raw mode is on.
///
/// - The original settings are captured once, on the first successful
///   [`enable`](Self::enable), and reused for every later restore.
/// - [`disable`](Self::disable) is a no-op unless raw mode is active, so it is safe to
///   call on every exit path.
/// - Dropping the controller while raw mode is active restores the terminal.
#[derive(Debug)]
pub struct TerminalModeController<D: TerminalDriver> {
    driver: D,
    original_settings: Option<D::Settings>,
    is_raw_active: bool,
}

impl<D: TerminalDriver> TerminalModeController<D> {
    #[must_use]
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            original_settings: None,
            is_raw_active: false,
        }
    }

    #[must_use]
    pub fn is_raw_active(&self) -> bool { self.is_raw_active }

    #[must_use]
    pub fn original_settings(&self) -> Option<&D::Settings> {
        self.original_settings.as_ref()
    }

    #[must_use]
    pub fn driver(&self) -> &D { &self.driver }

    /// Switch to raw mode. Calling this while raw mode is already active does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings can't be read (eg input isn't a terminal) or
    /// the raw settings can't be applied. The terminal is left as it was in both cases.
    pub fn enable(&mut self) -> Result<(), TerminalError> {
        if self.is_raw_active {
            return Ok(());
        }

        let original = match &self.original_settings {
            Some(settings) => settings.clone(),
            None => {
                let settings = self.driver.current_settings()?;
                self.original_settings = Some(settings.clone());
                settings
            }
        };

        self.driver.apply_raw_settings(&original)?;
        self.is_raw_active = true;
        tracing::trace!(message = "Raw mode enabled");
        Ok(())
    }

    /// Restore the original settings. A no-op unless raw mode is active.
    ///
    /// # Errors
    ///
    /// Returns an error if the original settings can't be applied. Raw mode is still
    /// considered active in that case, so a later call retries.
    pub fn disable(&mut self) -> Result<(), TerminalError> {
        if !self.is_raw_active {
            return Ok(());
        }

        if let Some(original) = &self.original_settings {
            self.driver.restore_settings(original)?;
        }
        self.is_raw_active = false;
        tracing::trace!(message = "Raw mode disabled");
        Ok(())
    }
}

impl<D: TerminalDriver> Drop for TerminalModeController<D> {
    fn drop(&mut self) {
        if let Err(err) = self.disable() {
            tracing::warn!(
                message = "Failed to restore terminal settings on drop",
                error = ?err
            );
        }
    }
}

/// RAII guard that keeps the terminal in raw mode for its lifetime.
///
/// Use [`release`](Self::release) on the normal path to see restore errors. If the
/// guard is dropped instead (early return, `?`, panic unwinding) the terminal is
/// restored anyway and any error is logged.
#[derive(Debug)]
pub struct RawModeGuard<'a, D: TerminalDriver> {
    controller: &'a mut TerminalModeController<D>,
}

impl<'a, D: TerminalDriver> RawModeGuard<'a, D> {
    /// Enable raw mode and return a guard that will disable it.
    ///
    /// # Errors
    ///
    /// Returns the error from [`TerminalModeController::enable`].
    pub fn try_new(
        controller: &'a mut TerminalModeController<D>,
    ) -> Result<Self, TerminalError> {
        controller.enable()?;
        Ok(Self { controller })
    }

    /// Restore the terminal now.
    ///
    /// # Errors
    ///
    /// Returns the error from [`TerminalModeController::disable`]. The drop that
    /// follows tries once more.
    pub fn release(self) -> Result<(), TerminalError> { self.controller.disable() }
}

impl<D: TerminalDriver> Drop for RawModeGuard<'_, D> {
    fn drop(&mut self) {
        if let Err(err) = self.controller.disable() {
            tracing::warn!(
                message = "Failed to restore terminal settings",
                error = ?err
            );
        }
    }
}
