// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TerminalDriver, TerminalError};
use std::{io,
          sync::{Arc, Mutex, PoisonError}};

/// Settings snapshot handed out by [`TerminalDriverMock`].
pub const MOCK_ORIGINAL_SETTINGS: &str = "cooked";

/// One call made on a [`TerminalDriverMock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    CurrentSettings,
    ApplyRaw,
    Restore,
}

#[derive(Debug, Default)]
struct CallLogInner {
    calls: Vec<DriverCall>,
    fail_next_restore: bool,
}

/// Shared view of the calls made on a [`TerminalDriverMock`]. Keep this after moving the
/// mock into a controller or editor.
#[derive(Debug, Clone, Default)]
pub struct DriverCallLog {
    inner: Arc<Mutex<CallLogInner>>,
}

impl DriverCallLog {
    fn with_inner<T>(&self, f: impl FnOnce(&mut CallLogInner) -> T) -> T {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }

    fn record(&self, call: DriverCall) { self.with_inner(|it| it.calls.push(call)); }

    /// Copy of the calls so far.
    #[must_use]
    pub fn calls(&self) -> Vec<DriverCall> { self.with_inner(|it| it.calls.clone()) }

    /// Drain the calls so far.
    #[must_use]
    pub fn take(&self) -> Vec<DriverCall> {
        self.with_inner(|it| std::mem::take(&mut it.calls))
    }

    #[must_use]
    pub fn count(&self, call: DriverCall) -> usize {
        self.with_inner(|it| it.calls.iter().filter(|it| **it == call).count())
    }

    /// Make the next restore fail with [`TerminalError::SetAttributes`].
    pub fn fail_next_restore(&self) { self.with_inner(|it| it.fail_next_restore = true); }

    /// True when every raw mode activation has been matched by a restore.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.count(DriverCall::ApplyRaw) == self.count(DriverCall::Restore)
    }
}

/// A [`TerminalDriver`] that records calls instead of touching a terminal.
#[derive(Debug)]
pub struct TerminalDriverMock {
    log: DriverCallLog,
    is_terminal: bool,
}

impl TerminalDriverMock {
    /// A driver for a working terminal.
    #[must_use]
    pub fn new() -> (Self, DriverCallLog) {
        let log = DriverCallLog::default();
        let driver = Self {
            log: log.clone(),
            is_terminal: true,
        };
        (driver, log)
    }

    /// A driver whose input isn't a terminal (eg piped stdin), so enabling raw mode
    /// fails with [`TerminalError::NotATerminal`].
    #[must_use]
    pub fn not_a_terminal() -> (Self, DriverCallLog) {
        let (mut driver, log) = Self::new();
        driver.is_terminal = false;
        (driver, log)
    }
}

impl TerminalDriver for TerminalDriverMock {
    type Settings = String;

    fn current_settings(&mut self) -> Result<String, TerminalError> {
        self.log.record(DriverCall::CurrentSettings);
        if self.is_terminal {
            Ok(MOCK_ORIGINAL_SETTINGS.to_string())
        } else {
            Err(TerminalError::NotATerminal)
        }
    }

    fn apply_raw_settings(&mut self, _original: &String) -> Result<(), TerminalError> {
        self.log.record(DriverCall::ApplyRaw);
        Ok(())
    }

    fn restore_settings(&mut self, original: &String) -> Result<(), TerminalError> {
        self.log.record(DriverCall::Restore);
        debug_assert_eq!(original, MOCK_ORIGINAL_SETTINGS);
        let should_fail = self
            .log
            .with_inner(|it| std::mem::replace(&mut it.fail_next_restore, false));
        if should_fail {
            return Err(TerminalError::SetAttributes(io::Error::other(
                "mock restore failure",
            )));
        }
        Ok(())
    }
}
