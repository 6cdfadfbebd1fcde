// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Maximum number of bytes in the edited line.
pub const LINE_BUFFER_CAPACITY_DEFAULT: usize = 4096;

/// Maximum number of entries kept in [`crate::History`].
pub const HISTORY_CAPACITY_DEFAULT: usize = 100;

/// Sizing for a [`crate::LineEditor`] session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEditorConfig {
    pub buffer_capacity: usize,
    pub history_capacity: usize,
}

impl Default for LineEditorConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: LINE_BUFFER_CAPACITY_DEFAULT,
            history_capacity: HISTORY_CAPACITY_DEFAULT,
        }
    }
}

impl LineEditorConfig {
    #[must_use]
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    #[must_use]
    pub fn with_history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }
}
