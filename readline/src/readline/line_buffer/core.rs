// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditEvent, LINE_BUFFER_CAPACITY_DEFAULT};

/// Rejected edits. Both are recoverable: the keystroke is dropped and editing goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum LineBufferError {
    #[error("line buffer is full ({capacity} bytes)")]
    BufferFull { capacity: usize },

    #[error("insert position {pos} is past the end of the line ({len} bytes)")]
    InvalidPosition { pos: usize, len: usize },
}

/// The line being edited and the prompt shown in front of it.
///
/// `cursor` is a byte offset into `contents`, `0 <= cursor <= contents.len()`, and
/// `contents.len() <= capacity` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    contents: Vec<u8>,
    cursor: usize,
    capacity: usize,
    prompt: String,
}

impl Default for LineBuffer {
    fn default() -> Self { Self::new("", LINE_BUFFER_CAPACITY_DEFAULT) }
}

impl LineBuffer {
    #[must_use]
    pub fn new(prompt: impl Into<String>, capacity: usize) -> Self {
        Self {
            // `capacity` is only a bound; don't reserve more than a typical line.
            contents: Vec::with_capacity(capacity.min(LINE_BUFFER_CAPACITY_DEFAULT)),
            cursor: 0,
            capacity,
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn contents(&self) -> &[u8] { &self.contents }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn len(&self) -> usize { self.contents.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.contents.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn is_full(&self) -> bool { self.contents.len() >= self.capacity }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) { self.prompt = prompt.into(); }

    /// The contents as text. Bytes that aren't valid UTF-8 are replaced.
    #[must_use]
    pub fn as_string(&self) -> String { String::from_utf8_lossy(&self.contents).into_owned() }

    /// Insert `byte` at `pos`, shifting the rest of the line right, and advance the
    /// cursor by one.
    ///
    /// # Errors
    ///
    /// - [`LineBufferError::BufferFull`] if the line is at capacity.
    /// - [`LineBufferError::InvalidPosition`] if `pos` is past the end of the line.
    pub fn insert(&mut self, pos: usize, byte: u8) -> Result<(), LineBufferError> {
        if self.is_full() {
            return Err(LineBufferError::BufferFull {
                capacity: self.capacity,
            });
        }
        if pos > self.contents.len() {
            return Err(LineBufferError::InvalidPosition {
                pos,
                len: self.contents.len(),
            });
        }
        self.contents.insert(pos, byte);
        self.cursor += 1;
        Ok(())
    }

    /// Insert `byte` at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`LineBufferError::BufferFull`] if the line is at capacity.
    pub fn insert_at_cursor(&mut self, byte: u8) -> Result<(), LineBufferError> {
        self.insert(self.cursor, byte)
    }

    /// Delete the byte before the cursor. Returns `false` (and does nothing) when the
    /// cursor is at the start of the line.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.contents.remove(self.cursor);
        true
    }

    /// Replace the whole line, eg with a history entry. Text longer than the capacity
    /// is truncated. The cursor moves to the end.
    pub fn replace_all(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let len = bytes.len().min(self.capacity);
        self.contents.clear();
        self.contents.extend_from_slice(&bytes[..len]);
        self.cursor = len;
    }

    pub fn clear(&mut self) {
        self.contents.clear();
        self.cursor = 0;
    }

    /// Returns `false` when already at the start of the line.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns `false` when already at the end of the line.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.contents.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Apply the events that only touch the buffer: insert, backspace, and cursor
    /// moves. Returns whether the line changed and needs a redraw. History and outcome
    /// events are left to [`crate::handle_edit_event`] and return `Ok(false)` here.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Self::insert`] for a rejected keystroke.
    pub fn apply_event(&mut self, event: EditEvent) -> Result<bool, LineBufferError> {
        match event {
            EditEvent::InsertChar(byte) => {
                self.insert_at_cursor(byte)?;
                Ok(true)
            }
            EditEvent::Backspace => Ok(self.backspace()),
            EditEvent::CursorLeft => Ok(self.move_left()),
            EditEvent::CursorRight => Ok(self.move_right()),
            EditEvent::Submit
            | EditEvent::Interrupt
            | EditEvent::EndOfInput
            | EditEvent::HistoryPrev
            | EditEvent::HistoryNext
            | EditEvent::Ignored => Ok(false),
        }
    }
}
