// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// One logical editing operation, decoded from one or more input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// Printable ASCII byte (0x20..=0x7E).
    InsertChar(u8),
    Backspace,
    /// Enter (`\r` or `\n`).
    Submit,
    /// Ctrl+C.
    Interrupt,
    /// The input stream is closed.
    EndOfInput,
    /// Up arrow.
    HistoryPrev,
    /// Down arrow.
    HistoryNext,
    CursorLeft,
    CursorRight,
    /// Bytes with no effect: unknown control bytes, the prefix of an escape sequence,
    /// or an escape sequence that isn't recognized.
    Ignored,
}

impl EditEvent {
    /// Whether this event ends the current `read_line` call.
    #[must_use]
    pub fn is_terminal_outcome(self) -> bool {
        matches!(
            self,
            EditEvent::Submit | EditEvent::Interrupt | EditEvent::EndOfInput
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_outcomes() {
        assert!(EditEvent::Submit.is_terminal_outcome());
        assert!(EditEvent::Interrupt.is_terminal_outcome());
        assert!(EditEvent::EndOfInput.is_terminal_outcome());
        assert!(!EditEvent::InsertChar(b'a').is_terminal_outcome());
        assert!(!EditEvent::HistoryPrev.is_terminal_outcome());
        assert!(!EditEvent::Ignored.is_terminal_outcome());
    }
}
