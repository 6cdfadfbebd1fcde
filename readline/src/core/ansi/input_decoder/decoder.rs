// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::EditEvent;
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL,
            ARROW_RIGHT_FINAL, ARROW_UP_FINAL, ASCII_BACKSPACE, ASCII_CR, ASCII_DEL,
            ASCII_LF, CSI_FINAL_FIRST, CSI_FINAL_LAST, CSI_PARAM_OR_INTERMEDIATE_FIRST,
            CSI_PARAM_OR_INTERMEDIATE_LAST, CTRL_C, PRINTABLE_FIRST, PRINTABLE_LAST};

/// Where the decoder is inside an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// Not inside an escape sequence.
    #[default]
    Normal,
    /// Got `ESC`.
    EscapeSeen,
    /// Got `ESC [`.
    CsiSeen,
    /// Got `ESC [` followed by parameter or intermediate bytes; waiting for the final
    /// byte.
    CsiParams,
}

/// Turns raw input bytes into [`EditEvent`]s, one byte per call.
///
/// Bytes that only advance the state machine (the `ESC` and `[` of an arrow key, the
/// parameters of a longer CSI sequence) produce no event, so `ESC [ A` decodes to a
/// single [`EditEvent::HistoryPrev`]. A complete sequence that isn't recognized
/// produces a single [`EditEvent::Ignored`].
#[derive(Debug, Clone, Default)]
pub struct InputDecoder {
    state: DecoderState,
}

impl InputDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> DecoderState { self.state }

    /// True while part of an escape sequence has been consumed.
    #[must_use]
    pub fn is_mid_sequence(&self) -> bool { self.state != DecoderState::Normal }

    pub fn reset(&mut self) { self.state = DecoderState::Normal; }

    /// Feed one byte. Returns [`None`] while an escape sequence is still incomplete.
    pub fn decode_byte(&mut self, byte: u8) -> Option<EditEvent> {
        match self.state {
            DecoderState::Normal => self.decode_normal(byte),
            DecoderState::EscapeSeen => self.decode_escape_seen(byte),
            DecoderState::CsiSeen => self.decode_csi_seen(byte),
            DecoderState::CsiParams => self.decode_csi_params(byte),
        }
    }

    /// The input stream has no more bytes. A partial escape sequence is dropped.
    pub fn decode_end_of_stream(&mut self) -> EditEvent {
        if self.is_mid_sequence() {
            self.reset();
            EditEvent::Ignored
        } else {
            EditEvent::EndOfInput
        }
    }

    /// A read failed. Any partial escape sequence is dropped.
    pub fn decode_read_error(&mut self) -> EditEvent {
        self.reset();
        EditEvent::Ignored
    }

    /// Decode a whole slice, skipping the bytes that produce no event.
    pub fn decode_bytes(&mut self, bytes: &[u8]) -> Vec<EditEvent> {
        bytes
            .iter()
            .filter_map(|byte| self.decode_byte(*byte))
            .collect()
    }

    fn decode_normal(&mut self, byte: u8) -> Option<EditEvent> {
        let event = match byte {
            ASCII_LF | ASCII_CR => EditEvent::Submit,
            ASCII_DEL | ASCII_BACKSPACE => EditEvent::Backspace,
            CTRL_C => EditEvent::Interrupt,
            ANSI_ESC => {
                self.state = DecoderState::EscapeSeen;
                return None;
            }
            PRINTABLE_FIRST..=PRINTABLE_LAST => EditEvent::InsertChar(byte),
            _ => EditEvent::Ignored,
        };
        Some(event)
    }

    fn decode_escape_seen(&mut self, byte: u8) -> Option<EditEvent> {
        if byte == ANSI_CSI_BRACKET {
            self.state = DecoderState::CsiSeen;
            return None;
        }
        // SS3 (`ESC O`), Alt+key, a lone ESC: none of these are supported.
        self.state = DecoderState::Normal;
        Some(EditEvent::Ignored)
    }

    fn decode_csi_seen(&mut self, byte: u8) -> Option<EditEvent> {
        self.state = DecoderState::Normal;
        let event = match byte {
            ARROW_UP_FINAL => EditEvent::HistoryPrev,
            ARROW_DOWN_FINAL => EditEvent::HistoryNext,
            ARROW_RIGHT_FINAL => EditEvent::CursorRight,
            ARROW_LEFT_FINAL => EditEvent::CursorLeft,
            CSI_PARAM_OR_INTERMEDIATE_FIRST..=CSI_PARAM_OR_INTERMEDIATE_LAST => {
                self.state = DecoderState::CsiParams;
                return None;
            }
            _ => EditEvent::Ignored,
        };
        Some(event)
    }

    fn decode_csi_params(&mut self, byte: u8) -> Option<EditEvent> {
        let is_param_or_intermediate = (CSI_PARAM_OR_INTERMEDIATE_FIRST
            ..=CSI_PARAM_OR_INTERMEDIATE_LAST)
            .contains(&byte);
        if is_param_or_intermediate {
            return None;
        }

        // A final byte ends the sequence. Anything else aborts it and is decoded on its
        // own, so Enter or Ctrl+C typed after a truncated sequence still takes effect.
        self.state = DecoderState::Normal;
        if (CSI_FINAL_FIRST..=CSI_FINAL_LAST).contains(&byte) {
            return Some(EditEvent::Ignored);
        }
        tracing::trace!(message = "CSI sequence aborted", byte);
        self.decode_normal(byte)
    }
}
