// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineBuffer;
use crate::{CRLF, CTRL_C_ECHO, EditEvent, History, ReadlineError, ReadlineEvent};
use std::io::Write;

/// Apply one decoded event. Returns [Some] when the event ends the current
/// `read_line` call.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn handle_edit_event(
    line: &mut LineBuffer,
    event: EditEvent,
    history: &mut History,
    term: &mut dyn Write,
) -> Result<Option<ReadlineEvent>, ReadlineError> {
    match event {
        // Terminal outcomes.
        EditEvent::Submit => handle_submit(line, term),
        EditEvent::Interrupt => handle_interrupt(term),
        EditEvent::EndOfInput => handle_end_of_input(term),

        // History navigation.
        EditEvent::HistoryPrev => handle_history_prev(line, history, term),
        EditEvent::HistoryNext => handle_history_next(line, history, term),

        // Buffer edits.
        EditEvent::InsertChar(_)
        | EditEvent::Backspace
        | EditEvent::CursorLeft
        | EditEvent::CursorRight
        | EditEvent::Ignored => handle_buffer_edit(line, event, term),
    }
}

fn handle_submit(
    line: &LineBuffer,
    term: &mut dyn Write,
) -> Result<Option<ReadlineEvent>, ReadlineError> {
    write_and_flush(term, CRLF)?;
    Ok(Some(ReadlineEvent::Line(line.as_string())))
}

fn handle_interrupt(term: &mut dyn Write) -> Result<Option<ReadlineEvent>, ReadlineError> {
    write_and_flush(term, &format!("{CTRL_C_ECHO}{CRLF}"))?;
    Ok(Some(ReadlineEvent::Interrupted))
}

fn handle_end_of_input(term: &mut dyn Write) -> Result<Option<ReadlineEvent>, ReadlineError> {
    write_and_flush(term, CRLF)?;
    Ok(Some(ReadlineEvent::EndOfInput))
}

fn handle_history_prev(
    line: &mut LineBuffer,
    history: &mut History,
    term: &mut dyn Write,
) -> Result<Option<ReadlineEvent>, ReadlineError> {
    // Nothing to recall: leave the line alone.
    if let Some(entry) = history.navigate_prev() {
        line.replace_all(entry);
        line.render(term)?;
    }
    Ok(None)
}

fn handle_history_next(
    line: &mut LineBuffer,
    history: &mut History,
    term: &mut dyn Write,
) -> Result<Option<ReadlineEvent>, ReadlineError> {
    // Already on the fresh line, keep what the user typed.
    if history.is_at_fresh_line() {
        return Ok(None);
    }
    let entry = history.navigate_next().unwrap_or_default();
    line.replace_all(entry);
    line.render(term)?;
    Ok(None)
}

fn handle_buffer_edit(
    line: &mut LineBuffer,
    event: EditEvent,
    term: &mut dyn Write,
) -> Result<Option<ReadlineEvent>, ReadlineError> {
    match line.apply_event(event) {
        Ok(true) => line.render(term)?,
        Ok(false) => {}
        Err(err) => {
            tracing::trace!(message = "Dropped keystroke", ?event, error = %err);
        }
    }
    Ok(None)
}

fn write_and_flush(term: &mut dyn Write, text: &str) -> Result<(), ReadlineError> {
    term.write_all(text.as_bytes())?;
    term.flush()?;
    Ok(())
}
