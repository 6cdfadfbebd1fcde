// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineBuffer;
use crate::{CsiSequence, EraseLineMode, ok};
use std::io::{self, Write};

/// Number of terminal columns the prompt takes up. ANSI styling (colors, bold) has no
/// width.
#[must_use]
pub fn prompt_display_width(prompt: &str) -> usize {
    let plain = strip_ansi_escapes::strip_str(prompt);
    plain.chars().count()
}

impl LineBuffer {
    /// Redraw the current terminal line as `prompt + contents` and put the terminal
    /// cursor on the logical cursor.
    ///
    /// 1. CHA 1: go to the first column.
    /// 2. Write the prompt and the contents.
    /// 3. EL 0: erase whatever was left over from a longer previous line.
    /// 4. CHA n: move to the cursor column.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn render(&self, term: &mut dyn Write) -> io::Result<()> {
        let cursor_column = prompt_display_width(self.prompt()) + self.cursor() + 1;
        let cursor_column = u16::try_from(cursor_column).unwrap_or(u16::MAX);

        write!(term, "{}", CsiSequence::CursorHorizontalAbsolute(1))?;
        term.write_all(self.prompt().as_bytes())?;
        term.write_all(self.contents())?;
        write!(
            term,
            "{}{}",
            CsiSequence::EraseLine(EraseLineMode::FromCursorToEnd),
            CsiSequence::CursorHorizontalAbsolute(cursor_column)
        )?;
        term.flush()?;

        ok!()
    }
}
