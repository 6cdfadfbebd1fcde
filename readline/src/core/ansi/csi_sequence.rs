// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CHA_CURSOR_COLUMN, CSI_START, EL_ERASE_LINE, EL_ERASE_TO_END};
use std::fmt::{self, Display, Formatter};

/// The CSI output sequences used to redraw the edited line. Use [`Display`] (or
/// `to_string()`) to get the bytes to write to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Move the cursor to the given 1-based column of the current row.
    CursorHorizontalAbsolute(u16),
    /// Erase part of the current line, without moving the cursor.
    EraseLine(EraseLineMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseLineMode {
    /// EL 0.
    FromCursorToEnd,
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CsiSequence::CursorHorizontalAbsolute(column) => {
                // Column 0 is treated as 1 by terminals; always emit a real column.
                write!(f, "{CSI_START}{}{CHA_CURSOR_COLUMN}", (*column).max(1))
            }
            CsiSequence::EraseLine(EraseLineMode::FromCursorToEnd) => {
                write!(f, "{CSI_START}{EL_ERASE_TO_END}{EL_ERASE_LINE}")
            }
        }
    }
}
