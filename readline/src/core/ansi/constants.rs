// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 byte constants for input decoding and line redraw.
//!
//! # Input Sequence Format
//!
//! Arrow keys arrive as CSI (Control Sequence Introducer) sequences:
//! - `CSI` = ESC [  (0x1B 0x5B)
//! - Up: `ESC[A`, Down: `ESC[B`, Right: `ESC[C`, Left: `ESC[D`
//!
//! Longer CSI sequences carry parameter bytes (0x30-0x3F) and intermediate bytes
//! (0x20-0x2F) before a final byte (0x40-0x7E), eg `ESC[3~` (Delete) or `ESC[1;5C`
//! (Ctrl+Right).

// ==================== Control Bytes ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// Ctrl+C, End of Text.
pub const CTRL_C: u8 = 0x03;

/// Ctrl+H, Backspace on some terminals.
pub const ASCII_BACKSPACE: u8 = 0x08;

/// DEL, what most terminals send for the Backspace key.
pub const ASCII_DEL: u8 = 0x7F;

/// Line feed.
pub const ASCII_LF: u8 = b'\n';

/// Carriage return, what the Enter key sends in raw mode.
pub const ASCII_CR: u8 = b'\r';

// ==================== Printable Range ====================

/// First byte accepted for insertion (space).
pub const PRINTABLE_FIRST: u8 = 0x20;

/// Last byte accepted for insertion (`~`).
pub const PRINTABLE_LAST: u8 = 0x7E;

// ==================== Arrow Keys (CSI A/B/C/D) ====================

/// CSI A: Up arrow key final byte
pub const ARROW_UP_FINAL: u8 = b'A';

/// CSI B: Down arrow key final byte
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// CSI C: Right arrow key final byte
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// CSI D: Left arrow key final byte
pub const ARROW_LEFT_FINAL: u8 = b'D';

// ==================== CSI Byte Classes ====================

/// Intermediate bytes start at space (0x20) and parameter bytes end at `?` (0x3F).
pub const CSI_PARAM_OR_INTERMEDIATE_FIRST: u8 = 0x20;
pub const CSI_PARAM_OR_INTERMEDIATE_LAST: u8 = 0x3F;

/// Final bytes: `@` (0x40) through `~` (0x7E).
pub const CSI_FINAL_FIRST: u8 = 0x40;
pub const CSI_FINAL_LAST: u8 = 0x7E;

// ==================== Output Sequences ====================

/// `ESC [` as a string, the prefix of every output sequence.
pub const CSI_START: &str = "\x1b[";

/// CHA: Cursor Horizontal Absolute, `CSI n G` (1-based column).
pub const CHA_CURSOR_COLUMN: char = 'G';

/// EL: Erase in Line, `CSI n K`.
pub const EL_ERASE_LINE: char = 'K';

/// EL 0: erase from cursor to end of line.
pub const EL_ERASE_TO_END: u16 = 0;

/// Raw mode turns off output post-processing, so a bare `\n` doesn't return the
/// carriage.
pub const CRLF: &str = "\r\n";

/// Echoed when the user presses Ctrl+C.
pub const CTRL_C_ECHO: &str = "^C";
