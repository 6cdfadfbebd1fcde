// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte at a time VT100 input decoding.
//!
//! Raw mode delivers keystrokes as a plain byte stream. Most keys are a single byte,
//! but arrow keys (and every other "special" key) arrive as multi-byte escape
//! sequences, so the decoder keeps a small amount of state between bytes:
//!
//! ```text
//!            ESC              [             A/B/C/D
//!  Normal ────────► EscapeSeen ────► CsiSeen ─────────► Normal (arrow event)
//!    ▲                  │               │  0x20..=0x3F
//!    │  anything else   │               ▼
//!    └──────────────────┘           CsiParams ── final byte 0x40..=0x7E ──► Normal
//! ```
//!
//! A byte that is neither a parameter nor a final byte aborts a `CsiParams` sequence
//! and is then decoded from `Normal`, so `ESC [ 1` followed by Enter still submits.
//!
//! Only `ESC [ A`, `ESC [ B`, `ESC [ C` and `ESC [ D` produce events. Every other
//! sequence is swallowed and reported as [`EditEvent::Ignored`].

// Attach.
mod decoder;
mod edit_event;

// Re-export.
pub use decoder::*;
pub use edit_event::*;
