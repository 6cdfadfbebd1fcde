// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The edited line: a fixed capacity byte buffer with a cursor.
//!
//! | Module           | Responsibility                                          |
//! |------------------|---------------------------------------------------------|
//! | `core`           | [`LineBuffer`] struct, edit operations, [`LineBufferError`] |
//! | `event_handlers` | Dispatch an [`crate::EditEvent`] to buffer, history, or terminal |
//! | `render`         | Redraw `prompt + contents` in place with CSI sequences  |

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules organized by functional responsibility.
mod core;
mod event_handlers;
mod render;

// Public re-exports (expose stable API).
pub use core::*;
pub use event_handlers::*;
pub use render::*;
