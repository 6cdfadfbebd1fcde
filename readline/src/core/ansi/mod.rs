// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte level terminal I/O: raw mode control, input decoding, and the handful of CSI
//! output sequences needed to redraw a single line.

// Attach.
pub mod constants;
pub mod csi_sequence;
pub mod input_decoder;
pub mod terminal_raw_mode;

// Re-export.
pub use constants::*;
pub use csi_sequence::*;
pub use input_decoder::*;
pub use terminal_raw_mode::*;
