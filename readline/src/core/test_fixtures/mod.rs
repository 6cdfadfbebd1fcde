// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for driving the line editor without a real terminal. These are part of the
//! public API so the `sqlsh` crate's integration tests can use them too.

// Attach.
pub mod stdout_mock;
pub mod temp_dir;
pub mod terminal_driver_mock;

// Re-export.
pub use stdout_mock::*;
pub use temp_dir::*;
pub use terminal_driver_mock::*;
