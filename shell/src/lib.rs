// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # sqlsh
//!
//! The shell loop around [`sqlsh_readline::LineEditor`]:
//!
//! - [`CLIArg`] parses the command line with clap.
//! - [`Repl`] reads lines, runs dot commands ([`MetaCommand`]), and accumulates SQL
//!   until a `;` before handing it to a [`StatementExecutor`].
//! - [`history_file`] finds, loads, and saves `~/.sqlsh_history`.
//!
//! The database itself is a collaborator behind [`StatementExecutor`]. The bundled
//! [`EchoExecutor`] only reports that no database engine is attached.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod clap_config;
pub mod commands;
pub mod executor;
pub mod history_file;
pub mod repl;

// Re-export.
pub use clap_config::*;
pub use commands::*;
pub use executor::*;
pub use repl::*;
