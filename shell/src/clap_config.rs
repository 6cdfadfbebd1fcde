// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use crate::history_file::{self, HistoryFilePolicy};
use clap::{Args, Parser};
use sqlsh_readline::{HISTORY_CAPACITY_DEFAULT, LINE_BUFFER_CAPACITY_DEFAULT,
                     LineEditorConfig, TracingConfig};
use std::path::PathBuf;
use tracing_core::LevelFilter;

/// Prompt shown when no statement is being continued.
pub const PRIMARY_PROMPT: &str = "sqlsh> ";

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "sqlsh")]
#[command(about = "Interactive shell for an embedded SQL database")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    /// Database file to open.
    #[arg(name = "DATABASE")]
    pub database: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        long,
        default_value_t = HISTORY_CAPACITY_DEFAULT,
        help = "Maximum number of lines kept in the command history."
    )]
    pub history_size: usize,

    #[arg(
        long,
        default_value_t = LINE_BUFFER_CAPACITY_DEFAULT,
        help = "Maximum length of one input line, in bytes."
    )]
    pub buffer_size: usize,

    #[arg(
        long,
        value_name = "PATH",
        help = "History file to use instead of `$SQLSH_HISTORY` or `~/.sqlsh_history`."
    )]
    pub history_file: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "history_file",
        help = "Don't load or save the command history."
    )]
    pub no_history: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "Log to this file. Logging is off unless this is set."
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "LEVEL",
        default_value_t = LevelFilter::INFO,
        help = "One of off, error, warn, info, debug, trace."
    )]
    pub log_level: LevelFilter,

    #[arg(long, value_name = "TEXT", default_value = PRIMARY_PROMPT, help = "Prompt text.")]
    pub prompt: String,
}

impl CLIArg {
    #[must_use]
    pub fn editor_config(&self) -> LineEditorConfig {
        LineEditorConfig::default()
            .with_buffer_capacity(self.global_options.buffer_size)
            .with_history_capacity(self.global_options.history_size)
    }

    /// File logging only. Display logging would draw over the line being edited.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        match &self.global_options.log_file {
            Some(path) => TracingConfig::new_file(
                Some(path.to_string_lossy().into_owned()),
                self.global_options.log_level,
            ),
            None => TracingConfig::disabled(),
        }
    }

    #[must_use]
    pub fn history_file_policy(&self) -> HistoryFilePolicy {
        if self.global_options.no_history {
            HistoryFilePolicy::Disabled
        } else if let Some(path) = &self.global_options.history_file {
            HistoryFilePolicy::Path(path.clone())
        } else {
            history_file::default_history_policy()
        }
    }
}
