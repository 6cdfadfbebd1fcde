// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # History file
//!
//! By default the command history is stored in `~/.sqlsh_history`, one entry per line,
//! oldest first. The location can be overridden with the `SQLSH_HISTORY` environment
//! variable:
//!
//! ```bash
//! export SQLSH_HISTORY=/custom/path/history
//! sqlsh ./app.db
//! ```
//!
//! Set `SQLSH_HISTORY` to an empty string to turn persistence off. The `--history-file`
//! and `--no-history` flags take precedence over the environment variable.

use sqlsh_readline::History;
use std::{env, fs, io,
          path::{Path, PathBuf}};

pub const DEFAULT_HISTORY_FILE: &str = ".sqlsh_history";
pub const HISTORY_ENV_VAR: &str = "SQLSH_HISTORY";

/// Where (and whether) the history is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryFilePolicy {
    Disabled,
    Path(PathBuf),
}

impl HistoryFilePolicy {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            HistoryFilePolicy::Disabled => None,
            HistoryFilePolicy::Path(path) => Some(path),
        }
    }
}

/// `$SQLSH_HISTORY` if set (empty disables), else `~/.sqlsh_history`. Disabled when
/// there is no home directory.
#[must_use]
pub fn default_history_policy() -> HistoryFilePolicy {
    if let Some(custom_path) = env::var_os(HISTORY_ENV_VAR) {
        if custom_path.is_empty() {
            return HistoryFilePolicy::Disabled;
        }
        return HistoryFilePolicy::Path(PathBuf::from(custom_path));
    }

    match dirs::home_dir() {
        Some(home) => HistoryFilePolicy::Path(home.join(DEFAULT_HISTORY_FILE)),
        None => HistoryFilePolicy::Disabled,
    }
}

/// Append every line of the file to `history`, which applies its capacity and
/// duplicate rules. A missing file is an empty history. Returns the number of lines
/// read.
///
/// # Errors
///
/// Returns an error if the file exists but can't be read.
pub fn load_history(path: &Path, history: &mut History) -> io::Result<usize> {
    let contents = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err),
    };

    let mut count = 0;
    for line in contents.lines() {
        history.append(line);
        count += 1;
    }
    Ok(count)
}

/// Overwrite the file with the history entries, oldest first.
///
/// # Errors
///
/// Returns an error if the file can't be written.
pub fn save_history(path: &Path, history: &History) -> io::Result<()> {
    let mut contents = String::new();
    for entry in history.entries() {
        contents.push_str(entry);
        contents.push('\n');
    }
    fs::write(path, contents)
}
