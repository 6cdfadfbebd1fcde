// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Dot commands
//!
//! Lines that start with a `.` control the shell itself and are never sent to the
//! database.
//!
//! | Command             | Description                        |
//! |---------------------|------------------------------------|
//! | `.help`             | Show available commands            |
//! | `.quit` / `.exit`   | Leave the shell                    |
//! | `.history`          | Numbered list of the history       |
//! | `.clear-history`    | Forget the history                 |
//!
//! Commands are case-insensitive. Anything after the command name is ignored.

use std::{fmt::Write as _, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
    History,
    ClearHistory,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    #[diagnostic(
        code(sqlsh::commands::unknown),
        help("enter \".help\" for a list of commands")
    )]
    Unknown(String),
}

impl MetaCommand {
    #[must_use]
    pub fn is_meta_command(input: &str) -> bool { input.trim_start().starts_with('.') }
}

impl FromStr for MetaCommand {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let name = input
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match name.as_str() {
            ".help" | ".h" | ".?" => Ok(MetaCommand::Help),
            ".quit" | ".exit" | ".q" => Ok(MetaCommand::Quit),
            ".history" => Ok(MetaCommand::History),
            ".clear-history" => Ok(MetaCommand::ClearHistory),
            _ => Err(CommandError::Unknown(name)),
        }
    }
}

#[must_use]
pub fn help_text() -> &'static str {
    "sqlsh commands:

  .help, .h, .?        Show this help message
  .quit, .exit, .q     Leave the shell
  .history             List the command history
  .clear-history       Forget the command history

SQL statements end with a semicolon (;) and may span several lines.
Up and Down recall earlier lines, Ctrl+C discards the current statement,
end of input (or .quit) leaves the shell."
}

/// Numbered listing for `.history`, oldest first, numbered from 1.
#[must_use]
pub fn format_history<'a>(entries: impl IntoIterator<Item = &'a str>) -> String {
    let mut acc = String::new();
    for (index, entry) in entries.into_iter().enumerate() {
        // Writing to a String can't fail.
        writeln!(acc, "{:>5}  {entry}", index + 1).ok();
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(".help", MetaCommand::Help)]
    #[test_case(".h", MetaCommand::Help)]
    #[test_case(".?", MetaCommand::Help)]
    #[test_case(".quit", MetaCommand::Quit)]
    #[test_case(".exit", MetaCommand::Quit)]
    #[test_case(".QUIT", MetaCommand::Quit)]
    #[test_case(".q now", MetaCommand::Quit)]
    #[test_case(".history", MetaCommand::History)]
    #[test_case("  .clear-history  ", MetaCommand::ClearHistory)]
    fn test_parse(input: &str, expected: MetaCommand) {
        assert_eq!(input.parse::<MetaCommand>(), Ok(expected));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ".tables".parse::<MetaCommand>(),
            Err(CommandError::Unknown(".tables".into()))
        );
    }

    #[test]
    fn test_is_meta_command() {
        assert!(MetaCommand::is_meta_command(".help"));
        assert!(MetaCommand::is_meta_command("  .quit"));
        assert!(!MetaCommand::is_meta_command("select 1;"));
        assert!(!MetaCommand::is_meta_command(""));
    }

    #[test]
    fn test_format_history() {
        assert_eq!(
            format_history(["select 1;", ".help"]),
            "    1  select 1;\n    2  .help\n"
        );
        assert_eq!(format_history(std::iter::empty()), "");
    }
}
