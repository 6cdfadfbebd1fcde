// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Read-eval-print loop
//!
//! ```text
//!   read_line(prompt) ──► Line ──► starts with '.'? ──yes──► run dot command
//!        ▲    │                        │ no
//!        │    │                        ▼
//!        │    │               append to statement buffer
//!        │    │                        │
//!        │    │                  ends with ';'? ──yes──► StatementExecutor
//!        │    │                        │ no
//!        │    │                        ▼
//!        │    │              continuation prompt `   ...> `
//!        │    ├──► Interrupted: discard the statement buffer
//!        │    └──► EndOfInput: leave
//!        └─────────────────────────────────────────────────
//! ```
//!
//! Every non-empty accepted line goes into the history. Dot commands are only
//! recognized at the start of a statement.

use crate::{CommandError, MetaCommand, PRIMARY_PROMPT, StatementExecutor, format_history,
            help_text,
            history_file::{self, HistoryFilePolicy}};
use miette::IntoDiagnostic;
use sqlsh_readline::{LineEditor, PlatformTerminalDriver, ReadlineEvent, TerminalDriver,
                     ok};
use std::{io::Write, ops::ControlFlow};

/// Prompt shown while a statement spans several lines.
pub const CONTINUATION_PROMPT: &str = "   ...> ";

/// Shell output device (usually `stdout`).
pub type ShellOutput = Box<dyn Write + Send>;

#[allow(missing_debug_implementations)]
pub struct Repl<D: TerminalDriver = PlatformTerminalDriver> {
    editor: LineEditor<D>,
    executor: Box<dyn StatementExecutor>,
    output_device: ShellOutput,
    prompt: String,
    statement_buffer: String,
    history_policy: HistoryFilePolicy,
}

impl<D: TerminalDriver> Repl<D> {
    pub fn new(
        editor: LineEditor<D>,
        executor: Box<dyn StatementExecutor>,
        output_device: ShellOutput,
    ) -> Self {
        Self {
            editor,
            executor,
            output_device,
            prompt: PRIMARY_PROMPT.to_string(),
            statement_buffer: String::new(),
            history_policy: HistoryFilePolicy::Disabled,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Load the history file now and save back to it when [`Self::run`] ends. Load
    /// failures are logged and otherwise ignored.
    #[must_use]
    pub fn with_history_file(mut self, history_policy: HistoryFilePolicy) -> Self {
        if let Some(path) = history_policy.path() {
            match history_file::load_history(path, self.editor.history_mut()) {
                Ok(count) => {
                    tracing::debug!(message = "History loaded", path = %path.display(), count);
                }
                Err(err) => {
                    tracing::warn!(
                        message = "Could not load history",
                        path = %path.display(),
                        error = %err
                    );
                }
            }
        }
        self.history_policy = history_policy;
        self
    }

    #[must_use]
    pub fn editor(&self) -> &LineEditor<D> { &self.editor }

    pub fn editor_mut(&mut self) -> &mut LineEditor<D> { &mut self.editor }

    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    pub fn print_welcome(&mut self) -> miette::Result<()> {
        writeln!(
            self.output_device,
            "sqlsh version {}\nEnter \".help\" for usage hints.",
            env!("CARGO_PKG_VERSION")
        )
        .into_diagnostic()
    }

    /// Read and run lines until `.quit` or end of input, then save the history.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. The history is saved
    /// in that case too.
    pub fn run(&mut self) -> miette::Result<()> {
        let result = self.run_loop();
        self.save_history();
        result
    }

    fn run_loop(&mut self) -> miette::Result<()> {
        loop {
            let prompt = if self.statement_buffer.is_empty() {
                self.prompt.as_str()
            } else {
                CONTINUATION_PROMPT
            };

            match self.editor.read_line(prompt)? {
                ReadlineEvent::Line(line) => {
                    if self.handle_line(&line)?.is_break() {
                        break;
                    }
                }
                ReadlineEvent::Interrupted => {
                    if !self.statement_buffer.is_empty() {
                        tracing::debug!(
                            message = "Statement discarded",
                            statement = %self.statement_buffer
                        );
                    }
                    self.statement_buffer.clear();
                }
                ReadlineEvent::EndOfInput => break,
            }
        }

        ok!()
    }

    /// Process one accepted line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    pub fn handle_line(&mut self, line: &str) -> miette::Result<ControlFlow<()>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        self.editor.add_history_entry(line);

        if self.statement_buffer.is_empty() && MetaCommand::is_meta_command(trimmed) {
            return self.run_meta_command(trimmed);
        }

        if !self.statement_buffer.is_empty() {
            self.statement_buffer.push(' ');
        }
        self.statement_buffer.push_str(trimmed);

        if self.statement_buffer.ends_with(';') {
            let statement = std::mem::take(&mut self.statement_buffer);
            self.execute_statement(&statement)?;
        }

        Ok(ControlFlow::Continue(()))
    }

    #[must_use]
    pub fn pending_statement(&self) -> &str { &self.statement_buffer }

    fn run_meta_command(&mut self, input: &str) -> miette::Result<ControlFlow<()>> {
        match input.parse::<MetaCommand>() {
            Ok(MetaCommand::Quit) => return Ok(ControlFlow::Break(())),
            Ok(MetaCommand::Help) => {
                writeln!(self.output_device, "{}", help_text()).into_diagnostic()?;
            }
            Ok(MetaCommand::History) => {
                let listing = format_history(self.editor.history().entries());
                write!(self.output_device, "{listing}").into_diagnostic()?;
            }
            Ok(MetaCommand::ClearHistory) => {
                self.editor.history_mut().clear();
                writeln!(self.output_device, "History cleared.").into_diagnostic()?;
            }
            Err(CommandError::Unknown(name)) => {
                tracing::debug!(message = "Unknown command", name = %name);
                writeln!(
                    self.output_device,
                    "Error: unknown command: {name}. Enter \".help\" for usage hints."
                )
                .into_diagnostic()?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn execute_statement(&mut self, statement: &str) -> miette::Result<()> {
        match self.executor.execute(statement) {
            Ok(output) => writeln!(self.output_device, "{output}").into_diagnostic(),
            Err(report) => {
                tracing::warn!(message = "Statement failed", statement, error = ?report);
                writeln!(self.output_device, "Error: {report}").into_diagnostic()
            }
        }
    }

    fn save_history(&self) {
        let Some(path) = self.history_policy.path() else {
            return;
        };
        if let Err(err) = history_file::save_history(path, self.editor.history()) {
            tracing::warn!(
                message = "Could not save history",
                path = %path.display(),
                error = %err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EchoExecutor;
    use pretty_assertions::assert_eq;
    use sqlsh_readline::{LineEditorConfig, StdoutMock, TerminalDriverMock};
    use std::io::Cursor;

    /// Records statements and answers with a fixed reply.
    struct RecordingExecutor {
        statements: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    }

    impl StatementExecutor for RecordingExecutor {
        fn execute(&mut self, statement: &str) -> miette::Result<String> {
            self.statements.lock().unwrap().push(statement.to_owned());
            if statement.starts_with("fail") {
                return Err(miette::miette!("no such table"));
            }
            Ok("ok".to_owned())
        }
    }

    fn repl_with_input(
        input: &[u8],
    ) -> (
        Repl<TerminalDriverMock>,
        std::sync::Arc<std::sync::Mutex<Vec<String>>>,
        StdoutMock,
    ) {
        let (driver, _) = TerminalDriverMock::new();
        let editor = LineEditor::with_devices(
            LineEditorConfig::default(),
            driver,
            Box::new(Cursor::new(input.to_vec())),
            Box::new(StdoutMock::new()),
        );
        let statements = std::sync::Arc::default();
        let executor = RecordingExecutor {
            statements: std::sync::Arc::clone(&statements),
        };
        let shell_output = StdoutMock::new();
        let repl = Repl::new(editor, Box::new(executor), Box::new(shell_output.clone()));
        (repl, statements, shell_output)
    }

    #[test]
    fn test_statement_spanning_lines() {
        let (mut repl, statements, shell_output) =
            repl_with_input(b"select *\rfrom t;\r");

        repl.run().unwrap();

        assert_eq!(*statements.lock().unwrap(), vec!["select * from t;"]);
        assert_eq!(shell_output.get_copy_of_buffer_as_string(), "ok\n");
        let history: Vec<&str> = repl.editor().history().entries().collect();
        assert_eq!(history, vec!["select *", "from t;"]);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (mut repl, statements, _) = repl_with_input(b".quit\rselect 1;\r");

        repl.run().unwrap();

        assert!(statements.lock().unwrap().is_empty());
    }

    #[test]
    fn test_interrupt_discards_statement() {
        let (mut repl, statements, _) = repl_with_input(b"select\r\x03select 2;\r");

        repl.run().unwrap();

        assert_eq!(*statements.lock().unwrap(), vec!["select 2;"]);
    }

    #[test]
    fn test_failed_statement_keeps_going() {
        let (mut repl, statements, shell_output) =
            repl_with_input(b"fail;\rselect 1;\r");

        repl.run().unwrap();

        assert_eq!(statements.lock().unwrap().len(), 2);
        assert_eq!(
            shell_output.get_copy_of_buffer_as_string(),
            "Error: no such table\nok\n"
        );
    }

    #[test]
    fn test_dot_command_inside_statement_is_sql() {
        let (mut repl, _, _) = repl_with_input(b"");

        repl.handle_line("select").unwrap();
        repl.handle_line(".quit").unwrap();

        assert_eq!(repl.pending_statement(), "select .quit");
    }

    #[test]
    fn test_history_and_clear_history() {
        let (mut repl, _, shell_output) =
            repl_with_input(b"select 1;\r.history\r.clear-history\r.history\r");

        repl.run().unwrap();

        assert_eq!(
            shell_output.get_copy_of_buffer_as_string(),
            "ok\n    1  select 1;\n    2  .history\nHistory cleared.\n    1  .history\n"
        );
    }

    #[test]
    fn test_unknown_command() {
        let (mut repl, _, shell_output) = repl_with_input(b".tables\r");

        repl.run().unwrap();

        assert!(
            shell_output
                .get_copy_of_buffer_as_string()
                .starts_with("Error: unknown command: .tables.")
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (mut repl, statements, _) = repl_with_input(b"\r   \rselect 1;\r");

        repl.run().unwrap();

        assert_eq!(statements.lock().unwrap().len(), 1);
        assert_eq!(repl.editor().history().len(), 1);
    }

    #[test]
    fn test_echo_executor() {
        let (driver, _) = TerminalDriverMock::new();
        let editor = LineEditor::with_devices(
            LineEditorConfig::default(),
            driver,
            Box::new(Cursor::new(b"select 1;\r".to_vec())),
            Box::new(StdoutMock::new()),
        );
        let shell_output = StdoutMock::new();
        let mut repl = Repl::new(
            editor,
            Box::new(EchoExecutor::default()),
            Box::new(shell_output.clone()),
        );

        repl.run().unwrap();

        assert!(
            shell_output
                .get_copy_of_buffer_as_string()
                .contains("Statement not executed:\nselect 1;")
        );
    }
}
