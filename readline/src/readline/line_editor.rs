// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ASCII_CR, ASCII_LF, History, InputDecoder, LineBuffer, LineEditorConfig,
            PlatformTerminalDriver, RawModeGuard, TerminalDriver, TerminalError,
            TerminalModeController, handle_edit_event};
use std::io::{self, BufRead, BufReader, Read, Write};

/// Device the editor reads keystrokes from (usually `stdin`).
pub type InputDevice = Box<dyn BufRead + Send>;

/// Device the editor draws on (usually `stdout`).
pub type OutputDevice = Box<dyn Write + Send>;

/// Error returned from [`LineEditor::read_line`]. Raw mode failures are not errors:
/// the editor falls back to line buffered input instead.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadlineError {
    /// Reading input or drawing on the terminal failed.
    #[error(transparent)]
    #[diagnostic(code(sqlsh_readline::readline::io))]
    IO(#[from] io::Error),
}

/// Outcomes of [`LineEditor::read_line`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ReadlineEvent {
    /// The user pressed Enter. The line ending isn't included.
    Line(String),

    /// The user pressed `Ctrl+C`.
    Interrupted,

    /// The input stream closed.
    EndOfInput,
}

/// How [`LineEditor::read_line`] gets its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Raw mode, byte at a time, with in-place editing and history navigation.
    Interactive,
    /// Raw mode couldn't be enabled (eg stdin is a pipe). Whole lines are read as they
    /// are, for the rest of the session.
    LineBuffered,
}

/// # Mental model and overview
///
/// A blocking replacement for [`std::io::BufRead::read_line`] with line editing. Each
/// call to [`Self::read_line()`]:
///
/// 1. Resets history navigation to the fresh line.
/// 2. Puts the terminal in raw mode with a [`RawModeGuard`].
/// 3. Loops: read one byte, decode it with an [`InputDecoder`], apply the resulting
///    event to the [`LineBuffer`] and [`History`], redraw.
/// 4. On Enter, `Ctrl+C`, or end of input, restores the terminal and returns a
///    [`ReadlineEvent`].
///
/// The terminal is restored on every exit path, including I/O errors and panics, since
/// the guard releases raw mode when it is dropped.
///
/// # Fallback
///
/// If raw mode can't be enabled the editor switches to [`EditorMode::LineBuffered`] for
/// the rest of the session: it writes the prompt, reads one newline terminated line, and
/// appends it to the history. This keeps the shell usable with piped input.
///
/// # Inputs and dependency injection
///
/// [`Self::with_devices()`] takes the terminal driver, the input device, and the output
/// device, so tests can run the editor against in-memory byte streams with
/// [`crate::TerminalDriverMock`] and [`crate::StdoutMock`]. [`Self::new()`] uses the
/// real terminal.
///
/// # History
///
/// Accepted lines are not added to the history automatically in raw mode. The caller
/// decides what is worth keeping and calls [`Self::add_history_entry()`].
#[allow(missing_debug_implementations)]
pub struct LineEditor<D: TerminalDriver = PlatformTerminalDriver> {
    terminal: TerminalModeController<D>,
    history: History,
    input_device: InputDevice,
    output_device: OutputDevice,
    config: LineEditorConfig,
    mode: EditorMode,
}

impl LineEditor<PlatformTerminalDriver> {
    /// Editor on the process's stdin and stdout.
    #[must_use]
    pub fn new(config: LineEditorConfig) -> Self {
        Self::with_devices(
            config,
            PlatformTerminalDriver::default(),
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }
}

impl<D: TerminalDriver> LineEditor<D> {
    #[must_use]
    pub fn with_devices(
        config: LineEditorConfig,
        driver: D,
        input_device: InputDevice,
        output_device: OutputDevice,
    ) -> Self {
        Self {
            terminal: TerminalModeController::new(driver),
            history: History::new(config.history_capacity),
            input_device,
            output_device,
            config,
            mode: EditorMode::Interactive,
        }
    }

    #[must_use]
    pub fn config(&self) -> LineEditorConfig { self.config }

    #[must_use]
    pub fn mode(&self) -> EditorMode { self.mode }

    /// False once the editor has fallen back to line buffered input.
    #[must_use]
    pub fn is_interactive(&self) -> bool { self.mode == EditorMode::Interactive }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }

    pub fn history_mut(&mut self) -> &mut History { &mut self.history }

    pub fn add_history_entry(&mut self, line: &str) { self.history.append(line); }

    /// Put the terminal back into its original mode. Only needed if the process is
    /// about to exit without dropping the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the original settings can't be applied.
    pub fn restore_terminal(&mut self) -> Result<(), TerminalError> {
        self.terminal.disable()
    }

    /// Show `prompt` and read one line.
    ///
    /// If the terminal can't be restored after a raw mode line, the line is still
    /// returned and the editor switches to [`EditorMode::LineBuffered`].
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::IO`] if reading input or drawing fails.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadlineEvent, ReadlineError> {
        self.history.reset_navigation();

        if self.mode == EditorMode::Interactive {
            match RawModeGuard::try_new(&mut self.terminal) {
                Ok(guard) => {
                    // On error the guard's drop restores the terminal.
                    let outcome = read_line_raw(
                        prompt,
                        self.config.buffer_capacity,
                        &mut self.history,
                        self.input_device.as_mut(),
                        self.output_device.as_mut(),
                    )?;
                    if let Err(err) = guard.release() {
                        tracing::warn!(
                            message = "Terminal restore failed, falling back to line buffered input",
                            error = %err
                        );
                        self.mode = EditorMode::LineBuffered;
                    }
                    return Ok(outcome);
                }
                Err(err) => {
                    tracing::warn!(
                        message = "Raw mode unavailable, falling back to line buffered input",
                        error = %err
                    );
                    self.mode = EditorMode::LineBuffered;
                }
            }
        }

        read_line_buffered(
            prompt,
            &mut self.history,
            self.input_device.as_mut(),
            self.output_device.as_mut(),
        )
    }
}

fn read_line_raw(
    prompt: &str,
    buffer_capacity: usize,
    history: &mut History,
    input_device: &mut (dyn BufRead + Send),
    output_device: &mut (dyn Write + Send),
) -> Result<ReadlineEvent, ReadlineError> {
    let mut line = LineBuffer::new(prompt, buffer_capacity);
    let mut decoder = InputDecoder::new();

    line.render(output_device)?;

    loop {
        let event = match read_byte(input_device) {
            Ok(Some(byte)) => match decoder.decode_byte(byte) {
                Some(event) => event,
                None => continue,
            },
            Ok(None) => decoder.decode_end_of_stream(),
            Err(err) if decoder.is_mid_sequence() => {
                tracing::trace!(message = "Read error inside escape sequence", error = %err);
                decoder.decode_read_error()
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(outcome) = handle_edit_event(&mut line, event, history, output_device)? {
            return Ok(outcome);
        }
    }
}

fn read_line_buffered(
    prompt: &str,
    history: &mut History,
    input_device: &mut (dyn BufRead + Send),
    output_device: &mut (dyn Write + Send),
) -> Result<ReadlineEvent, ReadlineError> {
    output_device.write_all(prompt.as_bytes())?;
    output_device.flush()?;

    let mut bytes = Vec::new();
    if input_device.read_until(ASCII_LF, &mut bytes)? == 0 {
        return Ok(ReadlineEvent::EndOfInput);
    }
    if bytes.last() == Some(&ASCII_LF) {
        bytes.pop();
        if bytes.last() == Some(&ASCII_CR) {
            bytes.pop();
        }
    }

    let line = String::from_utf8_lossy(&bytes).into_owned();
    if !line.trim().is_empty() {
        history.append(&line);
    }
    Ok(ReadlineEvent::Line(line))
}

/// Blocks until one byte arrives. [None] means the stream is closed.
fn read_byte(input_device: &mut (dyn BufRead + Send)) -> io::Result<Option<u8>> {
    let mut byte = [0_u8; 1];
    loop {
        match input_device.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DriverCall, DriverCallLog, StdoutMock, TerminalDriverMock};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn editor_with_input(
        input: &[u8],
        config: LineEditorConfig,
    ) -> (LineEditor<TerminalDriverMock>, DriverCallLog, StdoutMock) {
        let (driver, calls) = TerminalDriverMock::new();
        let stdout_mock = StdoutMock::new();
        let editor = LineEditor::with_devices(
            config,
            driver,
            Box::new(Cursor::new(input.to_vec())),
            Box::new(stdout_mock.clone()),
        );
        (editor, calls, stdout_mock)
    }

    /// Yields `bytes`, then fails every read.
    struct FailingReader {
        bytes: Vec<u8>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.bytes.is_empty() || buf.is_empty() {
                return Err(io::Error::other("device gone"));
            }
            buf[0] = self.bytes.remove(0);
            Ok(1)
        }
    }

    #[test]
    fn test_typed_line_is_returned() {
        let (mut editor, calls, _) =
            editor_with_input(b"select 1;\r", LineEditorConfig::default());

        let event = editor.read_line("sqlsh> ").unwrap();

        assert_eq!(event, ReadlineEvent::Line("select 1;".into()));
        assert!(editor.is_interactive());
        assert_eq!(
            calls.take(),
            vec![
                DriverCall::CurrentSettings,
                DriverCall::ApplyRaw,
                DriverCall::Restore
            ]
        );
    }

    #[test]
    fn test_raw_mode_lines_are_not_added_to_history() {
        let (mut editor, _, _) = editor_with_input(b"abc\r", LineEditorConfig::default());
        editor.read_line("> ").unwrap();
        assert!(editor.history().is_empty());
    }

    #[test]
    fn test_editing_with_arrows_and_backspace() {
        // Type "selct", move left twice, backspace "l" and retype "le", then Enter.
        let (mut editor, _, _) = editor_with_input(
            b"selct\x1b[D\x1b[D\x7fle\r",
            LineEditorConfig::default(),
        );
        assert_eq!(
            editor.read_line("> ").unwrap(),
            ReadlineEvent::Line("select".into())
        );
    }

    #[test]
    fn test_unrecognized_escape_sequences_do_not_reach_the_line() {
        let (mut editor, _, _) =
            editor_with_input(b"a\x1b[3~\x1b[1;5Cb\x1bOc\r", LineEditorConfig::default());
        // `ESC O` drops only its prefix, so `c` is typed.
        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line("abc".into()));
    }

    #[test]
    fn test_history_recall() {
        let (mut editor, _, _) =
            editor_with_input(b"\x1b[A\x1b[A\r", LineEditorConfig::default());
        editor.add_history_entry("select 1;");
        editor.add_history_entry("select 2;");

        assert_eq!(
            editor.read_line("> ").unwrap(),
            ReadlineEvent::Line("select 1;".into())
        );
    }

    #[test]
    fn test_navigation_resets_between_calls() {
        let (mut editor, _, _) =
            editor_with_input(b"\x1b[A\r\x1b[A\r", LineEditorConfig::default());
        editor.add_history_entry("one");
        editor.add_history_entry("two");

        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line("two".into()));
        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line("two".into()));
    }

    #[test]
    fn test_ctrl_c_interrupts_and_restores() {
        let (mut editor, calls, stdout_mock) =
            editor_with_input(b"drop\x03", LineEditorConfig::default());

        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Interrupted);
        assert!(calls.is_balanced());
        assert!(
            stdout_mock
                .get_copy_of_buffer_as_string()
                .ends_with("^C\r\n")
        );
    }

    #[test]
    fn test_end_of_input_restores() {
        let (mut editor, calls, _) = editor_with_input(b"", LineEditorConfig::default());

        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::EndOfInput);
        assert!(calls.is_balanced());
        assert_eq!(calls.count(DriverCall::Restore), 1);
    }

    #[test]
    fn test_end_of_input_inside_escape_sequence() {
        let (mut editor, calls, _) = editor_with_input(b"ab\x1b[", LineEditorConfig::default());

        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::EndOfInput);
        assert!(calls.is_balanced());
    }

    #[test]
    fn test_read_error_restores_terminal() {
        let (driver, calls) = TerminalDriverMock::new();
        let mut editor = LineEditor::with_devices(
            LineEditorConfig::default(),
            driver,
            Box::new(BufReader::with_capacity(
                1,
                FailingReader {
                    bytes: b"ab".to_vec(),
                },
            )),
            Box::new(StdoutMock::new()),
        );

        let result = editor.read_line("> ");

        assert!(matches!(result, Err(ReadlineError::IO(_))));
        assert!(calls.is_balanced());
    }

    #[test]
    fn test_read_error_inside_escape_sequence_is_ignored() {
        let (driver, calls) = TerminalDriverMock::new();
        let mut editor = LineEditor::with_devices(
            LineEditorConfig::default(),
            driver,
            Box::new(BufReader::with_capacity(
                1,
                FailingReader {
                    bytes: b"ab\x1b".to_vec(),
                },
            )),
            Box::new(StdoutMock::new()),
        );

        // The first error is absorbed by the decoder, the second one is reported.
        let result = editor.read_line("> ");

        assert!(matches!(result, Err(ReadlineError::IO(_))));
        assert!(calls.is_balanced());
    }

    #[test]
    fn test_buffer_full_drops_extra_keystrokes() {
        let (mut editor, _, _) = editor_with_input(
            b"abcdef\r",
            LineEditorConfig::default().with_buffer_capacity(5),
        );
        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line("abcde".into()));
    }

    #[test]
    fn test_failed_restore_falls_back_to_line_buffered() {
        let (mut editor, calls, _) =
            editor_with_input(b"x\ry\n", LineEditorConfig::default());
        calls.fail_next_restore();

        // The submitted line survives the failed restore.
        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line("x".into()));
        assert_eq!(editor.mode(), EditorMode::LineBuffered);

        // Raw mode is not attempted again.
        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line("y".into()));
        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::EndOfInput);

        // The guard's drop retried the restore and succeeded.
        assert_eq!(
            calls.take(),
            vec![
                DriverCall::CurrentSettings,
                DriverCall::ApplyRaw,
                DriverCall::Restore,
                DriverCall::Restore
            ]
        );
        assert!(editor.restore_terminal().is_ok());
        assert!(calls.take().is_empty());
    }

    #[test]
    fn test_failed_restore_after_interrupt_keeps_outcome() {
        let (mut editor, calls, _) = editor_with_input(b"ab\x03", LineEditorConfig::default());
        calls.fail_next_restore();

        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Interrupted);
        assert!(!editor.is_interactive());
    }

    #[test]
    fn test_fallback_when_not_a_terminal() {
        let (driver, calls) = TerminalDriverMock::not_a_terminal();
        let stdout_mock = StdoutMock::new();
        let mut editor = LineEditor::with_devices(
            LineEditorConfig::default(),
            driver,
            Box::new(Cursor::new(b"select 1;\nselect 2;\r\n".to_vec())),
            Box::new(stdout_mock.clone()),
        );

        assert_eq!(
            editor.read_line("sqlsh> ").unwrap(),
            ReadlineEvent::Line("select 1;".into())
        );
        assert!(!editor.is_interactive());
        assert_eq!(editor.mode(), EditorMode::LineBuffered);

        assert_eq!(
            editor.read_line("sqlsh> ").unwrap(),
            ReadlineEvent::Line("select 2;".into())
        );
        assert_eq!(editor.read_line("sqlsh> ").unwrap(), ReadlineEvent::EndOfInput);

        // Raw mode was only attempted once, and never applied.
        assert_eq!(calls.take(), vec![DriverCall::CurrentSettings]);

        // Fallback lines go straight into the history.
        let entries: Vec<&str> = editor.history().entries().collect();
        assert_eq!(entries, vec!["select 1;", "select 2;"]);

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "sqlsh> sqlsh> sqlsh> "
        );
    }

    #[test]
    fn test_fallback_keeps_escape_bytes_verbatim() {
        let (driver, _) = TerminalDriverMock::not_a_terminal();
        let mut editor = LineEditor::with_devices(
            LineEditorConfig::default(),
            driver,
            Box::new(Cursor::new(b"a\x1b[Ab".to_vec())),
            Box::new(StdoutMock::new()),
        );

        // No decoding in the fallback, and a missing final newline is fine.
        assert_eq!(
            editor.read_line("> ").unwrap(),
            ReadlineEvent::Line("a\x1b[Ab".into())
        );
    }

    #[test]
    fn test_fallback_skips_blank_lines_in_history() {
        let (driver, _) = TerminalDriverMock::not_a_terminal();
        let mut editor = LineEditor::with_devices(
            LineEditorConfig::default(),
            driver,
            Box::new(Cursor::new(b"   \n\nselect 1;\n".to_vec())),
            Box::new(StdoutMock::new()),
        );

        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line("   ".into()));
        assert_eq!(editor.read_line("> ").unwrap(), ReadlineEvent::Line(String::new()));
        assert_eq!(
            editor.read_line("> ").unwrap(),
            ReadlineEvent::Line("select 1;".into())
        );

        let entries: Vec<&str> = editor.history().entries().collect();
        assert_eq!(entries, vec!["select 1;"]);
    }

    #[test]
    fn test_restore_terminal_when_idle_is_noop() {
        let (mut editor, calls, _) = editor_with_input(b"", LineEditorConfig::default());
        editor.restore_terminal().unwrap();
        assert!(calls.take().is_empty());
    }
}
