// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use sqlsh::{CLIArg, EchoExecutor, Repl};
use sqlsh_readline::{CommonResult, LineEditor, core::log,
                     setup_default_miette_global_report_handler, throws};
use std::io::{self, IsTerminal};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler("Run `sqlsh --help` for usage.");

        let cli_arg = CLIArg::parse();

        log::init(cli_arg.tracing_config())?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

        let editor = LineEditor::new(cli_arg.editor_config());
        let executor = EchoExecutor::new(cli_arg.database.clone());
        let mut repl = Repl::new(editor, Box::new(executor), Box::new(io::stdout()))
            .with_prompt(cli_arg.global_options.prompt.clone())
            .with_history_file(cli_arg.history_file_policy());

        if io::stdin().is_terminal() {
            repl.print_welcome()?;
        }

        let result = repl.run();

        // The editor restores the terminal after every line. This covers an early exit
        // from the middle of one.
        if let Err(err) = repl.editor_mut().restore_terminal() {
            tracing::warn!(message = "Could not restore terminal", error = %err);
        }

        tracing::debug!(message = "Stop logging...");
        result?;
    })
}
