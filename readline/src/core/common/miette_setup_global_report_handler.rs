// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customizes how [miette](https://docs.rs/miette/latest/miette/index.html) displays a
//! [`miette::Report`] when `main() -> miette::Result<_>` errors out.
//!
//! - The global default implementation of the [`ReportHandler` trait](https://docs.rs/miette/latest/miette/trait.ReportHandler.html)
//!   is done by [`MietteHandler` struct](https://docs.rs/miette/latest/miette/struct.MietteHandler.html).
//! - [`miette::set_hook`] registers a closure that builds the handler. The closure only
//!   runs when a report is actually displayed, so the terminal width is measured at
//!   that point and not at startup.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback width when stderr is not attached to a terminal.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
/// `footer` is shown under every report, eg a hint on where to get help.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| usize::from(columns));
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
