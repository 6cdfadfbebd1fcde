// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// The database collaborator. Receives complete statements (terminated by `;`) and
/// returns the text to show the user.
pub trait StatementExecutor {
    /// # Errors
    ///
    /// Returns an error if the statement fails. The shell reports it and keeps going.
    fn execute(&mut self, statement: &str) -> miette::Result<String>;
}

/// Stands in for a database engine: reports that nothing was executed.
#[derive(Debug, Default, Clone)]
pub struct EchoExecutor {
    pub database: Option<PathBuf>,
}

impl EchoExecutor {
    #[must_use]
    pub fn new(database: Option<PathBuf>) -> Self { Self { database } }
}

impl StatementExecutor for EchoExecutor {
    fn execute(&mut self, statement: &str) -> miette::Result<String> {
        tracing::debug!(message = "Statement received", statement, database = ?self.database);
        Ok(match &self.database {
            Some(path) => format!(
                "No database engine attached to {}. Statement not executed:\n{statement}",
                path.display()
            ),
            None => format!("No database attached. Statement not executed:\n{statement}"),
        })
    }
}
