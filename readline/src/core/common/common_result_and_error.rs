// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [miette::Result] and [miette::Report], which
/// are [std::error::Error] wrappers. Used at the edges (shell `main`, logging setup).
/// The editor itself returns typed errors, see [`crate::ReadlineError`].
pub type CommonResult<T> = miette::Result<T>;

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block.
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}
