// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{ops::Deref,
          path::{Path, PathBuf}};

#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The temp directory cannot be created due to insufficient permissions
/// - The file system is full
/// - I/O errors occur during directory creation
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("sqlsh_{:016x}", rand::random::<u64>()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

/// Allow access to the inner [`std::path::Path`] easily when using other APIs.
impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}
