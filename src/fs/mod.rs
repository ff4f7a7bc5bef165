mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the entries of `dir` without following symbolic links.
    /// Failures carry the underlying `std::io::Error`.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Kind of `path` after following symbolic links. Used to validate a scan root.
    async fn entry_kind(&self, path: &Path) -> Result<EntryKind>;
}
