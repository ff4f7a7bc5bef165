use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    files: HashSet<PathBuf>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        self.set_io_error(dir, io::ErrorKind::Other, message);
    }

    pub fn set_permission_denied(&self, dir: impl Into<PathBuf>) {
        self.set_io_error(dir, io::ErrorKind::PermissionDenied, "Permission denied");
    }

    pub fn set_io_error(
        &self,
        dir: impl Into<PathBuf>,
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(kind, message.into()));
    }

    /// Register a path that `entry_kind` reports as a regular file.
    pub fn set_file(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(path.into());
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind, message)) => Err(io::Error::new(*kind, message.clone()).into()),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let inner = self.inner.lock().expect("mock fs lock");
        if inner.responses.contains_key(path) {
            Ok(EntryKind::Directory)
        } else if inner.files.contains(path) {
            Ok(EntryKind::File)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory").into())
        }
    }
}
