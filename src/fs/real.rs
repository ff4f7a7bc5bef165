use anyhow::Result;
use async_trait::async_trait;
use std::fs::FileType;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::debug!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                        continue;
                    }
                };
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().into_owned();

                // DirEntry::file_type and DirEntry::metadata do not traverse symlinks.
                // An entry of unknown type is reported without a size.
                let kind = match entry.file_type() {
                    Ok(file_type) => kind_of(file_type),
                    Err(err) => {
                        tracing::debug!(path = %path.display(), error = %err, "file type unavailable");
                        entries.push(FsEntry {
                            path,
                            name,
                            kind: EntryKind::Other,
                            size: None,
                        });
                        continue;
                    }
                };
                let size = match kind {
                    EntryKind::Directory => None,
                    _ => entry.metadata().ok().map(|metadata| metadata.len()),
                };

                entries.push(FsEntry {
                    path,
                    name,
                    kind,
                    size,
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(kind_of(metadata.file_type()))
    }
}

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
