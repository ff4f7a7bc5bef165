use std::cmp::Ordering;
use std::io;
use std::path::Path;

use crate::error::ScanError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FileNode, FsEntry, ScanReport, ScanStats};

use super::ScanOptions;
use super::filter::{EntryFilter, Verdict};

/// Scan `root` and return its filtered children with the scan counters.
///
/// The root must be an existing directory; anything else fails before
/// traversal starts. Problems below the root never fail the scan: an
/// unreadable directory simply ends up with no children.
pub async fn scan<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: &ScanOptions,
) -> Result<ScanReport, ScanError> {
    let kind = fs.entry_kind(root).await.map_err(|err| match err.downcast::<io::Error>() {
        Ok(io_err) => ScanError::io(root, io_err),
        Err(other) => ScanError::io(root, io::Error::other(other.to_string())),
    })?;
    if kind != EntryKind::Directory {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let filter = EntryFilter::new(options);
    let mut stats = ScanStats::default();
    let tree = walk_dir_internal(fs, root, options, &filter, &mut stats, 0).await;

    tracing::info!(
        root = %root.display(),
        scanned = stats.scanned,
        ignored = stats.ignored,
        unreadable = stats.unreadable,
        "scan complete"
    );

    Ok(ScanReport { tree, stats })
}

/// Build the filtered children of `dir`, whose entries sit at `current_depth`.
async fn walk_dir_internal<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &ScanOptions,
    filter: &EntryFilter<'_>,
    stats: &mut ScanStats,
    current_depth: usize,
) -> Vec<FileNode> {
    if current_depth > options.max_depth {
        return Vec::new();
    }

    let mut entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            let permission_denied = err
                .downcast_ref::<io::Error>()
                .is_some_and(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied);
            if permission_denied {
                tracing::debug!(dir = %dir.display(), "permission denied, skipping subtree");
            } else {
                tracing::warn!(dir = %dir.display(), error = %err, "failed to read directory");
            }
            return Vec::new();
        }
    };
    tracing::debug!(dir = %dir.display(), depth = current_depth, entries = entries.len(), "listed directory");

    entries.sort_by(compare_entries);

    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        match filter.check(&entry) {
            Verdict::Keep => {}
            Verdict::Ignored(reason) => {
                tracing::trace!(path = %entry.path.display(), ?reason, "ignored");
                stats.ignored += 1;
                continue;
            }
            Verdict::Unreadable => {
                tracing::trace!(path = %entry.path.display(), "size unavailable");
                stats.unreadable += 1;
                continue;
            }
        }

        // Symlinks land in the file branch, so they are never descended into.
        if entry.is_dir() {
            let grandchildren = Box::pin(walk_dir_internal(
                fs,
                &entry.path,
                options,
                filter,
                stats,
                current_depth + 1,
            ))
            .await;
            // Empty folders are kept so the project layout stays visible.
            children.push(FileNode::folder(entry.name, grandchildren));
        } else {
            children.push(FileNode::file(entry.name));
        }
        stats.scanned += 1;
    }

    children
}

/// Directories first, then case-insensitive name, then raw name for a total order.
fn compare_entries(a: &FsEntry, b: &FsEntry) -> Ordering {
    (!a.is_dir())
        .cmp(&!b.is_dir())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
