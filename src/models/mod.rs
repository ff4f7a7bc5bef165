mod entry;
mod tree;

pub use entry::{EntryKind, FsEntry};
pub use tree::{FileNode, NodeKind, ScanReport, ScanStats};
