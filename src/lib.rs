//! Bounded, filtered snapshots of a project directory.
//!
//! [`scan`] walks a root directory depth-first, drops entries matching the
//! configured ignore rules or size limit, and returns the surviving entries
//! as a sorted tree together with scan counters.

pub mod error;
pub mod fs;
pub mod models;
pub mod render;
pub mod scan;

pub use error::ScanError;
pub use fs::{FileSystem, RealFileSystem};
pub use models::{FileNode, NodeKind, ScanReport, ScanStats};
pub use scan::{ScanOptions, scan};
