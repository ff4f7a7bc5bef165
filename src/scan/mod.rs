mod filter;
mod options;
mod walk;

pub use filter::{EntryFilter, IgnoreReason, Verdict};
pub use options::{
    DEFAULT_IGNORED_DIR_NAMES, DEFAULT_IGNORED_EXTENSIONS, DEFAULT_IGNORED_FILE_NAMES,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE, ScanOptions,
};
pub use walk::scan;
