use std::collections::BTreeSet;

pub const DEFAULT_MAX_DEPTH: usize = 5;

/// 100 KiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024;

pub const DEFAULT_IGNORED_DIR_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".vscode",
    "dist",
    "build",
    "__pycache__",
    "coverage",
    ".venv",
    "venv",
];

pub const DEFAULT_IGNORED_FILE_NAMES: &[&str] =
    &["package-lock.json", "yarn.lock", ".DS_Store", "pnpm-lock.yaml"];

pub const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".exe", ".pyc", ".pdf", ".zip", ".tar", ".gz", ".ico", ".svg",
    ".mp4", ".mp3", ".wav", ".bin", ".dll",
];

/// Bounds and ignore sets for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deepest level that is listed; the root's direct children are level 0.
    pub max_depth: usize,
    /// Files larger than this many bytes are ignored.
    pub max_file_size: u64,
    /// Exact names skipped wherever they appear.
    pub ignored_dir_names: BTreeSet<String>,
    /// Exact names skipped wherever they appear.
    pub ignored_file_names: BTreeSet<String>,
    /// Name suffixes (usually `.ext`) skipped for non-directories, matched case-insensitively.
    pub ignored_extensions: BTreeSet<String>,
}

impl ScanOptions {
    /// Options with the default bounds but no ignore rules at all.
    pub fn unfiltered() -> Self {
        Self {
            ignored_dir_names: BTreeSet::new(),
            ignored_file_names: BTreeSet::new(),
            ignored_extensions: BTreeSet::new(),
            ..Self::default()
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            ignored_dir_names: to_set(DEFAULT_IGNORED_DIR_NAMES),
            ignored_file_names: to_set(DEFAULT_IGNORED_FILE_NAMES),
            ignored_extensions: to_set(DEFAULT_IGNORED_EXTENSIONS),
        }
    }
}

fn to_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}
