use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use projscan::ScanOptions;
use projscan::scan::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Json,
    Tree,
}

#[derive(Parser, Debug)]
#[command(name = "projscan")]
#[command(about = "Snapshot a project's directory structure as a filtered tree", long_about = None)]
pub struct Cli {
    /// Project root to scan (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Deepest directory level to list; the root's entries are level 0
    #[arg(short = 'L', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Skip files larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Additional directory name to ignore (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dirs: Vec<String>,

    /// Additional file name to ignore (repeatable)
    #[arg(long = "ignore-file", value_name = "NAME")]
    pub ignore_files: Vec<String>,

    /// Additional file suffix to ignore, e.g. ".log" (repeatable)
    #[arg(long = "ignore-ext", value_name = "SUFFIX")]
    pub ignore_exts: Vec<String>,

    /// Start from empty ignore lists instead of the built-in ones
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        let mut options = if self.no_default_ignores {
            ScanOptions::unfiltered()
        } else {
            ScanOptions::default()
        };
        options.max_depth = self.max_depth;
        options.max_file_size = self.max_file_size;
        options
            .ignored_dir_names
            .extend(self.ignore_dirs.iter().cloned());
        options
            .ignored_file_names
            .extend(self.ignore_files.iter().cloned());
        options
            .ignored_extensions
            .extend(self.ignore_exts.iter().cloned());
        options
    }
}
