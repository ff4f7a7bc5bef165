use std::collections::BTreeSet;

use crate::models::FsEntry;

use super::ScanOptions;

/// Why an entry was left out of the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Keep,
    /// Excluded by policy; counted as ignored.
    Ignored(IgnoreReason),
    /// Size could not be determined; dropped without counting as ignored.
    Unreadable,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreReason {
    Name,
    Extension,
    Oversize,
}

/// Ignore rules prepared once per scan.
///
/// Checks run in a fixed order and the first match wins: ignored name,
/// ignored extension, then the size limit. Directories only go through the
/// name check.
pub struct EntryFilter<'a> {
    dir_names: &'a BTreeSet<String>,
    file_names: &'a BTreeSet<String>,
    /// Lowercased suffixes.
    extensions: Vec<String>,
    max_file_size: u64,
}

impl<'a> EntryFilter<'a> {
    pub fn new(options: &'a ScanOptions) -> Self {
        Self {
            dir_names: &options.ignored_dir_names,
            file_names: &options.ignored_file_names,
            extensions: options
                .ignored_extensions
                .iter()
                .filter(|ext| !ext.is_empty())
                .map(|ext| ext.to_lowercase())
                .collect(),
            max_file_size: options.max_file_size,
        }
    }

    pub fn check(&self, entry: &FsEntry) -> Verdict {
        if self.dir_names.contains(&entry.name) || self.file_names.contains(&entry.name) {
            return Verdict::Ignored(IgnoreReason::Name);
        }

        if entry.is_dir() {
            return Verdict::Keep;
        }

        let lower = entry.name.to_lowercase();
        if self.extensions.iter().any(|ext| lower.ends_with(ext.as_str())) {
            return Verdict::Ignored(IgnoreReason::Extension);
        }

        match entry.size {
            Some(size) if size > self.max_file_size => Verdict::Ignored(IgnoreReason::Oversize),
            Some(_) => Verdict::Keep,
            None => Verdict::Unreadable,
        }
    }
}
