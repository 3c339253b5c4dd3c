//! Source tree scan for translation key usage.
//!
//! Usage is plain substring containment of the dotted key in the file text.
//! Keys built at runtime are reported unused, and keys that only appear in
//! comments count as used.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::CatalogError;

pub const DEFAULT_EXTENSIONS: &[&str] = &[".vue", ".ts", ".js"];

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git"];

#[derive(Debug, Clone)]
pub struct UsageScanner {
    /// File name suffixes that are inspected, e.g. `.ts`.
    extensions: Vec<String>,
    /// Directory names skipped together with their subtrees.
    excluded_dirs: Vec<String>,
    /// Files whose full path matches one of these never contribute usage.
    ignores: Vec<Pattern>,
}

impl Default for UsageScanner {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignores: Vec::new(),
        }
    }
}

/// Outcome of a scan across all roots.
#[derive(Debug, Default)]
pub struct UsageReport {
    pub unused: Vec<String>,
    pub files_scanned: usize,
}

impl UsageScanner {
    pub fn new(extensions: Vec<String>, excluded_dirs: Vec<String>, ignores: Vec<Pattern>) -> Self {
        Self {
            extensions,
            excluded_dirs,
            ignores,
        }
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.excluded_dirs.iter().any(|d| d == name))
    }

    fn is_scannable(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
            && !self.ignores.iter().any(|p| p.matches(&path_str))
    }

    /// Keys from `keys` that appear in no scanned file under any of `roots`.
    pub fn find_unused<P: AsRef<Path>>(
        &self,
        keys: &[String],
        roots: &[P],
    ) -> Result<Vec<String>, CatalogError> {
        self.scan(keys, roots).map(|report| report.unused)
    }

    /// Scan `roots` and report which of `keys` were never seen.
    ///
    /// Any traversal or read error aborts the whole scan.
    pub fn scan<P: AsRef<Path>>(
        &self,
        keys: &[String],
        roots: &[P],
    ) -> Result<UsageReport, CatalogError> {
        let mut used: HashSet<&str> = HashSet::new();
        let mut files_scanned = 0;

        for root in roots {
            let root = root.as_ref();
            let walker = WalkDir::new(root)
                .into_iter()
                .filter_entry(|entry| !self.is_excluded_dir(entry));

            for entry in walker {
                let entry = entry.map_err(|source| CatalogError::ScanWalk {
                    root: root.to_path_buf(),
                    source,
                })?;
                let path = entry.path();

                if entry.file_type().is_dir() || !self.is_scannable(path) {
                    continue;
                }

                let content = read_source(root, path)?;
                files_scanned += 1;

                for key in keys {
                    if content.contains(key.as_str()) {
                        used.insert(key.as_str());
                    }
                }
            }
            debug!(root = %root.display(), files_scanned, "scanned root");
        }

        let unused = keys
            .iter()
            .filter(|key| !used.contains(key.as_str()))
            .cloned()
            .collect();

        Ok(UsageReport {
            unused,
            files_scanned,
        })
    }
}

fn read_source(root: &Path, path: &Path) -> Result<String, CatalogError> {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(|source| CatalogError::ScanRead {
            root: PathBuf::from(root),
            path: path.to_path_buf(),
            source,
        })
}
