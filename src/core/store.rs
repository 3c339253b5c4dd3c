//! Multi-language catalog store.
//!
//! Loads one catalog per language, compares them, canonicalizes them on disk
//! and inserts new keys into single files.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::{
    flatten::{FlatKeySet, flatten_tree},
    key_path,
    node::{Node, Tree, display_value, sort_tree},
    persist,
    scanner::{UsageReport, UsageScanner},
};
use crate::error::CatalogError;

/// A key that is absent or `null` in at least one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub key: String,
    /// Display value for every loaded language; `"null"` where missing.
    pub translations: BTreeMap<String, String>,
}

/// Result of canonicalizing one language's file.
#[derive(Debug)]
pub struct SortOutcome {
    pub language: String,
    pub path: PathBuf,
    pub backup: Option<PathBuf>,
    pub result: Result<(), CatalogError>,
}

#[derive(Debug)]
struct Catalog {
    path: PathBuf,
    tree: Tree,
}

impl Catalog {
    /// Copy the file as it currently is on disk.
    fn backup(&self) -> Result<PathBuf, CatalogError> {
        let content = persist::read_bytes(&self.path)?;
        persist::write_backup(&self.path, &content)
    }

    fn sort_and_write(&mut self) -> Result<(), CatalogError> {
        sort_tree(&mut self.tree);
        persist::write_tree(&self.path, &self.tree)
    }
}

#[derive(Debug)]
pub struct CatalogStore {
    catalogs: BTreeMap<String, Catalog>,
}

impl CatalogStore {
    /// Load every file in `files`, keyed by language.
    ///
    /// Fails on the first file that cannot be read or parsed.
    pub fn load(files: BTreeMap<String, PathBuf>) -> Result<Self, CatalogError> {
        let mut catalogs = BTreeMap::new();
        for (language, path) in files {
            let tree = persist::load_tree(&path)?;
            debug!(language = %language, path = %path.display(), "catalog loaded");
            catalogs.insert(language, Catalog { path, tree });
        }
        Ok(Self { catalogs })
    }

    /// Loaded languages in lexicographic order.
    pub fn languages(&self) -> Vec<&str> {
        self.catalogs.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    pub fn tree(&self, language: &str) -> Option<&Tree> {
        self.catalogs.get(language).map(|c| &c.tree)
    }

    fn flattened(&self) -> BTreeMap<&str, FlatKeySet<'_>> {
        self.catalogs
            .iter()
            .map(|(language, catalog)| (language.as_str(), flatten_tree(&catalog.tree)))
            .collect()
    }

    /// Union of all dotted keys across languages, sorted and deduplicated.
    pub fn all_keys(&self) -> Vec<String> {
        let keys: BTreeSet<String> = self
            .catalogs
            .values()
            .flat_map(|catalog| flatten_tree(&catalog.tree).into_keys())
            .collect();
        keys.into_iter().collect()
    }

    /// Keys missing (absent or `null`) in at least one language.
    pub fn check_missing(&self) -> Vec<MissingEntry> {
        let flattened = self.flattened();
        let mut missing = Vec::new();

        for key in self.all_keys() {
            let mut translations = BTreeMap::new();
            let mut has_missing = false;

            for (language, flat) in &flattened {
                let display = match flat.get(&key) {
                    Some(value) if !value.is_null() => display_value(value),
                    _ => {
                        has_missing = true;
                        "null".to_string()
                    }
                };
                translations.insert(language.to_string(), display);
            }

            if has_missing {
                missing.push(MissingEntry { key, translations });
            }
        }

        missing
    }

    /// Sort every catalog and write it back, optionally backing up first.
    ///
    /// Languages are processed independently; a failure in one does not stop
    /// or undo the others.
    pub fn sort_and_save(&mut self, create_backup: bool) -> Vec<SortOutcome> {
        let mut outcomes = Vec::with_capacity(self.catalogs.len());

        for (language, catalog) in &mut self.catalogs {
            let (backup, result) = match create_backup.then(|| catalog.backup()).transpose() {
                Ok(backup) => (backup, catalog.sort_and_write()),
                Err(err) => (None, Err(err)),
            };

            match &result {
                Ok(()) => {
                    info!(language = %language, path = %catalog.path.display(), "sorted and saved")
                }
                Err(err) => warn!(language = %language, error = %err, "sort failed"),
            }

            outcomes.push(SortOutcome {
                language: language.clone(),
                path: catalog.path.clone(),
                backup,
                result,
            });
        }

        outcomes
    }

    /// Keys that never appear in any file scanned by `scanner` under `roots`.
    pub fn find_unused<P: AsRef<Path>>(
        &self,
        scanner: &UsageScanner,
        roots: &[P],
    ) -> Result<Vec<String>, CatalogError> {
        scanner.find_unused(&self.all_keys(), roots)
    }

    /// Like [`find_unused`](Self::find_unused), also counting scanned files.
    pub fn scan_usage<P: AsRef<Path>>(
        &self,
        scanner: &UsageScanner,
        roots: &[P],
    ) -> Result<UsageReport, CatalogError> {
        scanner.scan(&self.all_keys(), roots)
    }
}

/// Insert `key = value` into the catalog file at `path`.
///
/// A backup of the current file is written before anything else, even if the
/// insertion is then rejected. Returns the backup path.
pub fn add_translation(path: &Path, key: &str, value: &str) -> Result<PathBuf, CatalogError> {
    let content = persist::read_bytes(path)?;
    let backup = persist::write_backup(path, &content)?;

    let mut tree = persist::parse_tree(path, &content)?;

    if key_exists(&tree, key) {
        return Err(CatalogError::KeyExists {
            key: key.to_string(),
            path: path.to_path_buf(),
        });
    }

    insert_nested(&mut tree, key, value)?;
    sort_tree(&mut tree);
    persist::write_tree(path, &tree)?;

    info!(key, path = %path.display(), "translation added");
    Ok(backup)
}

/// Whether the full dotted path of `key` resolves to an existing node.
///
/// A path blocked by a non-object before its last segment counts as not
/// existing; `insert_nested` reports that case separately.
pub fn key_exists(tree: &Tree, key: &str) -> bool {
    let parts = key_path::split(key);
    let mut current = tree;

    for (i, part) in parts.iter().enumerate() {
        let Some(node) = current.get(*part) else {
            return false;
        };
        if i == parts.len() - 1 {
            return true;
        }
        match node.as_branch() {
            Some(nested) => current = nested,
            None => return false,
        }
    }
    false
}

/// Set `key` to `value`, creating intermediate objects as needed.
///
/// Fails if an intermediate segment already holds a non-object value. An
/// existing leaf at the final segment is overwritten.
pub fn insert_nested(tree: &mut Tree, key: &str, value: &str) -> Result<(), CatalogError> {
    let parts = key_path::split(key);
    let Some((last, intermediate)) = parts.split_last() else {
        return Ok(());
    };

    let mut current = tree;
    for (i, part) in intermediate.iter().enumerate() {
        let node = current
            .entry(part.to_string())
            .or_insert_with(Node::empty_branch);
        current = node
            .as_branch_mut()
            .ok_or_else(|| CatalogError::PathBlocked {
                key: key.to_string(),
                blocked_at: parts[..=i].join("."),
            })?;
    }

    current.insert(last.to_string(), Node::string(value));
    Ok(())
}
