//! Reading, writing and backing up catalog files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

use super::node::Tree;
use crate::error::CatalogError;

/// Marker placed between the original file name and the backup timestamp.
pub const BACKUP_MARKER: &str = ".backup.";

/// Timestamp layout of backup suffixes, e.g. `20240131-235959`.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, CatalogError> {
    fs::read(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_tree(path: &Path, content: &[u8]) -> Result<Tree, CatalogError> {
    serde_json::from_slice(content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode a catalog file.
pub fn load_tree(path: &Path) -> Result<Tree, CatalogError> {
    let content = read_bytes(path)?;
    let tree = parse_tree(path, &content)?;
    debug!(path = %path.display(), fields = tree.len(), "loaded catalog");
    Ok(tree)
}

/// Path of the backup for `path` taken at `at`.
pub fn backup_path<Tz: TimeZone>(path: &Path, at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_MARKER);
    name.push(at.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}

/// Write `content` next to `path` as a timestamped backup and return its path.
pub fn write_backup(path: &Path, content: &[u8]) -> Result<PathBuf, CatalogError> {
    let backup = backup_path(path, &Local::now());
    fs::write(&backup, content).map_err(|source| CatalogError::Backup {
        path: backup.clone(),
        source,
    })?;
    info!(backup = %backup.display(), "backup created");
    Ok(backup)
}

/// Serialize a tree with two-space indentation and a trailing newline.
pub fn render_tree(path: &Path, tree: &Tree) -> Result<String, CatalogError> {
    let mut content =
        serde_json::to_string_pretty(tree).map_err(|source| CatalogError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

pub fn write_tree(path: &Path, tree: &Tree) -> Result<(), CatalogError> {
    let content = render_tree(path, tree)?;
    fs::write(path, content).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "catalog written");
    Ok(())
}
