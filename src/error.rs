//! Error types for the catalog engine and the resolver.
//!
//! The CLI wraps these in `anyhow` with extra context; the library keeps them
//! typed so callers can tell a key conflict apart from an I/O failure.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("creating backup {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serializing {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("key '{key}' already exists in {}", .path.display())]
    KeyExists { key: String, path: PathBuf },

    #[error("cannot add nested key '{key}': '{blocked_at}' is not an object")]
    PathBlocked { key: String, blocked_at: String },

    #[error("scanning {}: {source}", .root.display())]
    ScanWalk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("scanning {}: reading {}: {source}", .root.display(), .path.display())]
    ScanRead {
        root: PathBuf,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// True for the user errors raised by `add_translation` when the target key
    /// cannot be written.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CatalogError::KeyExists { .. } | CatalogError::PathBlocked { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("decode {}: failed to parse JSON: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {0}")]
    Unclosed(usize),

    #[error("unsupported action '{{{{{0}}}}}'")]
    UnsupportedAction(String),
}
