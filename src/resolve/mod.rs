//! Single-key lookup with templating and an embedded fallback.
//!
//! ## Module Structure
//!
//! - `escape`: Normalizes literal escape sequences in translation text
//! - `fallback`: Embedded per-language tables used when a file is unusable
//! - `template`: `{{.Field}}` substitution

pub mod escape;
pub mod fallback;
pub mod template;

use std::{borrow::Cow, fs, path::Path};

use serde_json::{Map, Value};
use tracing::{debug, warn};

pub use escape::unescape;
pub use fallback::FallbackTable;

use crate::core::{Node, Tree, key_path};
use crate::error::ResolveError;

/// Load a translation file, falling back to the embedded table.
///
/// When the file is missing or malformed, its stem (`en` for `locales/en.json`)
/// selects an entry of `fallback`. Only if that also fails is the original
/// open or decode error returned.
pub fn load(path: &Path, fallback: &FallbackTable) -> Result<Tree, ResolveError> {
    let err = match fs::read(path) {
        Ok(content) => match serde_json::from_slice::<Tree>(&content) {
            Ok(tree) => {
                debug!(path = %path.display(), "translations loaded");
                return Ok(tree);
            }
            Err(source) => ResolveError::Decode {
                path: path.to_path_buf(),
                source,
            },
        },
        Err(source) => ResolveError::Open {
            path: path.to_path_buf(),
            source,
        },
    };

    let embedded = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|name| fallback.tree_for(name));

    match embedded {
        Some(tree) => {
            warn!(path = %path.display(), error = %err, "using embedded translations");
            Ok(tree)
        }
        None => Err(err),
    }
}

/// Resolve `key` in `tree` to display text, or `fallback` if there is none.
///
/// Only string values resolve; a missing path, `null`, a number or a nested
/// object all yield `fallback`. With `data`, the text is rendered as a
/// template first; a template error leaves the text unrendered. Escape
/// sequences are normalized last.
pub fn resolve(tree: &Tree, key: &str, data: Option<&Map<String, Value>>, fallback: &str) -> String {
    let Some(text) = lookup(tree, key).and_then(Node::as_str) else {
        return fallback.to_string();
    };

    let rendered = match data {
        Some(data) => match template::render(text, data) {
            Ok(out) => Cow::Owned(out),
            Err(err) => {
                debug!(key, error = %err, "template rendering failed");
                Cow::Borrowed(text)
            }
        },
        None => Cow::Borrowed(text),
    };

    unescape(&rendered).into_owned()
}

/// Look up `key` as a literal top-level field, without splitting on dots.
pub fn lookup_literal(tree: &Tree, key: &str) -> Option<String> {
    tree.get(key)
        .and_then(Node::as_str)
        .map(|text| unescape(text).into_owned())
}

fn lookup<'a>(tree: &'a Tree, key: &str) -> Option<&'a Node> {
    let mut parts = key_path::segments(key).into_iter();
    let mut current = tree.get(parts.next()?)?;
    for part in parts {
        current = current.as_branch()?.get(part)?;
    }
    Some(current)
}
