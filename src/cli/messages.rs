//! The tool's own user-facing messages.
//!
//! Messages for the selected language come from the first `<dir>/<lang>.json`
//! found under the configured message directories, or from the embedded table
//! when none exists. English from the embedded table backs up any key the
//! selected language lacks.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::Config;
use crate::core::Tree;
use crate::resolve::{self, FallbackTable, lookup_literal, template};

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Default)]
pub struct Messages {
    selected: Option<Tree>,
    default: Option<Tree>,
}

impl Messages {
    pub fn load(config: &Config, base: &Path, lang: &str, table: &FallbackTable) -> Self {
        let selected = config
            .message_candidates(base, lang)
            .into_iter()
            .find(|path| path.is_file())
            .and_then(|path| match resolve::load(&path, table) {
                Ok(tree) => Some(tree),
                Err(err) => {
                    debug!(error = %err, "message file unusable");
                    None
                }
            })
            .or_else(|| table.tree_for(lang));

        Self {
            selected,
            default: table.tree_for(DEFAULT_LANGUAGE),
        }
    }

    /// Text for `key` without template data.
    pub fn text(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Text for `key` rendered with `data`, which should be a JSON object.
    pub fn format(&self, key: &str, data: &Value) -> String {
        self.lookup(key, data.as_object())
    }

    /// Escapes in the message itself are normalized before rendering, so
    /// substituted values are printed exactly as given.
    fn lookup(&self, key: &str, data: Option<&Map<String, Value>>) -> String {
        let Some(text) = self.raw_text(key) else {
            return key.to_string();
        };
        match data {
            Some(data) => template::render(&text, data).unwrap_or(text),
            None => text,
        }
    }

    fn raw_text(&self, key: &str) -> Option<String> {
        [&self.selected, &self.default]
            .into_iter()
            .flatten()
            .find_map(|tree| {
                let text = resolve::resolve(tree, key, None, "");
                if text.is_empty() {
                    lookup_literal(tree, key)
                } else {
                    Some(text)
                }
            })
    }
}
