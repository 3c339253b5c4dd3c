//! Embedded fallback translations.
//!
//! A read-only table of flat `dotted key -> text` maps per language, built once
//! and handed to [`load`](super::load) by reference.

use std::collections::BTreeMap;

use crate::core::{Node, Tree, key_path};

const EN: &[(&str, &str)] = &[
    (
        "usage.general",
        "Usage: i18n-manager [--lang <code>] <command> [args]\\n\\nCommands:\\n  check    report keys missing in any catalog\\n  sort     sort catalogs in place (with backup)\\n  unused   list keys not referenced in source files\\n  add      add a new key to one catalog\\n  resolve  print one translated string\\n  init     create a .i18nrc.json config",
    ),
    ("check.complete", "All translations complete!"),
    ("check.found_count", "Found {{.Count}} missing translations:"),
    ("backup.created", "Backup created: {{.Path}}"),
    ("sort.saved", "Sorted and saved: {{.Path}}"),
    ("sort.failed", "Failed to sort {{.Path}}: {{.Error}}"),
    ("unused.all_used", "All translation keys are used."),
    ("unused.found_count", "Found {{.Count}} unused translation keys:"),
    ("unused.files_scanned", "Scanned {{.Count}} source files"),
    (
        "add.added",
        "Added translation '{{.Key}}' = '{{.Value}}' to {{.Path}}",
    ),
    ("init.created", "Created {{.Path}}"),
    ("error.prefix", "Error"),
];

const DE: &[(&str, &str)] = &[
    (
        "usage.general",
        "Aufruf: i18n-manager [--lang <code>] <befehl> [argumente]\\n\\nBefehle:\\n  check    fehlende Schl\\u00fcssel in allen Katalogen melden\\n  sort     Kataloge sortieren (mit Sicherung)\\n  unused   nicht verwendete Schl\\u00fcssel auflisten\\n  add      neuen Schl\\u00fcssel zu einem Katalog hinzuf\\u00fcgen\\n  resolve  einen \\u00fcbersetzten Text ausgeben\\n  init     eine .i18nrc.json anlegen",
    ),
    ("check.complete", "Alle \u{dc}bersetzungen vollst\u{e4}ndig!"),
    ("check.found_count", "{{.Count}} fehlende \u{dc}bersetzungen gefunden:"),
    ("backup.created", "Sicherung erstellt: {{.Path}}"),
    ("sort.saved", "Sortiert und gespeichert: {{.Path}}"),
    ("sort.failed", "Sortieren von {{.Path}} fehlgeschlagen: {{.Error}}"),
    ("unused.all_used", "Alle Schl\u{fc}ssel werden verwendet."),
    ("unused.found_count", "{{.Count}} nicht verwendete Schl\u{fc}ssel gefunden:"),
    ("unused.files_scanned", "{{.Count}} Quelldateien durchsucht"),
    (
        "add.added",
        "\u{dc}bersetzung '{{.Key}}' = '{{.Value}}' zu {{.Path}} hinzugef\u{fc}gt",
    ),
    ("init.created", "{{.Path}} erstellt"),
    ("error.prefix", "Fehler"),
];

#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    languages: BTreeMap<String, BTreeMap<String, String>>,
}

impl FallbackTable {
    /// Messages compiled into the binary.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.insert("en", EN.iter().copied());
        table.insert("de", DE.iter().copied());
        table
    }

    pub fn insert<K, V>(&mut self, language: &str, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.languages.entry(language.to_string()).or_default().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }

    pub fn get(&self, language: &str) -> Option<&BTreeMap<String, String>> {
        self.languages.get(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Tree for `language` that answers both literal and nested lookups.
    pub fn tree_for(&self, language: &str) -> Option<Tree> {
        self.get(language).map(tree_from_flat)
    }
}

/// Build a tree holding every flat entry twice: once under its literal dotted
/// key at the top level and once nested by segment.
pub fn tree_from_flat(flat: &BTreeMap<String, String>) -> Tree {
    let mut tree: Tree = flat
        .iter()
        .map(|(key, value)| (key.clone(), Node::string(value.as_str())))
        .collect();

    for (key, value) in flat {
        let parts = key_path::segments(key);
        let Some((last, intermediate)) = parts.split_last() else {
            continue;
        };

        let mut current = &mut tree;
        for part in intermediate {
            current = current
                .entry(part.to_string())
                .or_insert_with(Node::empty_branch)
                .make_branch();
        }
        current.insert(last.to_string(), Node::string(value.as_str()));
    }

    tree
}
