//! Language codes for catalog files named on the command line.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

/// Two letters, optionally followed by a region: `en`, `pt-BR`, `zh_CN`.
static LANGUAGE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}([_-][A-Za-z]{2})?$").unwrap());

/// Map each catalog file to a language code.
///
/// The code comes from the file stem when it looks like a language code,
/// then from the parent directory name, then from the stem as-is. Codes
/// seen more than once get `-1`, `-2`, ... suffixes in argument order.
pub fn files_by_language(files: &[PathBuf]) -> BTreeMap<String, PathBuf> {
    let mut languages = BTreeMap::new();

    for (index, file) in files.iter().enumerate() {
        let inferred = infer_language(file, index);
        let mut language = inferred.clone();
        let mut suffix = 1;
        while languages.contains_key(&language) {
            language = format!("{}-{}", inferred, suffix);
            suffix += 1;
        }
        languages.insert(language, file.clone());
    }

    languages
}

fn infer_language(file: &Path, index: usize) -> String {
    let stem = stem(file);
    if LANGUAGE_CODE_REGEX.is_match(stem) {
        return stem.to_string();
    }

    if let Some(parent) = file
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        && LANGUAGE_CODE_REGEX.is_match(parent)
    {
        return parent.to_string();
    }

    if stem.is_empty() {
        format!("file-{}", index + 1)
    } else {
        stem.to_string()
    }
}

/// File name up to its last dot, so `.json` yields an empty stem.
fn stem(file: &Path) -> &str {
    let name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(pos) => &name[..pos],
        None => name,
    }
}
