//! Dotted key helpers.
//!
//! Two splitting policies exist on purpose: catalog editing splits strictly so
//! that `"a..b"` addresses an empty-named child, while lookups skip empty
//! segments so that stray dots never block a translation.

/// Separator between nested object field names in a dotted key.
pub const SEPARATOR: char = '.';

/// Split a dotted key on every `.`, keeping empty segments.
///
/// ```
/// use i18n_manager::core::key_path::split;
///
/// assert_eq!(split("common.button.save"), vec!["common", "button", "save"]);
/// assert_eq!(split("a..b"), vec!["a", "", "b"]);
/// ```
pub fn split(key: &str) -> Vec<&str> {
    key.split(SEPARATOR).collect()
}

/// Split a dotted key on `.`, dropping empty segments.
///
/// ```
/// use i18n_manager::core::key_path::segments;
///
/// assert_eq!(segments(".usage..general."), vec!["usage", "general"]);
/// assert!(segments("").is_empty());
/// ```
pub fn segments(key: &str) -> Vec<&str> {
    key.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Append a segment to a prefix, omitting the separator when the prefix is empty.
pub fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", prefix, SEPARATOR, segment)
    }
}
