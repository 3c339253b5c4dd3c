//! Minimal field templating for translation strings.
//!
//! Supports `{{.Name}}` and `{{ .Nested.Field }}` actions looked up in a JSON
//! object, with optional `{{-` / `-}}` whitespace trimming. Any other action
//! is an error so callers can fall back to the raw string.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::TemplateError;

/// Rendered in place of a field that is absent from the data.
pub const NO_VALUE: &str = "<no value>";

static FIELD_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)$").unwrap()
});

pub fn render(template: &str, data: &Map<String, Value>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);

        let body = &rest[start + 2..];
        let end = body
            .find("}}")
            .ok_or(TemplateError::Unclosed(offset + start))?;
        let (action, trim_left, trim_right) = split_trim_markers(&body[..end]);

        if trim_left {
            out.truncate(out.trim_end().len());
        }

        let captures = FIELD_PATH_REGEX
            .captures(action)
            .ok_or_else(|| TemplateError::UnsupportedAction(action.to_string()))?;
        out.push_str(&field_text(data, &captures[1]));

        let mut consumed = start + 2 + end + 2;
        if trim_right {
            let after = &rest[consumed..];
            consumed += after.len() - after.trim_start().len();
        }
        offset += consumed;
        rest = &rest[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Strip `{{- ` and ` -}}` markers, which drop the whitespace on that side
/// of the action. A marker must be separated from the action by whitespace.
fn split_trim_markers(raw: &str) -> (&str, bool, bool) {
    let mut action = raw;

    let trim_left = action
        .strip_prefix('-')
        .is_some_and(|rest| rest.starts_with(char::is_whitespace));
    if trim_left {
        action = &action[1..];
    }

    let trim_right = action
        .strip_suffix('-')
        .is_some_and(|rest| rest.ends_with(char::is_whitespace));
    if trim_right {
        action = &action[..action.len() - 1];
    }

    (action.trim(), trim_left, trim_right)
}

fn field_text(data: &Map<String, Value>, path: &str) -> String {
    let mut parts = path.split('.');
    let mut current = parts.next().and_then(|first| data.get(first));

    for part in parts {
        current = current.and_then(|v| v.get(part));
    }

    match current {
        None | Some(Value::Null) => NO_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
