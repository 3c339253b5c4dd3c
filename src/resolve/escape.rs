use std::borrow::Cow;

/// Turn escape sequences stored literally in a translation into real characters.
///
/// Handles `\n`, `\t`, `\r`, `\\`, `\"` and `\uXXXX`. Anything else after a
/// backslash is kept as written.
///
/// ```
/// use i18n_manager::resolve::escape::unescape;
///
/// assert_eq!(unescape(r"line1\nline2"), "line1\nline2");
/// assert_eq!(unescape(r"caf\u00e9"), "café");
/// assert_eq!(unescape(r"C:\\dir"), r"C:\dir");
/// ```
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        let (replacement, consumed) = match tail.as_bytes().first() {
            Some(b'n') => (Some('\n'), 1),
            Some(b't') => (Some('\t'), 1),
            Some(b'r') => (Some('\r'), 1),
            Some(b'\\') => (Some('\\'), 1),
            Some(b'"') => (Some('"'), 1),
            Some(b'u') => match decode_unicode(tail.get(1..5)) {
                Some(c) => (Some(c), 5),
                None => (None, 0),
            },
            _ => (None, 0),
        };

        out.push(replacement.unwrap_or('\\'));
        rest = &tail[consumed..];
    }

    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_unicode(hex: Option<&str>) -> Option<char> {
    let hex = hex?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
