//! HTML escaping helpers. Modeled as [`std::fmt::Display`] wrappers so
//! escaped values drop straight into `write!` format strings without an
//! intermediate allocation.

use std::fmt::{self, Display};

/// Escapes a string for an HTML text context (`&`, `<`, `>`, `"`, `'`).
pub struct EscapeHtml<'a>(pub &'a str);

impl Display for EscapeHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        escape(f, self.0, entity)
    }
}

/// Escapes a string for a double-quoted HTML attribute context (`&`, `<`,
/// `>`, `"`, `'`).
pub struct EscapeAttr<'a>(pub &'a str);

impl Display for EscapeAttr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        escape(f, self.0, entity)
    }
}

// Both contexts escape the same five characters; the two wrapper types
// exist so call sites state which context they're writing into.
fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

// Writes `s` to `f`, replacing each character for which `entity` returns
// `Some` with the corresponding entity. Unescaped runs are written in one
// call rather than char-by-char.
fn escape(
    f: &mut fmt::Formatter,
    s: &str,
    entity: impl Fn(char) -> Option<&'static str>,
) -> fmt::Result {
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if let Some(entity) = entity(c) {
            f.write_str(&s[start..i])?;
            f.write_str(entity)?;
            start = i + c.len_utf8();
        }
    }
    f.write_str(&s[start..])
}
