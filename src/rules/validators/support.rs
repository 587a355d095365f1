//! Shared text helpers for pattern-based validators.
//!
//! Validators receive best-effort slices, not parsed trees; these helpers
//! make the same tolerant assumptions everywhere.

/// 1-based line of a byte offset within the extracted section.
#[must_use]
pub fn line_of_offset(text: &str, offset: usize) -> usize {
    text[..offset.min(text.len())]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1
}

/// Collapse whitespace and truncate a matched tag for violation context.
#[must_use]
pub fn snippet(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.len() > 100 {
        let mut end = 100;
        while !collapsed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &collapsed[..end])
    } else {
        collapsed
    }
}

/// Find an attribute value inside one tag's text.
///
/// Handles `attr="v"`, `attr='v'`, bound `:attr="v"`, handler `@attr="v"`,
/// and bare boolean attributes (returned as `Some("")`). Returns `None`
/// when the attribute is absent.
#[must_use]
pub fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let bytes = tag.as_bytes();
    let mut search_from = 0;
    while let Some(pos) = tag[search_from..].find(name) {
        let idx = search_from + pos;
        search_from = idx + name.len();

        let boundary_before = idx > 0
            && matches!(
                bytes[idx - 1],
                b' ' | b'\t' | b'\n' | b'\r' | b':' | b'@' | b'<'
            );
        if !boundary_before {
            continue;
        }

        let after = idx + name.len();
        match bytes.get(after) {
            Some(b'=') => {
                let rest = tag[after + 1..].trim_start();
                let mut chars = rest.chars();
                return match chars.next() {
                    Some(quote @ ('"' | '\'')) => {
                        let inner = &rest[quote.len_utf8()..];
                        inner.find(quote).map(|end| &inner[..end])
                    }
                    // Unquoted or truncated value; treat as present.
                    _ => Some(""),
                };
            }
            Some(b' ' | b'\t' | b'\n' | b'\r' | b'/' | b'>') | None => return Some(""),
            _ => {}
        }
    }
    None
}

/// Whether the tag carries the attribute at all (static, bound, or bare).
#[must_use]
pub fn has_attr(tag: &str, name: &str) -> bool {
    attr_value(tag, name).is_some()
}

/// Whether the tag carries a non-empty accessible name of its own
/// (aria-label, aria-labelledby, or title).
#[must_use]
pub fn has_accessible_name(tag: &str) -> bool {
    attr_value(tag, "aria-label").is_some_and(|v| !v.trim().is_empty())
        || attr_value(tag, "aria-labelledby").is_some_and(|v| !v.trim().is_empty())
        || attr_value(tag, "title").is_some_and(|v| !v.trim().is_empty())
}

/// Strip nested tags and collapse whitespace, keeping text content only.
/// Mustache interpolations are kept; a bound text node still counts as text.
#[must_use]
pub fn inner_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "support_tests.rs"]
mod tests;
