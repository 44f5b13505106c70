//! Markup-to-display-text normalisation.
//!
//! Everything a strategy hands back is raw markup. Before a candidate can
//! become a [`crate::SearchResult`] its title and snippet pass through
//! [`normalize`], which never fails and at worst returns an empty string.

/// The fixed entity table. Unknown entities pass through literally.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Convert a markup fragment into plain display text.
///
/// Strips every `<...>` tag, decodes the fixed entity table, collapses
/// whitespace runs (newlines included) to a single space and trims the
/// ends. Decoding can reveal new markup (`&lt;b&gt;` becomes `<b>`), so the
/// pass repeats until the text stops changing; this makes the function
/// idempotent.
///
/// # Examples
///
/// ```
/// use serp_extract::text::normalize;
///
/// assert_eq!(normalize("<b>Rust</b>&nbsp;&amp;\n  Cargo"), "Rust & Cargo");
/// ```
pub fn normalize(fragment: &str) -> String {
    let mut current = normalize_once(fragment);
    loop {
        let next = normalize_once(&current);
        // Each pass is length-non-increasing; equality ends the loop.
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Truncate `text` to at most `max_chars` characters. No ellipsis is added.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_end, _)) => text[..byte_end].trim_end().to_owned(),
        None => text.to_owned(),
    }
}

fn normalize_once(fragment: &str) -> String {
    let stripped = strip_tags(fragment);
    let decoded = decode_entities(&stripped);
    collapse_whitespace(&decoded)
}

/// Remove every `<...>` span. A `<` with no later `>` is kept literally.
fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }
    ENTITIES
        .iter()
        .fold(text.to_owned(), |acc, (entity, plain)| acc.replace(entity, plain))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
