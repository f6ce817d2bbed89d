/// Cleans text pulled out of a DOM node
///
/// Leading and trailing whitespace is removed and inner runs of whitespace,
/// newlines included, collapse to single spaces.
pub fn clean(text: &str) -> String {
    normalize_whitespace_in_segment(text)
}

/// Normalizes whitespace within a single line or paragraph
pub fn normalize_whitespace_in_segment(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes a leading word such as "in" from a cleaned location string
pub fn strip_leading_word<'a>(text: &'a str, word: &str) -> &'a str {
    match text.strip_prefix(word) {
        Some(rest) if rest.starts_with(' ') => rest.trim_start(),
        _ => text,
    }
}
