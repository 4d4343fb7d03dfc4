/// Turn raw note text into a single-line label of at most `limit` characters.
///
/// Rules:
/// - Runs of whitespace (including newlines) collapse to one space
/// - Leading/trailing whitespace is trimmed
/// - Text longer than `limit` characters is cut at a character boundary
/// - Blank text yields `None`
///
/// # Examples
///
/// ```
/// use mindmap_core::utils::note_snippet;
///
/// assert_eq!(note_snippet("  Mitochondria\n is the  powerhouse ", 80).as_deref(), Some("Mitochondria is the powerhouse"));
/// assert_eq!(note_snippet("abcdef", 3).as_deref(), Some("abc"));
/// assert_eq!(note_snippet(" \n\t", 80), None);
/// ```
pub fn note_snippet(text: &str, limit: usize) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }

    let snippet: String = collapsed.chars().take(limit).collect();
    let snippet = snippet.trim_end().to_string();
    if snippet.is_empty() {
        None
    } else {
        Some(snippet)
    }
}
