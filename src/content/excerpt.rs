//! Plain-text excerpts derived from rendered post HTML

/// Default excerpt target length, in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

/// Derive a plain-text teaser from rendered HTML.
///
/// Markup tags are stripped, then the text is truncated to `length`
/// characters, cut back to the last space so no word is split, and given
/// a trailing ellipsis. Text at or under `length` comes back unchanged.
/// A truncated slice with no space in it is treated as a single word and
/// kept whole.
pub fn excerpt(html: &str, length: usize) -> String {
    let stripped = strip_tags(html);
    // Rendered HTML carries newlines between block elements
    let text = stripped.trim();

    if text.chars().count() <= length {
        return text.to_string();
    }

    let truncated: String = text.chars().take(length).collect();
    let cut = match truncated.rfind(' ') {
        Some(pos) => &truncated[..pos],
        None => truncated.as_str(),
    };

    format!("{}...", cut)
}

/// Remove all `<...>` tag spans from the input
fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}
