//! Markup sanitisation for free-text submissions.
//!
//! A downstream renderer must never interpret persisted text as structural
//! markup. The transform here replaces the four markup-significant characters
//! with their named escape sequences before anything is handed to storage.

/// Replacement table applied by [`escape_markup`].
///
/// The ampersand entry is listed first: replacements are applied as one
/// left-to-right pass over the original input, which is equivalent to
/// escaping `&` before the other characters and guarantees the `&` inside an
/// introduced sequence (`&lt;`, `&gt;`, `&quot;`) is never escaped again.
const REPLACEMENTS: [(char, &str); 4] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
];

/// Replace every `&`, `<`, `>`, and `"` with its named escape sequence.
///
/// Input containing none of those characters is returned unchanged, so the
/// transform is a no-op on already-safe text.
///
/// # Examples
/// ```
/// use backend::domain::escape_markup;
///
/// assert_eq!(escape_markup("&<"), "&amp;&lt;");
/// assert_eq!(escape_markup("plain text"), "plain text");
/// ```
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match REPLACEMENTS.iter().find(|(raw, _)| *raw == ch) {
            Some((_, entity)) => escaped.push_str(entity),
            None => escaped.push(ch),
        }
    }
    escaped
}
