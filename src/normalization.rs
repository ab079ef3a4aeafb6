use std::borrow::Cow;

/// Formatting characters that carry no meaning inside a candidate code.
#[inline]
pub fn is_insignificant(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Strips whitespace and dashes from a candidate code. Every other character,
/// digit or not, is kept as is so the shape check can report it.
///
/// Borrows the input when there is nothing to strip, which makes normalizing
/// an already normalized code free.
pub fn normalize(candidate: &str) -> Cow<'_, str> {
    if candidate.chars().any(is_insignificant) {
        Cow::Owned(candidate.chars().filter(|c| !is_insignificant(*c)).collect())
    } else {
        Cow::Borrowed(candidate)
    }
}
