//! LIKE pattern escaping for search values.

/// Escape LIKE metacharacters so user input matches literally.
///
/// The result is meant for a clause carrying `ESCAPE '\'`.
pub fn escape_like_pattern(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// `%value%` with the value escaped.
pub fn contains_pattern(s: &str) -> String {
    format!("%{}%", escape_like_pattern(s))
}
