//! Director search patterns.
//!
//! Callers may use `*` or `%` as wildcards; both match any run of
//! characters at any position. Matching is case-insensitive.

/// The wildcard accepted from callers in addition to the SQL `%`.
pub const USER_WILDCARD: char = '*';

/// The SQL `LIKE` wildcard.
pub const SQL_WILDCARD: char = '%';

/// Translate a caller-supplied director pattern into a SQL `LIKE` pattern.
///
/// `*` becomes `%`, and the result is lower-cased so it can be compared
/// against `LOWER(director)`.
pub fn to_like_pattern(pattern: &str) -> String {
    pattern.replace(USER_WILDCARD, "%").to_lowercase()
}

/// In-memory evaluation of `LOWER(director) LIKE LOWER(pattern)`, for
/// record stores that never reach SQL. `%` matches any run of characters and
/// `_` exactly one, as in PostgreSQL.
#[cfg(test)]
pub(crate) fn matches(pattern: &str, director: &str) -> bool {
    let pattern: Vec<char> = to_like_pattern(pattern).chars().collect();
    let director: Vec<char> = director.to_lowercase().chars().collect();
    like(&pattern, &director)
}

#[cfg(test)]
fn like(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some((&SQL_WILDCARD, rest)) => (0..=text.len()).any(|skip| like(rest, &text[skip..])),
        Some((&'_', rest)) => !text.is_empty() && like(rest, &text[1..]),
        Some((c, rest)) => text.first() == Some(c) && like(rest, &text[1..]),
    }
}
