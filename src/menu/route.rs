//! Location normalization

/// Normalize a router location or a node path for index lookups.
///
/// Drops the query string and fragment, trims surrounding whitespace and the
/// trailing `/` (the root stays `/`). An empty location is the root.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let end = trimmed.find(|c| c == '?' || c == '#').unwrap_or(trimmed.len());
    let path = trimmed[..end].trim_end_matches('/');
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Whether a declared node path is usable as a navigation target.
pub fn is_valid_path(raw: &str) -> bool {
    raw.trim().starts_with('/')
}
