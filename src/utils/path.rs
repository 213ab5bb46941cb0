//! Request path normalization for policy lookup

/// Substituted for every purely numeric path segment
pub const PLACEHOLDER: &str = ":id";

/// Replace numeric segments of a request path with `:id`.
///
/// `/api/v1/staff/qualification/630/` becomes
/// `/api/v1/staff/qualification/:id`. One trailing slash is dropped.
pub fn normalize_for_lookup(path: &str) -> String {
    normalize_with_placeholder(path, PLACEHOLDER)
}

/// Same as [`normalize_for_lookup`] with a caller-chosen placeholder.
pub fn normalize_with_placeholder(path: &str, placeholder: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);

    trimmed
        .split('/')
        .map(|segment| {
            if is_numeric_segment(segment) {
                placeholder
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
