//! Wildcard pattern preparation and matching

/// Normalize a raw client pattern for matching.
///
/// Returns `None` for empty or whitespace-only input (an empty search yields
/// an empty result, not an error). A pattern without any `*`/`?` is wrapped
/// as `*pattern*` so bare terms behave as substring searches. The result is
/// lowercased; match against lowercased names.
pub fn prepare_pattern(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let pattern = if trimmed.contains('*') || trimmed.contains('?') {
        trimmed.to_string()
    } else {
        format!("*{}*", trimmed)
    };
    Some(pattern.to_lowercase())
}

/// Match `text` against a wildcard pattern.
///
/// `*` matches any run of characters, `?` exactly one. Iterative two-pointer
/// scan with star backtracking; no recursion, linear in the common case.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();

    let mut pi = 0;
    let mut ti = 0;
    let mut star: Option<usize> = None;
    let mut mark = 0;

    while ti < t.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == t[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            mark = ti;
            pi += 1;
        } else if let Some(star_pos) = star {
            // Let the last star absorb one more character and retry
            pi = star_pos + 1;
            mark += 1;
            ti = mark;
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}
