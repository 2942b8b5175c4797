//! Brace expansion for glob patterns.

/// Expand `{a,b}` groups in a glob pattern into one pattern per alternative.
///
/// Groups may nest. A brace without a matching partner is kept literally,
/// and a group without commas expands to its contents.
///
/// # Examples
///
/// ```
/// use vpath::filesystem::expand_braces;
///
/// assert_eq!(expand_braces("*.{css,js}"), vec!["*.css", "*.js"]);
/// assert_eq!(
///     expand_braces("{a,b{1,2}}/x"),
///     vec!["a/x", "b1/x", "b2/x"]
/// );
/// assert_eq!(expand_braces("plain/*.txt"), vec!["plain/*.txt"]);
/// ```
#[must_use]
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let head = &pattern[..open];
    let body = &pattern[open + 1..close];
    let tail = &pattern[close + 1..];

    split_alternatives(body)
        .into_iter()
        .flat_map(|alternative| expand_braces(&format!("{head}{alternative}{tail}")))
        .collect()
}

/// Byte offsets of the first `{` that has a matching `}`.
fn find_group(pattern: &str) -> Option<(usize, usize)> {
    let bytes = pattern.as_bytes();

    for (open, _) in pattern.match_indices('{') {
        let mut depth = 0usize;
        for (offset, &byte) in bytes[open..].iter().enumerate() {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((open, open + offset));
                    }
                }
                _ => {}
            }
        }
    }

    None
}

/// Split a group body on commas that are not nested inside another group.
fn split_alternatives(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);

    parts
}
