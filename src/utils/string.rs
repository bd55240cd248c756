pub fn unquote_string(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

pub fn extract_last_segment(path: &str) -> &str {
    path.rsplit(['/', '.', ':']).next().unwrap_or(path)
}

/// Upper-cases an algorithm name and drops separators, so `sha-256`,
/// `SHA_256` and `SHA256` compare equal.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Splits `CFB8` into `("CFB", Some(8))`.
pub fn split_trailing_digits(s: &str) -> (&str, Option<u32>) {
    let split = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);
    match split {
        Some(0) | None => (s, None),
        Some(i) => (&s[..i], s[i..].parse().ok()),
    }
}
