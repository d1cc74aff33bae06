// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Header-key normalization for alias matching: lowercase + collapsed
/// whitespace. Keys are compared in this form, never stored in it.
pub fn normalize_key(s: &str) -> String {
    normalize_ws(&s.to_lowercase())
}

/// Anchor slug: lowercase, every run of non-ASCII-alphanumeric characters
/// becomes one hyphen, outer hyphens trimmed. Multibyte letters count as
/// non-alphanumeric here (no transliteration), so a fully non-Latin name
/// collapses to nothing and takes `fallback`.
pub fn slugify(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    let out = out.trim_matches('-').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn normalize_key_is_case_insensitive() {
        assert_eq!(normalize_key("  NAME  "), "name");
        assert_eq!(normalize_key("Name (Roman)"), "name (roman)");
    }

    #[test]
    fn slugify_collapses_non_alphanumeric_runs() {
        assert_eq!(slugify("Kim Minjun", "member"), "kim-minjun");
        assert_eq!(slugify("--Edge--Case--", "member"), "edge-case");
        assert_eq!(slugify("김철수", "member"), "member");
    }
}
