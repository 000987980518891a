// src/utils.rs
/// Normalize a role title for table lookups: trimmed, lowercase, single spaces
pub fn normalize_role_key(role: &str) -> String {
    role.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the canonical spelling of `role` in `known`, ignoring case and spacing
pub fn match_known_role<'a>(role: &str, known: &[&'a str]) -> Option<&'a str> {
    let key = normalize_role_key(role);
    known
        .iter()
        .copied()
        .find(|candidate| normalize_role_key(candidate) == key)
}

/// First `max_chars` characters of `text`, split on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Preview of `text`: the first `max_chars` characters followed by `...` when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    let head = truncate_chars(text, max_chars);
    if head.len() < text.len() {
        format!("{}...", head)
    } else {
        head.to_string()
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
