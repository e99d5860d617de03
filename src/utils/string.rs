const MAX_DISPLAY_LENGTH: usize = 128;

/// Shortens `value` to at most `MAX_DISPLAY_LENGTH` characters, ending in "...".
pub fn truncate_string(value: &str) -> String {
    truncate_to(value, MAX_DISPLAY_LENGTH)
}

pub fn truncate_to(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

/// Collapses runs of whitespace, including newlines, into single spaces.
pub fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
