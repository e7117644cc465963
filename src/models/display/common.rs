//! Common display helpers

/// Truncate string to max length (in characters) with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Cell text for a boolean column
pub fn yes_no(flag: bool) -> String {
    let mark = if flag { "yes" } else { "--" };
    mark.to_string()
}
