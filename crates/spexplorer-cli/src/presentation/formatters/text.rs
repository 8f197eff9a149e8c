const ELLIPSIS: char = '…';

/// Cuts `text` to at most `max_len` characters, ending with `…` when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let mut truncated: String = text.chars().take(max_len - 1).collect();
        truncated.push(ELLIPSIS);
        truncated
    }
}

/// Splits `text` into chunks of at most `width` characters without dropping any.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Pads with spaces up to `width` characters.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
