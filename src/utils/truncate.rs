//! Truncation Utilities
//!
//! Shortens user text for log lines without splitting a UTF-8 character.

/// First `max_chars` characters of `s` on a single line, with `...` appended
/// when anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.replace(['\n', '\r'], " ");
    match flat.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &flat[..end]),
        None => flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn test_long_text_is_cut() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn test_multibyte_boundary() {
        assert_eq!(preview("héllo wörld", 7), "héllo w...");
        assert_eq!(preview("日本語のテキスト", 3), "日本語...");
    }

    #[test]
    fn test_newlines_are_flattened() {
        assert_eq!(preview("a\nb\r\nc", 10), "a b  c");
    }
}
