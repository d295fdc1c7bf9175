//! Terminal output sanitization.
//!
//! Message bodies and sender names come straight out of a downloaded
//! archive, so they are treated as untrusted before being written to the
//! terminal: ANSI escape sequences could move the cursor, recolor output, or
//! clear the screen, and raw control characters would corrupt the
//! display-width accounting the bubble layout depends on.

/// Strip ANSI CSI sequences and control characters from untrusted text.
///
/// Newlines are preserved (the wrapper treats them as paragraph breaks),
/// tabs become a single space (tab stops have no well-defined display
/// width), and everything else non-printable is dropped.
pub fn sanitize_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ ... terminated by an ASCII letter
            if chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        match ch {
            '\n' => result.push('\n'),
            '\t' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_color_sequences() {
        assert_eq!(sanitize_for_display("\x1b[31mred\x1b[0m plain"), "red plain");
    }

    #[test]
    fn test_strips_cursor_movement() {
        assert_eq!(sanitize_for_display("\x1b[2J\x1b[Hcleared"), "cleared");
    }

    #[test]
    fn test_strips_bell_and_backspace() {
        assert_eq!(sanitize_for_display("ding\x07dong\x08"), "dingdong");
    }

    #[test]
    fn test_preserves_newlines_converts_tabs() {
        assert_eq!(sanitize_for_display("a\tb\nc\r"), "a b\nc");
    }

    #[test]
    fn test_passes_plain_unicode_through() {
        assert_eq!(sanitize_for_display("héllo 世界 🚀"), "héllo 世界 🚀");
    }

    #[test]
    fn test_bare_escape_without_bracket() {
        assert_eq!(sanitize_for_display("a\x1bz"), "az");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_for_display(""), "");
    }
}
