//! Display-width primitives.
//!
//! Terminal columns, not bytes and not code points: combining marks occupy
//! zero columns, East-Asian wide characters and emoji occupy two, everything
//! else one. Every wrap, pad, and truncate decision in the renderer goes
//! through these helpers; using `str::len()` or `chars().count()` anywhere
//! in layout code silently misaligns bubbles on non-ASCII content.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Columns occupied by one character (0 for combining marks and controls).
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Right-pad with spaces to exactly `width` columns. Text already at or
/// beyond `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let extra = width.saturating_sub(display_width(text));
    let mut padded = String::with_capacity(text.len() + extra);
    padded.push_str(text);
    for _ in 0..extra {
        padded.push(' ');
    }
    padded
}

/// Left-pad with spaces so the text ends at column `width`.
pub fn pad_left_to_width(text: &str, width: usize) -> String {
    let extra = width.saturating_sub(display_width(text));
    let mut padded = String::with_capacity(text.len() + extra);
    for _ in 0..extra {
        padded.push(' ');
    }
    padded.push_str(text);
    padded
}

/// Keep at most `max` columns, never splitting a wide character in half.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = char_width(c);
        if used + w > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}
