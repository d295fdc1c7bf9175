//! Width-aware chat bubble rendering.
//!
//! The pipeline is `wrap` (display-width word wrapping) -> `bubble`
//! (framing, padding, alignment, pin markers), with `width` providing the
//! column arithmetic both stages share. All output is plain text lines; the
//! pager just prints them.

pub mod bubble;
pub mod width;
pub mod wrap;

pub use bubble::{
    BubbleRenderer, NON_TEXT_PLACEHOLDER, PINNED_MARKER, PINNED_NON_TEXT_PLACEHOLDER,
    RenderConfig, RenderMode, RenderedLine, Side,
};

/// Preamble lines shown above a rendered conversation.
pub fn mode_banner(mode: RenderMode) -> Vec<String> {
    match mode {
        RenderMode::PinnedOnly => {
            vec!["📌 Showing only pinned messages".to_string(), String::new()]
        }
        RenderMode::All => vec![
            "Navigation:".to_string(),
            "   /PINNED → jump to pinned messages".to_string(),
            "   q       → quit pager".to_string(),
            String::new(),
        ],
    }
}
