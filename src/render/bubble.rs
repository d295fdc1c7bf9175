use crate::models::{Conversation, Message, MessageBody};
use crate::render::width::{pad_left_to_width, pad_to_width, truncate_to_width};
use crate::render::wrap::wrap_text;
use crate::utils::sanitize_for_display;

/// Marker prepended to the header of a pinned bubble. The pager's search
/// finds pinned messages by this exact literal, so it must appear verbatim.
pub const PINNED_MARKER: &str = "[PINNED]";

/// Placeholder content for bodies we cannot render as text.
pub const NON_TEXT_PLACEHOLDER: &str = "[Message (non-text)]";
pub const PINNED_NON_TEXT_PLACEHOLDER: &str = "[Pinned message (non-text)]";

const DEFAULT_TERMINAL_WIDTH: usize = 80;
// Bubble interior as a share of the terminal, mirroring a phone chat layout
const BUBBLE_WIDTH_PERCENT: usize = 55;
// Wide enough for the non-text placeholder plus padding
const MIN_BUBBLE_WIDTH: usize = 30;
// "│ " on the left, " │" on the right
const FRAME_WIDTH: usize = 4;

/// Which mode a conversation is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    All,
    PinnedOnly,
}

/// Which speaker a line belongs to; right-aligned continuation lines carry
/// the same tag as their bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Viewer,
    Other,
}

/// One finalized terminal line, ready to print as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub side: Side,
}

/// Layout parameters for the bubble renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub terminal_width: usize,
    pub max_bubble_width: usize,
}

impl RenderConfig {
    /// Probe the attached terminal, falling back to 80 columns.
    pub fn detect() -> Self {
        let width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);
        Self::with_terminal_width(width)
    }

    /// Derive bubble width from a terminal width. Degenerate terminals are
    /// clamped so the frame and placeholders always fit.
    pub fn with_terminal_width(terminal_width: usize) -> Self {
        let terminal_width = terminal_width.max(MIN_BUBBLE_WIDTH + FRAME_WIDTH);
        let max_bubble_width =
            (terminal_width * BUBBLE_WIDTH_PERCENT / 100).max(MIN_BUBBLE_WIDTH);
        Self { terminal_width, max_bubble_width }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::with_terminal_width(DEFAULT_TERMINAL_WIDTH)
    }
}

/// Renders messages as framed, width-aligned chat bubbles.
///
/// The viewer identity is an explicit constructor argument rather than
/// ambient state, so tests (and the `--email` flag) can override the
/// detected value.
pub struct BubbleRenderer {
    config: RenderConfig,
    viewer_email: Option<String>,
}

impl BubbleRenderer {
    pub fn new(config: RenderConfig, viewer_email: Option<String>) -> Self {
        Self { config, viewer_email }
    }

    /// Lazily render a conversation, one bubble at a time.
    ///
    /// The returned iterator is finite and consumed once; dropping it early
    /// (the user quits the pager) abandons the remaining messages with no
    /// cleanup required. Nothing beyond the current bubble is materialized.
    pub fn render<'a>(
        &'a self,
        conversation: &'a Conversation,
        mode: RenderMode,
    ) -> impl Iterator<Item = RenderedLine> + 'a {
        conversation
            .messages
            .iter()
            .filter(move |message| mode == RenderMode::All || message.pinned)
            .flat_map(move |message| self.message_bubble(message))
    }

    /// All lines of a single bubble: header, framed body, trailing blank
    /// separator. Every framed line of one bubble has identical display
    /// width.
    pub fn message_bubble(&self, message: &Message) -> Vec<RenderedLine> {
        let side = self.side_of(message);
        let width = self.config.max_bubble_width;

        let content = match &message.body {
            MessageBody::Text(text) => wrap_text(&sanitize_for_display(text), width),
            MessageBody::NonText => vec![placeholder(message.pinned).to_string()],
        };

        let indent = match side {
            Side::Viewer => {
                " ".repeat(self.config.terminal_width.saturating_sub(width + FRAME_WIDTH))
            }
            Side::Other => String::new(),
        };

        let mut lines = Vec::with_capacity(content.len() + 4);
        let push = |lines: &mut Vec<RenderedLine>, text: String| {
            lines.push(RenderedLine { text, side });
        };

        push(&mut lines, self.header_line(message, side));
        push(&mut lines, format!("{}┌{}┐", indent, "─".repeat(width + 2)));
        for body_line in content {
            push(&mut lines, format!("{}│ {} │", indent, pad_to_width(&body_line, width)));
        }
        push(&mut lines, format!("{}└{}┘", indent, "─".repeat(width + 2)));
        push(&mut lines, String::new());

        lines
    }

    fn side_of(&self, message: &Message) -> Side {
        match (&self.viewer_email, &message.sender_email) {
            (Some(viewer), Some(sender)) if viewer == sender => Side::Viewer,
            _ => Side::Other,
        }
    }

    /// First line of a bubble: `[PINNED] Sender • timestamp`, truncated to
    /// the terminal width (the marker spends budget, it never widens the
    /// line) and right-justified for the viewer's own messages.
    fn header_line(&self, message: &Message, side: Side) -> String {
        let sender = match side {
            Side::Viewer => "You".to_string(),
            Side::Other => sanitize_for_display(&message.sender),
        };

        let mut header = String::new();
        if message.pinned {
            header.push_str(PINNED_MARKER);
            header.push(' ');
        }
        header.push_str(&sender);
        header.push_str(" • ");
        header.push_str(&sanitize_for_display(&message.timestamp));

        let header = truncate_to_width(&header, self.config.terminal_width);
        match side {
            Side::Viewer => pad_left_to_width(&header, self.config.terminal_width),
            Side::Other => header,
        }
    }
}

fn placeholder(pinned: bool) -> &'static str {
    if pinned { PINNED_NON_TEXT_PLACEHOLDER } else { NON_TEXT_PLACEHOLDER }
}
