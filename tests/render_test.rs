//! Rendering laws: display-width alignment must survive any body content.

use takeout_chat_viewer::render::width::display_width;
use takeout_chat_viewer::{
    BubbleRenderer, Category, Conversation, Message, MessageBody, RenderConfig, RenderMode,
    RenderedLine, Side,
};

const DATE: &str = "Saturday, 3 June 2023 at 14:51:00 UTC";

fn message(email: &str, body: &str, pinned: bool) -> Message {
    Message {
        sender: "Sender".to_string(),
        sender_email: Some(email.to_string()),
        timestamp: DATE.to_string(),
        body: MessageBody::Text(body.to_string()),
        pinned,
    }
}

fn conversation(messages: Vec<Message>) -> Conversation {
    Conversation::new(
        "DM width".to_string(),
        "Width".to_string(),
        Category::DirectMessage,
        Vec::new(),
        messages,
    )
}

fn renderer(terminal_width: usize) -> BubbleRenderer {
    BubbleRenderer::new(
        RenderConfig::with_terminal_width(terminal_width),
        Some("me@example.com".to_string()),
    )
}

fn framed(lines: &[RenderedLine]) -> Vec<&RenderedLine> {
    lines
        .iter()
        .filter(|l| l.text.contains('│') || l.text.contains('┌') || l.text.contains('└'))
        .collect()
}

fn assert_rectangular(lines: &[RenderedLine], context: &str) {
    let frame_lines = framed(lines);
    assert!(frame_lines.len() >= 3, "{}: bubble too small", context);
    let width = display_width(&frame_lines[0].text);
    for line in frame_lines {
        assert_eq!(
            display_width(&line.text),
            width,
            "{}: line {:?} breaks the rectangle",
            context,
            line.text
        );
    }
}

#[test]
fn test_ascii_bubble_is_rectangular() {
    let r = renderer(100);
    let convo = conversation(vec![message(
        "bob@example.com",
        "a plain ascii body long enough to wrap across several lines of the bubble frame",
        false,
    )]);
    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    assert_rectangular(&lines, "ascii");
}

#[test]
fn test_east_asian_wide_bubble_is_rectangular() {
    let r = renderer(100);
    let convo = conversation(vec![message(
        "bob@example.com",
        "部署完成了，请大家检查一下各自负责的模块，有问题直接在这里说，谢谢大家的配合",
        false,
    )]);
    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    assert_rectangular(&lines, "east-asian");
}

#[test]
fn test_combining_mark_bubble_is_rectangular() {
    let r = renderer(100);
    let body = "re\u{0301}sume\u{0301}s and cafe\u{0301}s: ".repeat(8);
    let convo = conversation(vec![message("bob@example.com", &body, false)]);
    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    assert_rectangular(&lines, "combining");
}

#[test]
fn test_emoji_bubble_is_rectangular() {
    let r = renderer(100);
    let convo = conversation(vec![message(
        "bob@example.com",
        "🎉 shipped! 🚀🚀🚀 the release 📦 is out, thanks everyone 🙏 for the late nights 🌙",
        false,
    )]);
    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    assert_rectangular(&lines, "emoji");
}

#[test]
fn test_mixed_width_conversation_alignment() {
    let r = renderer(90);
    let convo = conversation(vec![
        message("me@example.com", "English reply", false),
        message("bob@example.com", "中文回复，宽字符", false),
        message("me@example.com", "🚀 emoji and text 混合", true),
    ]);

    // Every bubble individually rectangular; viewer bubbles flush right
    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    let mut bubble: Vec<RenderedLine> = Vec::new();
    let mut checked = 0;
    for line in lines {
        let boundary = line.text.is_empty();
        bubble.push(line);
        if boundary {
            assert_rectangular(&bubble, "mixed conversation");
            checked += 1;
            bubble.clear();
        }
    }
    assert_eq!(checked, 3);
}

#[test]
fn test_viewer_bubbles_end_at_right_margin() {
    let width = 96;
    let r = renderer(width);
    let convo = conversation(vec![message("me@example.com", "my own message", false)]);

    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    for line in lines.iter().filter(|l| l.text.contains('│') || l.text.contains('┐')) {
        assert_eq!(line.side, Side::Viewer);
        assert_eq!(display_width(&line.text), width, "bubble must end at the right margin");
    }
}

#[test]
fn test_exact_width_body_renders_single_content_line() {
    let r = renderer(100);
    let bubble_width = RenderConfig::with_terminal_width(100).max_bubble_width;

    let convo = conversation(vec![message("bob@example.com", &"x".repeat(bubble_width), false)]);
    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    assert_eq!(lines.iter().filter(|l| l.text.contains('│')).count(), 1);

    let convo = conversation(vec![message(
        "bob@example.com",
        &"x".repeat(bubble_width + 1),
        false,
    )]);
    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    let content: Vec<_> = lines.iter().filter(|l| l.text.contains('│')).collect();
    assert_eq!(content.len(), 2);
    assert!(content[1].text.contains('x'), "overflow line must not be empty");
}

#[test]
fn test_pinned_marker_survives_narrow_terminals() {
    let r = renderer(40);
    let convo = conversation(vec![message("bob@example.com", "pinned in a tiny terminal", true)]);

    let lines: Vec<_> = r.render(&convo, RenderMode::PinnedOnly).collect();
    assert!(
        lines[0].text.contains("[PINNED]"),
        "marker must stay intact inside the width budget"
    );
}

#[test]
fn test_every_pinned_bubble_header_is_searchable() {
    let r = renderer(100);
    let convo = conversation(vec![
        message("me@example.com", "mine, pinned", true),
        message("bob@example.com", "theirs, pinned", true),
        message("bob@example.com", "not pinned", false),
    ]);

    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    let marked = lines.iter().filter(|l| l.text.contains("[PINNED]")).count();
    assert_eq!(marked, 2);
}

#[test]
fn test_side_tags_follow_speaker() {
    let r = renderer(100);
    let convo = conversation(vec![
        message("me@example.com", "mine", false),
        message("bob@example.com", "theirs", false),
    ]);

    let lines: Vec<_> = r.render(&convo, RenderMode::All).collect();
    let empty_boundaries: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.text.is_empty())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(empty_boundaries.len(), 2);

    let (first_bubble, second_bubble) = lines.split_at(empty_boundaries[0] + 1);
    assert!(first_bubble.iter().all(|l| l.side == Side::Viewer));
    assert!(second_bubble.iter().all(|l| l.side == Side::Other));
}
