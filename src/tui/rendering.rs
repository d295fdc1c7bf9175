use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::layout::SelectorLayout;

/// Render the selector: matched items plus the query/status bar.
pub fn render_ui(
    frame: &mut Frame,
    prompt: &str,
    items: &[String],
    matched: &[usize],
    selected_idx: usize,
    query: &str,
) {
    let layout = SelectorLayout::new(frame.area());

    render_results(frame, layout.results_area, items, matched, selected_idx);
    render_status(frame, layout.status_area, prompt, query, matched.len(), items.len());
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    items: &[String],
    matched: &[usize],
    selected_idx: usize,
) {
    let list_items: Vec<ListItem> = matched
        .iter()
        .enumerate()
        .filter_map(|(row, &item_idx)| {
            let label = items.get(item_idx)?;
            let style = if row == selected_idx {
                Style::default()
                    .fg(Color::Rgb(250, 250, 250)) // Bright text
                    .bg(Color::Rgb(16, 185, 129)) // Emerald background
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(113, 113, 122)) // Muted text
            };
            Some(ListItem::new(label.as_str()).style(style))
        })
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Chats "),
    );

    frame.render_widget(list, area);
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    query: &str,
    matched_count: usize,
    total_count: usize,
) {
    let status = format!(
        " {} {} | {}/{} | ↑↓: move · Enter: select · Esc: clear · Ctrl+C: cancel ",
        prompt, query, matched_count, total_count
    );

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)));

    frame.render_widget(bar, area);
}
