use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Selector layout: full-width results list over a one-row status bar.
pub struct SelectorLayout {
    pub results_area: Rect,
    pub status_area: Rect,
}

impl SelectorLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Results list
                Constraint::Length(1), // Status/input bar
            ])
            .split(area);

        Self { results_area: chunks[0], status_area: chunks[1] }
    }
}
