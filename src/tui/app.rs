//! Selector state and event loop.
//!
//! A thin fuzzy-find list: the query feeds a `nucleo` matcher in real time,
//! Enter resolves to the index of the chosen item in the original list, and
//! cancelling yields `None`. Redraws only happen when state changed or every
//! 100ms (to pick up terminal resizes).

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use nucleo::{Config, Nucleo};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::render_ui;

// Query cap guards the matcher against unbounded input
const MAX_QUERY_LEN: usize = 256;

pub struct Selector {
    nucleo: Nucleo<usize>,
    items: Vec<String>,
    prompt: String,
    selected_idx: usize,
    query: String,
    chosen: Option<usize>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl Selector {
    pub fn new(prompt: &str, items: &[String]) -> Self {
        let nucleo = Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

        let injector = nucleo.injector();
        for (idx, label) in items.iter().enumerate() {
            let label = label.clone();
            injector.push(idx, move |_idx, cols| {
                cols[0] = label.clone().into();
            });
        }

        Self {
            nucleo,
            items: items.to_vec(),
            prompt: prompt.to_string(),
            selected_idx: 0,
            query: String::new(),
            chosen: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Event loop; returns the chosen item index, or `None` when cancelled.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Option<usize>> {
        while !self.should_quit {
            self.nucleo.tick(10);
            let matched = self.matched_indices();

            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                terminal.draw(|frame| {
                    render_ui(
                        frame,
                        &self.prompt,
                        &self.items,
                        &matched,
                        self.selected_idx,
                        &self.query,
                    );
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, &matched);
        }

        Ok(self.chosen)
    }

    /// Indices of the items currently matching the query, best first.
    fn matched_indices(&self) -> Vec<usize> {
        let snapshot = self.nucleo.snapshot();
        snapshot.matched_items(..snapshot.matched_item_count()).map(|item| *item.data).collect()
    }

    fn handle_action(&mut self, action: Action, matched: &[usize]) {
        match action {
            Action::Cancel => {
                self.chosen = None;
                self.should_quit = true;
            }
            Action::ClearQuery => {
                if self.query.is_empty() {
                    // Esc on an empty query cancels the prompt
                    self.chosen = None;
                    self.should_quit = true;
                } else {
                    self.query.clear();
                    self.reparse_pattern();
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1, matched.len()),
            Action::MoveDown => self.move_selection(1, matched.len()),
            Action::PageUp => self.move_selection(-10, matched.len()),
            Action::PageDown => self.move_selection(10, matched.len()),
            Action::Choose => {
                if let Some(&item_idx) = matched.get(self.selected_idx) {
                    self.chosen = Some(item_idx);
                    self.should_quit = true;
                }
            }
            Action::Input(c) => self.push_query_char(c),
            Action::DeleteChar => self.pop_query_char(),
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn push_query_char(&mut self, c: char) {
        if self.query.len() < MAX_QUERY_LEN {
            self.query.push(c);
            self.reparse_pattern();
            self.selected_idx = 0;
            self.needs_redraw = true;
        }
    }

    fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.reparse_pattern();
            self.selected_idx = 0;
            self.needs_redraw = true;
        }
    }

    fn reparse_pattern(&mut self) {
        self.nucleo.pattern.reparse(
            0,
            &self.query,
            nucleo::pattern::CaseMatching::Smart,
            nucleo::pattern::Normalization::Smart,
            false,
        );
        self.nucleo.tick(10);
    }
}
