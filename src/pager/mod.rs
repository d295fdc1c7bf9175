//! Minimal alternate-screen pager for pre-rendered chat lines.
//!
//! Pulls lines from the renderer's iterator on demand, so the first page is
//! visible before a long conversation finishes rendering, and quitting early
//! simply drops the iterator. Keys: arrows/j/k scroll, Space/PageDown and
//! b/PageUp page, g/G jump, `/` starts a substring search (type `PINNED` to
//! hop between pinned bubbles), `n` repeats it, `q` quits.
//!
//! When stdout is not a terminal (piped or captured output) the pager
//! degrades to printing every line.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue, style::Print};

use crate::render::width::truncate_to_width;

/// Page `lines` interactively, or dump them when not attached to a TTY.
pub fn page_lines<I>(lines: I) -> Result<()>
where
    I: Iterator<Item = String>,
{
    let mut stdout = io::stdout();
    if !stdout.is_terminal() {
        for line in lines {
            writeln!(stdout, "{}", line)?;
        }
        return Ok(());
    }

    let _screen = PagerScreen::enter(&mut stdout)?;
    Pager::new(lines).run(&mut stdout)
}

/// Raw-mode + alternate-screen guard; restores the terminal on drop so a
/// failure mid-loop cannot leave the shell unusable.
struct PagerScreen;

impl PagerScreen {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for PagerScreen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

struct Pager<I: Iterator<Item = String>> {
    source: I,
    buffered: Vec<String>,
    exhausted: bool,
    top: usize,
    search: Option<String>,
}

impl<I: Iterator<Item = String>> Pager<I> {
    fn new(source: I) -> Self {
        Self { source, buffered: Vec::new(), exhausted: false, top: 0, search: None }
    }

    /// Pull from the source until `count` lines are buffered or it runs dry.
    fn ensure_buffered(&mut self, count: usize) {
        while !self.exhausted && self.buffered.len() < count {
            match self.source.next() {
                Some(line) => self.buffered.push(line),
                None => self.exhausted = true,
            }
        }
    }

    fn run(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        loop {
            let (cols, rows) = terminal::size()?;
            let page = (rows.saturating_sub(1)) as usize;

            self.ensure_buffered(self.top + page + 1);
            self.draw(stdout, cols as usize, page)?;

            if let Event::Key(key) = event::read()? {
                if self.handle_key(key, page, stdout)? {
                    return Ok(());
                }
            }
        }
    }

    /// Returns `true` when the user quit.
    fn handle_key(
        &mut self,
        key: KeyEvent,
        page: usize,
        stdout: &mut io::Stdout,
    ) -> Result<bool> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => return Ok(true),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Ok(true),

            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => self.scroll_up(1),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) | (KeyCode::Enter, _) => {
                self.scroll_down(1, page)
            }
            (KeyCode::PageUp, _) | (KeyCode::Char('b'), _) => self.scroll_up(page),
            (KeyCode::PageDown, _) | (KeyCode::Char(' '), _) | (KeyCode::Char('f'), _) => {
                self.scroll_down(page, page)
            }
            (KeyCode::Char('g'), _) => self.top = 0,
            (KeyCode::Char('G'), _) => {
                self.ensure_buffered(usize::MAX);
                self.top = self.buffered.len().saturating_sub(page);
            }

            (KeyCode::Char('/'), _) => {
                if let Some(query) = self.read_search_query(stdout, page)? {
                    self.search = Some(query);
                    self.jump_to_next_match(page);
                }
            }
            (KeyCode::Char('n'), _) => self.jump_to_next_match(page),

            _ => {}
        }
        Ok(false)
    }

    fn scroll_up(&mut self, delta: usize) {
        self.top = self.top.saturating_sub(delta);
    }

    fn scroll_down(&mut self, delta: usize, page: usize) {
        self.ensure_buffered(self.top + delta + page + 1);
        let max_top = self.buffered.len().saturating_sub(page);
        self.top = (self.top + delta).min(max_top);
    }

    /// Scroll to the next buffered line below the current top that contains
    /// the search string, pulling more lines as needed. No wrap-around.
    fn jump_to_next_match(&mut self, page: usize) {
        let Some(query) = self.search.clone() else {
            return;
        };

        let mut idx = self.top + 1;
        loop {
            self.ensure_buffered(idx + 1);
            if idx >= self.buffered.len() {
                return;
            }
            if self.buffered[idx].contains(&query) {
                self.ensure_buffered(idx + page + 1);
                self.top = idx.min(self.buffered.len().saturating_sub(1));
                return;
            }
            idx += 1;
        }
    }

    /// Read a search string on the status row; Enter confirms, Esc cancels.
    fn read_search_query(
        &mut self,
        stdout: &mut io::Stdout,
        page: usize,
    ) -> Result<Option<String>> {
        let mut query = String::new();
        loop {
            let (cols, _) = terminal::size()?;
            queue!(
                stdout,
                cursor::MoveTo(0, page as u16),
                Clear(ClearType::CurrentLine),
                Print(truncate_to_width(&format!("/{}", query), cols as usize)),
            )?;
            stdout.flush()?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Enter => {
                        return Ok(if query.is_empty() { None } else { Some(query) });
                    }
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Backspace => {
                        query.pop();
                    }
                    KeyCode::Char(c) => query.push(c),
                    _ => {}
                }
            }
        }
    }

    fn draw(&self, stdout: &mut io::Stdout, cols: usize, page: usize) -> Result<()> {
        for row in 0..page {
            let text = self.buffered.get(self.top + row).map(String::as_str).unwrap_or("");
            queue!(
                stdout,
                cursor::MoveTo(0, row as u16),
                Clear(ClearType::CurrentLine),
                Print(truncate_to_width(text, cols)),
            )?;
        }

        let shown_to = (self.top + page).min(self.buffered.len());
        let total = if self.exhausted {
            format!("{}", self.buffered.len())
        } else {
            format!("{}+", self.buffered.len())
        };
        let status = format!(
            " lines {}-{}/{} | q: quit · /: search · n: next match ",
            self.top + 1,
            shown_to,
            total
        );
        queue!(
            stdout,
            cursor::MoveTo(0, page as u16),
            Clear(ClearType::CurrentLine),
            Print(truncate_to_width(&status, cols)),
        )?;

        stdout.flush()?;
        Ok(())
    }
}
