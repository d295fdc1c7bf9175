//! Full-screen fuzzy selection prompt (category and conversation pickers).

mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::Selector;

use terminal::TerminalManager;

/// Run a fuzzy selector over `items` and return the index of the chosen
/// item, or `None` when the user cancels.
pub fn run_selector(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    let mut manager = TerminalManager::new()?;
    let mut selector = Selector::new(prompt, items);
    let chosen = selector.run(manager.terminal_mut());
    manager.restore()?;
    chosen
}
