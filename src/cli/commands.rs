use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::catalog::ConversationCatalog;
use crate::discovery::{ExportSource, discover_export};
use crate::loader::load_export;
use crate::models::{Category, ExportModel};
use crate::parsers::parse_export_timestamp;
use crate::pins::PinIndex;
use crate::render::{BubbleRenderer, RenderConfig, RenderMode, mode_banner};
use crate::utils::downloads_dir;
use crate::{pager, tui};

#[derive(Parser)]
#[command(name = "takeout-chat-viewer")]
#[command(version = "0.1.0")]
#[command(about = "Browse a Google Chat Takeout export as chat bubbles", long_about = None)]
pub struct Cli {
    /// Path to an extracted Groups directory (default: discover under Downloads)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Your own email address (default: most frequent sender in the export)
    #[arg(long)]
    pub email: Option<String>,

    /// Terminal width override for bubble layout
    #[arg(long)]
    pub width: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the export
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Stats) => show_stats(&cli),
        None => browse(&cli),
    }
}

/// Resolve the export root: the `--root` flag, or whatever discovery finds
/// under the downloads directory. Archives are reported, never unpacked.
fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }

    let downloads = downloads_dir()?;
    match discover_export(&downloads)? {
        Some(ExportSource::ExtractedRoot(root)) => {
            eprintln!("Using export at {}", root.display());
            Ok(root)
        }
        Some(ExportSource::Archive(archive)) => bail!(
            "Found archive {} - extract it first, then re-run (or pass --root)",
            archive.display()
        ),
        None => bail!("No Takeout chat export found under {}", downloads.display()),
    }
}

fn load(cli: &Cli) -> Result<(ExportModel, PinIndex)> {
    let root = resolve_root(cli)?;
    let model = load_export(&root, cli.email.as_deref())?;
    let pins = PinIndex::build(&model);
    Ok((model, pins))
}

fn browse(cli: &Cli) -> Result<()> {
    let (model, pins) = load(cli)?;
    let catalog = ConversationCatalog::new(&model, &pins);

    let categories: Vec<String> =
        ["DM", "SPACE", "PINNED ONLY"].iter().map(|s| s.to_string()).collect();
    let Some(choice) = tui::run_selector("Select category:", &categories)? else {
        return Ok(());
    };

    let pinned_mode = choice == 2;
    let conversations = match choice {
        0 => catalog.list_by_category(Category::DirectMessage),
        1 => catalog.list_by_category(Category::Space),
        _ => catalog.list_pinned_only(),
    };
    if conversations.is_empty() {
        bail!("No chats found");
    }

    let labels: Vec<String> = conversations.iter().map(|c| catalog.label(c)).collect();
    let Some(idx) = tui::run_selector("Select chat:", &labels)? else {
        return Ok(());
    };
    let conversation = conversations[idx];

    let config = match cli.width {
        Some(width) => RenderConfig::with_terminal_width(width),
        None => RenderConfig::detect(),
    };
    let renderer = BubbleRenderer::new(config, model.viewer_email().map(str::to_string));
    let mode = if pinned_mode { RenderMode::PinnedOnly } else { RenderMode::All };

    let lines = mode_banner(mode)
        .into_iter()
        .chain(renderer.render(conversation, mode).map(|line| line.text));
    pager::page_lines(lines)
}

fn show_stats(cli: &Cli) -> Result<()> {
    let (model, pins) = load(cli)?;
    let catalog = ConversationCatalog::new(&model, &pins);

    let dms = catalog.list_by_category(Category::DirectMessage).len();
    let spaces = catalog.list_by_category(Category::Space).len();
    let with_pins = catalog.list_pinned_only().len();

    println!("Takeout Chat Export Statistics");
    println!("================================");
    println!("Conversations: {}", model.conversations().len());
    println!("  Direct messages: {}", dms);
    println!("  Spaces: {}", spaces);
    println!("  With pinned messages: {}", with_pins);
    println!();
    println!("Messages: {}", model.message_count());
    println!("  Pinned: {}", model.pinned_message_count());

    if let Some(viewer) = model.viewer_email() {
        println!();
        println!("Viewer identity: {}", viewer);
    }

    let mut timestamps: Vec<_> = model
        .conversations()
        .iter()
        .flat_map(|c| c.messages.iter())
        .filter_map(|m| parse_export_timestamp(&m.timestamp))
        .collect();
    timestamps.sort();
    if let (Some(oldest), Some(newest)) = (timestamps.first(), timestamps.last()) {
        println!();
        println!("Oldest message: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
        println!("Newest message: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
