use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use memo_pad_core::{HistoryConfig, RedoPolicy, TextBuffer, TextHistory};

/// Demonstrates snapshot-based undo/redo on a text buffer.
#[derive(Parser, Debug)]
#[command(name = "memo-pad", version, about)]
struct Cli {
    /// Text fragments to append, saving a snapshot after each one.
    #[arg(default_values = ["Hello, ", "world!"])]
    fragments: Vec<String>,

    /// JSON history config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum snapshots to keep (0 = unbounded). Overrides the config file.
    #[arg(long = "max-depth")]
    max_depth: Option<usize>,

    /// Keep the redo branch when saving after an undo.
    #[arg(long = "retain-redo")]
    retain_redo: bool,
}

impl Cli {
    /// Builds the history config from the file (if any) plus flag overrides.
    fn history_config(&self) -> Result<HistoryConfig> {
        let mut config = match &self.config {
            Some(path) => HistoryConfig::load(path)?,
            None => HistoryConfig::default(),
        };
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        if self.retain_redo {
            config.redo_policy = RedoPolicy::Retain;
        }
        Ok(config)
    }
}

/// Appends and saves each fragment, then prints the content, undoes once
/// and redoes once, printing after each step.
fn run(fragments: &[String], config: HistoryConfig, out: &mut impl Write) -> Result<()> {
    let mut buffer = TextBuffer::new();
    let mut history = TextHistory::with_config(config);

    for fragment in fragments {
        buffer.append(fragment);
        history.save(&buffer);
    }
    writeln!(out, "Current content: {}", buffer.content())?;

    if !history.undo(&mut buffer) {
        tracing::info!("Nothing to undo");
    }
    writeln!(out, "Undo: {}", buffer.content())?;

    if !history.redo(&mut buffer) {
        tracing::info!("Nothing to redo");
    }
    writeln!(out, "Redo: {}", buffer.content())?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.history_config()?;
    tracing::debug!("Starting memo-pad with {config:?}");

    let stdout = std::io::stdout();
    run(&cli.fragments, config, &mut stdout.lock())
}
