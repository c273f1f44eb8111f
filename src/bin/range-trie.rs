use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use range_trie::{Config, Index, TrieError, WordList};
use tracing::{debug, info, Level};

/// Build a compressed trie over a word list and complete prefixes against it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Whitespace-separated word list, inserted in file order.
    #[arg(short, long)]
    words: PathBuf,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the trie structure before answering.
    #[arg(long)]
    dump: bool,

    /// Log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefixes to complete. Read from stdin, one per line, when omitted.
    #[arg(value_name = "PREFIX")]
    prefixes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    debug!(?config, "configuration");

    let text = std::fs::read_to_string(&cli.words)
        .with_context(|| format!("reading {}", cli.words.display()))?;
    let words = WordList::from_text(&text, config.alphabet)?;

    let index = {
        let start = Instant::now();
        let index = Index::from_list(words, config)?;
        info!(
            words = index.words().len(),
            stored = index.len(),
            nodes = index.trie().node_count(),
            "built trie in {} ms",
            start.elapsed().as_millis()
        );
        index
    };

    if cli.dump {
        print!("{}", index.dump());
    }

    if !cli.prefixes.is_empty() {
        for prefix in &cli.prefixes {
            answer(&index, prefix)?;
        }
    } else if !std::io::stdin().is_terminal() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            answer(&index, line.trim())?;
        }
    }

    Ok(())
}

fn answer(index: &Index, prefix: &str) -> anyhow::Result<()> {
    match index.complete(prefix) {
        Ok(mut found) => {
            found.sort_unstable();
            println!("{prefix}: {}", found.join(" "));
        }
        Err(TrieError::PrefixNotFound { .. }) => println!("{prefix}: no match"),
        Err(TrieError::EmptyInput) => println!("{prefix}: no words loaded"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
