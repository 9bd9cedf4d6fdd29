//! # gutenscan CLI
//!
//! Downloads a public-domain text and scans it for a bounded phrase
//! window, writing a CSV of matches and a markdown preview.
//!
//! ## Usage
//!
//! ```bash
//! # Stock run: Frankenstein, `for <1..=12 words> years`, ./outputs
//! gutenscan
//!
//! # Scan a different book
//! gutenscan --url https://www.gutenberg.org/cache/epub/1342/pg1342.txt
//!
//! # Scan a local file, tighter window, custom output directory
//! gutenscan --input book.txt --min-words 2 --max-words 6 --out-dir reports
//!
//! # Count matches without writing anything
//! gutenscan --dry-run
//! ```
//!
//! All settings can also come from a TOML file via `--config`; CLI
//! flags override it. Without `--config`, built-in defaults are used.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use gutenscan::config::{self, Config};
use gutenscan::pipeline;

/// gutenscan — scan a downloaded text for bounded phrase windows.
#[derive(Parser)]
#[command(
    name = "gutenscan",
    about = "Fetch a public-domain text and scan it for bounded phrase windows",
    version,
    long_about = "Downloads a text over HTTP (or reads a local file), optionally strips \
    Project Gutenberg boilerplate, finds every occurrence of an anchored phrase window \
    (by default `for <1..=12 letter-only words> years`), and writes a CSV of matches \
    plus a markdown preview."
)]
struct Cli {
    /// Path to configuration file (TOML). Built-in defaults are used
    /// when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source URL to download (overrides config).
    #[arg(long)]
    url: Option<String>,

    /// Scan a local UTF-8 file instead of downloading.
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Output directory for the CSV and preview (overrides config).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Fewest inner words a match may carry (overrides config).
    #[arg(long)]
    min_words: Option<usize>,

    /// Most inner words a match may carry (overrides config).
    #[arg(long)]
    max_words: Option<usize>,

    /// Keep distributor boilerplate instead of trimming it.
    #[arg(long)]
    no_trim: bool,

    /// Scan without writing any output files.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };

    if let Some(url) = cli.url {
        cfg.source.url = url;
    }
    if let Some(dir) = cli.out_dir {
        cfg.output.dir = dir;
    }
    if let Some(min) = cli.min_words {
        cfg.scan.min_words = min;
    }
    if let Some(max) = cli.max_words {
        cfg.scan.max_words = max;
    }
    if cli.no_trim {
        cfg.scan.trim_boilerplate = false;
    }

    cfg.validate()?;

    pipeline::run(&cfg, cli.input.as_deref(), cli.dry_run).await
}
