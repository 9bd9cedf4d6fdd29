//! Pipeline orchestration: acquire → trim → scan → report.
//!
//! A single forward pass; each stage consumes the previous stage's full
//! output. Status lines go to stdout. Any stage failure aborts the run,
//! and files already written by earlier stages are left as-is.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::fetch;
use crate::report;
use crate::scan::Pattern;
use crate::trim;

/// Run the full pipeline.
///
/// `input` switches the source stage to a local file; otherwise the
/// configured URL is fetched. With `dry_run` the scan still happens but
/// no output files are written.
pub async fn run(config: &Config, input: Option<&Path>, dry_run: bool) -> Result<()> {
    // Bad word bounds must fail before any network or file work.
    let pattern = Pattern::new(&config.scan)?;

    let text = match input {
        Some(path) => {
            println!("read {}", path.display());
            fetch::read_text(path)?
        }
        None => {
            println!("fetch {}", config.source.url);
            fetch::fetch_text(&config.source.url, config.source.timeout_secs).await?
        }
    };
    println!(
        "  body: {} characters",
        format_number(text.chars().count() as u64)
    );

    let body = if config.scan.trim_boilerplate {
        let trimmed = trim::trim_boilerplate(&text);
        if trimmed.len() < text.len() {
            println!(
                "  trimmed boilerplate: {} characters kept",
                format_number(trimmed.chars().count() as u64)
            );
        }
        trimmed
    } else {
        text.as_str()
    };

    println!(
        "scan `{} ... {}` ({}..={} inner words)",
        config.scan.first_word, config.scan.last_word, config.scan.min_words, config.scan.max_words
    );
    let matches = pattern.scan(body);
    println!("  matches: {}", format_number(matches.len() as u64));

    if dry_run {
        println!("dry-run, no files written");
        println!("ok");
        return Ok(());
    }

    report::ensure_out_dir(&config.output.dir)?;

    let csv_path = config.output.csv_path();
    report::write_csv(&csv_path, &matches)?;
    println!("  wrote {} ({} rows)", csv_path.display(), matches.len());

    let preview_path = config.output.preview_path();
    report::write_preview(
        &preview_path,
        &config.scan,
        &matches,
        config.output.preview_limit,
    )?;
    println!(
        "  wrote {} ({} entries)",
        preview_path.display(),
        matches.len().min(config.output.preview_limit)
    );

    println!("ok");
    Ok(())
}

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result.chars().rev().collect()
}
