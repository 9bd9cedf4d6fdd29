//! Serialize scan results as a CSV table and a markdown preview.
//!
//! The CSV carries every match; the preview shows the first
//! `preview_limit` with their context, for quick human review.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ScanConfig;
use crate::models::PhraseMatch;

/// Create the output directory (and parents) if absent.
pub fn ensure_out_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// Write the full match table as CSV.
pub fn write_csv(path: &Path, matches: &[PhraseMatch]) -> Result<()> {
    std::fs::write(path, csv_document(matches))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write the markdown preview.
pub fn write_preview(
    path: &Path,
    scan: &ScanConfig,
    matches: &[PhraseMatch],
    limit: usize,
) -> Result<()> {
    std::fs::write(path, preview_document(scan, matches, limit))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Render the CSV document: a fixed header row plus one row per match
/// in scan order.
pub fn csv_document(matches: &[PhraseMatch]) -> String {
    let mut out =
        String::from("match,start,end,between_words,num_words,left_context,right_context\n");
    for m in matches {
        let row = [
            csv_field(&m.text),
            m.start.to_string(),
            m.end.to_string(),
            csv_field(&m.between),
            m.num_words.to_string(),
            csv_field(&m.left_context),
            csv_field(&m.right_context),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains the delimiter, a quote, or a line
/// break; embedded quotes are doubled.
fn csv_field(field: &str) -> String {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the markdown preview: title, total-count summary, and a
/// numbered list of up to `limit` matches with one context line each.
pub fn preview_document(scan: &ScanConfig, matches: &[PhraseMatch], limit: usize) -> String {
    let shown = matches.len().min(limit);

    let mut lines: Vec<String> = vec![
        format!("# Phrase scan: `{} ... {}`", scan.first_word, scan.last_word),
        String::new(),
        format!(
            "Total matches: **{}** (min_words={}, max_words={})",
            matches.len(),
            scan.min_words,
            scan.max_words
        ),
        String::new(),
        format!("### First {} examples", shown),
        String::new(),
    ];

    for (i, m) in matches.iter().take(limit).enumerate() {
        lines.push(format!(
            "{}. `{}` - between = `{}` (words={})",
            i + 1,
            m.text,
            m.between,
            m.num_words
        ));
        lines.push(format!(
            "   - context: ...{} **{}** {}...",
            m.left_context, m.text, m.right_context
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}
