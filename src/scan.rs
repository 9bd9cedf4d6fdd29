//! Bounded phrase-window matcher.
//!
//! Finds every non-overlapping occurrence of
//! `<first> <1..=max_words letter-only words> <last>` in a text, in
//! left-to-right order. The upper word bound is enforced structurally
//! by the pattern; the lower bound is a post-filter on the normalized
//! capture. Offsets reported on each match are character indices.

use anyhow::{bail, Result};
use regex::Regex;

use crate::config::ScanConfig;
use crate::models::PhraseMatch;

/// A compiled phrase-window pattern.
pub struct Pattern {
    regex: Regex,
    min_words: usize,
    context_chars: usize,
}

impl Pattern {
    /// Compile the scanning rule for the given configuration.
    ///
    /// Fails before any scanning when the word bounds are invalid or an
    /// anchor word is empty. Anchor words are matched case-insensitively
    /// at word boundaries; literal regex metacharacters in them are
    /// escaped.
    pub fn new(config: &ScanConfig) -> Result<Self> {
        if config.min_words < 1 {
            bail!("scan.min_words must be >= 1");
        }
        if config.max_words < config.min_words {
            bail!("scan.max_words must be >= scan.min_words");
        }
        if config.first_word.trim().is_empty() || config.last_word.trim().is_empty() {
            bail!("scan anchor words must be non-empty");
        }

        let first = regex::escape(config.first_word.trim());
        let last = regex::escape(config.last_word.trim());
        let inner = format!(r"([A-Za-z]+(?:\s+[A-Za-z]+){{0,{}}})", config.max_words - 1);
        let pattern = format!(r"(?i)\b{}\s+{}\s+{}\b", first, inner, last);

        Ok(Self {
            regex: Regex::new(&pattern)?,
            min_words: config.min_words,
            context_chars: config.context_chars,
        })
    }

    /// Scan `text` and return all retained matches in scan order.
    pub fn scan(&self, text: &str) -> Vec<PhraseMatch> {
        let mut matches = Vec::new();

        for caps in self.regex.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let inner = caps.get(1).unwrap();

            let between = normalize_space(inner.as_str());
            let num_words = between.split(' ').count();
            if num_words < self.min_words {
                continue;
            }

            let start = text[..whole.start()].chars().count();
            let end = start + whole.as_str().chars().count();

            matches.push(PhraseMatch {
                text: whole.as_str().to_string(),
                start,
                end,
                between,
                num_words,
                left_context: normalize_space(left_window(text, whole.start(), self.context_chars)),
                right_context: normalize_space(right_window(text, whole.end(), self.context_chars)),
            });
        }

        matches
    }
}

/// Collapse any run of whitespace (including newlines) to a single
/// space and trim the ends.
pub fn normalize_space(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Up to `chars` characters of text ending at byte offset `start`,
/// clamped to the start of the text.
fn left_window(text: &str, start: usize, chars: usize) -> &str {
    if chars == 0 {
        return "";
    }
    let begin = text[..start]
        .char_indices()
        .rev()
        .nth(chars - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &text[begin..start]
}

/// Up to `chars` characters of text starting at byte offset `end`,
/// clamped to the end of the text.
fn right_window(text: &str, end: usize, chars: usize) -> &str {
    let stop = text[end..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[end..stop]
}
