//! Distributor boilerplate trimming.
//!
//! Project Gutenberg wraps the body of every ebook in fixed START/END
//! marker lines. When both markers are present and ordered, only the
//! text strictly between them is kept; otherwise the input passes
//! through unchanged. This stage never fails.

use regex::Regex;
use std::sync::OnceLock;

fn start_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\*\*\* START OF THIS PROJECT GUTENBERG EBOOK .* \*\*\*")
            .expect("start marker pattern is valid")
    })
}

fn end_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\*\*\* END OF THIS PROJECT GUTENBERG EBOOK .* \*\*\*")
            .expect("end marker pattern is valid")
    })
}

/// Keep the body between the START/END markers. Returns the input
/// unchanged when either marker is missing or they are out of order.
pub fn trim_boilerplate(text: &str) -> &str {
    let start = start_marker().find(text);
    let end = end_marker().find(text);
    match (start, end) {
        (Some(s), Some(e)) if s.end() < e.start() => &text[s.end()..e.start()],
        _ => text,
    }
}
