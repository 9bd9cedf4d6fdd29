//! Core data types that flow through the scan pipeline.

/// One phrase-window occurrence found in the source text.
///
/// `start` and `end` are character indices into the scanned text (not
/// byte offsets). `between` holds the inner words with every run of
/// whitespace collapsed to a single space; `num_words` is its word
/// count and always lies within the configured bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub between: String,
    pub num_words: usize,
    pub left_context: String,
    pub right_context: String,
}
