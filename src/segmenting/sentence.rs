//! Sentence-level segmentation.
//!
//! A sentence is a maximal run of characters that are not `.`, `!`, `?` or
//! newline, along with its trailing `.?!` terminators. A bare newline is
//! kept as a one-character sentence of its own, so that display order can
//! be reconstructed later on.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SENTENCE: Regex = Regex::new(r" ?([^.!?\n]+[.?!]*|\n)").unwrap();
}

/// Splits raw text into an ordered sequence of sentences.
///
/// At most one leading space is stripped per sentence; any other
/// whitespace is kept verbatim.
#[derive(Debug, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences, in order of appearance.
    /// Any string is valid input; empty input yields no sentences.
    pub fn split(&self, text: &str) -> Vec<String> {
        SENTENCE
            .captures_iter(text)
            .map(|c| c[1].to_string())
            .collect()
    }
}
