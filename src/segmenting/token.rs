//! Word-level tokenization.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"[\w']+|\?|\.|\n|,|!").unwrap();
}

/// Splits one sentence into word and punctuation tokens.
///
/// A token is either a maximal run of word characters and apostrophes, or
/// a single `?`, `.`, newline, `,` or `!`. Every other character (plain
/// spaces included) is discarded, so the only reconstruction available
/// afterwards is re-joining tokens with single spaces.
#[derive(Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a single sentence.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        TOKEN
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
