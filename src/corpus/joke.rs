use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::segmenting::{SentenceSplitter, Tokenizer};
use crate::transformers::{ProfanityMasker, Wordlist};

/// One ingested record, still raw: the five source fields in ingestion
/// order, rating not yet parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawJoke {
    pub author: String,
    pub link: String,
    pub text: String,
    pub rating: String,
    pub time: String,
}

impl RawJoke {
    pub fn new(author: &str, link: &str, text: &str, rating: &str, time: &str) -> Self {
        Self {
            author: author.to_string(),
            link: link.to_string(),
            text: text.to_string(),
            rating: rating.to_string(),
            time: time.to_string(),
        }
    }
}

/// The map representation of a [Joke].
///
/// Key order and naming are a compatibility contract: `profanity score`
/// carries a space here while the tree representation uses
/// `profanity_score`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JokeMap {
    pub author: String,
    pub link: String,
    pub joke: String,
    pub rating: i64,
    pub time: String,
    #[serde(rename = "profanity score")]
    pub profanity_score: usize,
}

/// A joke with its metadata and derived text-processing artifacts.
///
/// Fully derived at construction by [Joke::from_raw]; immutable
/// afterwards. `masked_tokens` always has the shape of `tokens`: masking
/// replaces tokens in place, never inserts or deletes. Comparison is
/// [Joke::cmp_by_rating], never structural equality.
#[derive(Debug, Clone)]
pub struct Joke {
    author: String,
    link: String,
    text: String,
    rating: i64,
    time: String,
    sentences: Vec<String>,
    tokens: Vec<Vec<String>>,
    masked_tokens: Vec<Vec<String>>,
    profanity_count: usize,
    tree_repr: Vec<(&'static str, String)>,
    map_repr: JokeMap,
}

impl Joke {
    /// Build a record from its raw fields, deriving everything eagerly.
    /// Fails with [Error::MalformedRating] when the rating field does not
    /// parse as an integer.
    pub fn from_raw(raw: RawJoke, wordlist: &Wordlist) -> Result<Self, Error> {
        let rating = raw
            .rating
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::MalformedRating(raw.rating.clone()))?;

        let tokenizer = Tokenizer::new();
        let sentences = SentenceSplitter::new().split(&raw.text);
        let tokens: Vec<Vec<String>> = sentences.iter().map(|s| tokenizer.tokenize(s)).collect();
        let (masked_tokens, profanity_count) = ProfanityMasker::new(wordlist).mask(&tokens);

        // the tree representation keeps the original, unmasked text;
        // masking feeds only the count and the display path
        let tree_repr = vec![
            ("text", raw.text.clone()),
            ("author", raw.author.clone()),
            ("rating", rating.to_string()),
            ("link", raw.link.clone()),
            ("time", raw.time.clone()),
            ("profanity_score", profanity_count.to_string()),
        ];
        let map_repr = JokeMap {
            author: raw.author.clone(),
            link: raw.link.clone(),
            joke: raw.text.clone(),
            rating,
            time: raw.time.clone(),
            profanity_score: profanity_count,
        };

        Ok(Self {
            author: raw.author,
            link: raw.link,
            text: raw.text,
            rating,
            time: raw.time,
            sentences,
            tokens,
            masked_tokens,
            profanity_count,
            tree_repr,
            map_repr,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// The original, unmasked text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> i64 {
        self.rating
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn tokens(&self) -> &[Vec<String>] {
        &self.tokens
    }

    pub fn masked_tokens(&self) -> &[Vec<String>] {
        &self.masked_tokens
    }

    pub fn profanity_count(&self) -> usize {
        self.profanity_count
    }

    /// Ordered `(tag, value)` leaves of the tree representation.
    pub fn tree_repr(&self) -> &[(&'static str, String)] {
        &self.tree_repr
    }

    /// The map representation.
    pub fn map_repr(&self) -> &JokeMap {
        &self.map_repr
    }

    /// Ranking comparator over ratings: a higher-rated joke ranks first,
    /// so sorting with it yields a descending-by-rating order. Every
    /// other field is ignored.
    pub fn cmp_by_rating(&self, other: &Joke) -> Ordering {
        other.rating.cmp(&self.rating)
    }

    /// Masked display text: tokens joined by single spaces, sentences
    /// joined by single spaces.
    pub fn display(&self) -> String {
        self.masked_tokens.iter().map(|s| s.join(" ")).join(" ")
    }

    /// Masked display text split for delivery: everything up to the last
    /// sentence, then the punch line. Jokes with fewer than two sentences
    /// come back in one piece.
    pub fn display_split(&self) -> (String, Option<String>) {
        if self.masked_tokens.len() > 1 {
            let (punchline, build_up) = self.masked_tokens.split_last().unwrap();
            (
                build_up.iter().map(|s| s.join(" ")).join(" "),
                Some(punchline.join(" ")),
            )
        } else {
            (self.display(), None)
        }
    }
}
