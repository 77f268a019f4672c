//! Profanity wordlist.
//!
//! One term per line, case-sensitive. Terms may be multi-word phrases
//! ("gosh darn"). Iteration order is file order, which the masker relies
//! on.
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Error;

pub struct Wordlist {
    terms: Vec<String>,
}

impl Wordlist {
    /// Build a wordlist from terms. Empty terms are dropped: an empty
    /// term matches everywhere and can never be masked away.
    pub fn new(terms: Vec<String>) -> Self {
        let terms = terms.into_iter().filter(|t| !t.is_empty()).collect();
        Self { terms }
    }

    /// Read a line-delimited wordlist file. A missing or unreadable file
    /// is fatal: no masking can happen without the list.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(src)?;
        let list = Self::new(raw.lines().map(String::from).collect());
        debug!("read {} terms from {:?}", list.terms.len(), src);
        Ok(list)
    }

    /// Terms in file order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
