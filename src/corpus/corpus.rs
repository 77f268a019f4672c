use std::path::Path;

use log::info;
use rand::seq::SliceRandom;

use crate::error::Error;
use crate::io::reader;
use crate::io::writer::{self, Sink};
use crate::transformers::Wordlist;

use super::Joke;

/// An ingestion-ordered collection of jokes.
///
/// Built once from a source, read-only afterwards. Order is insertion
/// order; [Corpus::ranked] sorts a borrowed view, never the corpus.
pub struct Corpus {
    jokes: Vec<Joke>,
}

impl Corpus {
    /// Ingest a source file (`.csv` or `.json`) and derive every record.
    pub fn from_path(src: &Path, wordlist: &Wordlist) -> Result<Self, Error> {
        let records = reader::read_records(src)?;
        let corpus = Self::from_raw(records, wordlist)?;
        info!("ingested {} jokes from {:?}", corpus.len(), src);
        Ok(corpus)
    }

    /// Derive records from already-ingested raw tuples, in order.
    /// The first malformed record aborts the whole build.
    pub fn from_raw(
        records: Vec<super::RawJoke>,
        wordlist: &Wordlist,
    ) -> Result<Self, Error> {
        let jokes = records
            .into_iter()
            .map(|raw| Joke::from_raw(raw, wordlist))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { jokes })
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Uniform random pick. [None] on an empty corpus.
    pub fn random_joke(&self) -> Option<&Joke> {
        self.jokes.choose(&mut rand::thread_rng())
    }

    /// Jokes sorted by the rating comparator: highest rating first.
    pub fn ranked(&self) -> Vec<&Joke> {
        let mut ranked: Vec<&Joke> = self.jokes.iter().collect();
        ranked.sort_by(|a, b| a.cmp_by_rating(b));
        ranked
    }

    /// Serialize the whole corpus as one XML tree document and hand the
    /// bytes to the sink.
    pub fn save_as_xml<S: Sink>(&self, sink: &mut S) -> Result<(), Error> {
        let document = writer::xml::document(&self.jokes)?;
        sink.persist(&document)
    }

    /// Serialize the whole corpus as one JSON map document, keyed by
    /// consecutive indices, and hand the bytes to the sink.
    pub fn save_as_json<S: Sink>(&self, sink: &mut S) -> Result<(), Error> {
        let document = writer::json::document(&self.jokes)?;
        sink.persist(&document)
    }
}
