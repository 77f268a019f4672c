/*! Joke records and corpora.

A [Joke] is one record with its raw fields and every derived artifact
(sentences, tokens, masked tokens, profanity count, serialized
representations), computed eagerly at construction. A [Corpus] owns an
ingestion-ordered collection of them.

!*/

#[allow(clippy::module_inception)]
mod corpus;
mod joke;

pub use corpus::Corpus;
pub use joke::{Joke, JokeMap, RawJoke};
