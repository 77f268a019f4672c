/*! Corpus document writers.

Builds the two serialized corpus documents (XML tree, JSON map) and
persists them through the [Sink] seam.

!*/

pub mod json;
mod sink;
pub mod xml;

pub use sink::Sink;
