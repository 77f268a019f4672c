//! Structured-document reader.
//!
//! The source is one top-level object; each entry's *values*, in document
//! order, supply `[author, link, text, rating, time]`. Entry keys are
//! ignored, as are values past the fifth, so a document produced by the
//! JSON writer (which carries a trailing `profanity score`) reads back
//! cleanly.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};

use crate::corpus::RawJoke;
use crate::error::Error;

pub fn read(src: &Path) -> Result<Vec<RawJoke>, Error> {
    let file = File::open(src)?;
    let document: Map<String, Value> = serde_json::from_reader(BufReader::new(file))?;

    let mut records = Vec::new();
    for (key, entry) in &document {
        records.push(from_entry(key, entry)?);
    }
    Ok(records)
}

fn from_entry(key: &str, entry: &Value) -> Result<RawJoke, Error> {
    let fields = entry
        .as_object()
        .ok_or_else(|| Error::MalformedRecord(format!("entry {:?} is not an object", key)))?;

    let mut values = fields.values();
    let mut field = |name: &str| {
        values
            .next()
            .ok_or_else(|| {
                Error::MalformedRecord(format!("entry {:?} is missing a {} value", key, name))
            })
            .and_then(field_string)
    };

    Ok(RawJoke::new(
        &field("author")?,
        &field("link")?,
        &field("text")?,
        &field("rating")?,
        &field("time")?,
    ))
}

/// Accept strings verbatim and stringify numbers; the source format's
/// values are not uniformly typed (ratings and scores come back as
/// numbers).
fn field_string(value: &Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::MalformedRecord(format!(
            "unexpected value {}",
            other
        ))),
    }
}
