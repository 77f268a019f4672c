//! JSON map document.
//!
//! One top-level object keyed by consecutive indices (`"0"`, `"1"`, …) in
//! corpus order; each value is a record's map representation. 2-space
//! indentation.
use std::collections::BTreeMap;

use crate::corpus::{Joke, JokeMap};
use crate::error::Error;

pub fn document(jokes: &[Joke]) -> Result<Vec<u8>, Error> {
    let indexed: BTreeMap<usize, &JokeMap> = jokes
        .iter()
        .enumerate()
        .map(|(i, joke)| (i, joke.map_repr()))
        .collect();

    Ok(serde_json::to_vec_pretty(&indexed)?)
}
