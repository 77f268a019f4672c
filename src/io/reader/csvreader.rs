//! Delimited-row reader.
//!
//! Rows are headerless `[author, link, text, rating, time]` in that fixed
//! column order. Columns past the fifth are ignored; missing columns make
//! the row malformed.
use std::path::Path;

use csv::StringRecord;

use crate::corpus::RawJoke;
use crate::error::Error;

pub fn read(src: &Path) -> Result<Vec<RawJoke>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(src)?;

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(from_row(&row?)?);
    }
    Ok(records)
}

fn from_row(row: &StringRecord) -> Result<RawJoke, Error> {
    let field = |i: usize| {
        row.get(i).ok_or_else(|| {
            Error::MalformedRecord(format!("row has {} columns, expected 5", row.len()))
        })
    };

    Ok(RawJoke::new(
        field(0)?,
        field(1)?,
        field(2)?,
        field(3)?,
        field(4)?,
    ))
}
