/*! Ingestion.

One reader per source format, each yielding ordered [RawJoke] tuples.
[read_records] dispatches on the source's file extension.

!*/

mod csvreader;
mod jsonreader;

use std::path::Path;

use log::debug;

use crate::corpus::RawJoke;
use crate::error::Error;

/// Read every record of a source file, in source order.
///
/// Dispatches on the file extension; anything but `.csv`/`.json` is an
/// [Error::UnsupportedFormat].
pub fn read_records(src: &Path) -> Result<Vec<RawJoke>, Error> {
    match src.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            debug!("reading {:?} as delimited rows", src);
            csvreader::read(src)
        }
        Some("json") => {
            debug!("reading {:?} as a structured document", src);
            jsonreader::read(src)
        }
        _ => Err(Error::UnsupportedFormat(src.to_path_buf())),
    }
}
