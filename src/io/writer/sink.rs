//! Output sink seam.
use std::io::Write;

use crate::error::Error;

/// Accepts one finished, serialized corpus document and persists it.
pub trait Sink {
    fn persist(&mut self, document: &[u8]) -> Result<(), Error>;
}

/// Any [Write] destination is a sink, files and in-memory buffers alike.
impl<W: Write> Sink for W {
    fn persist(&mut self, document: &[u8]) -> Result<(), Error> {
        self.write_all(document)?;
        self.flush()?;
        Ok(())
    }
}
