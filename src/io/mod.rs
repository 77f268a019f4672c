/*! I/O.

Reading of joke sources (delimited rows, structured documents) and
writing of serialized corpus documents.

!*/

pub mod reader;
pub mod writer;
