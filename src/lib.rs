//! # Gelos
//!
//! Gelos is a pipeline to turn corpora of short jokes into
//! profanity-annotated XML and JSON documents.
//!
//! This project can be used both as a tool to convert and replay joke
//! corpora, or as a lib to integrate joke processing into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! gelos 0.1.0
//! joke corpus processing tool.
//!
//! USAGE:
//!     gelos <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     convert    Convert a joke source into an XML or JSON corpus document
//!     help       Prints this message or the help of the given subcommand(s)
//!     tell       Print a joke from the corpus, profanity masked
//! ```
pub mod cli;
pub mod corpus;
pub mod error;
pub mod io;
pub mod segmenting;
pub mod transformers;
