//! # Gelos
//!
//! Gelos turns corpora of short jokes into profanity-annotated XML and
//! JSON documents, and can replay the masked jokes on the terminal.
use std::fs::File;
use std::thread;
use std::time::Duration;

use structopt::StructOpt;

#[macro_use]
extern crate log;

use gelos::cli;
use gelos::corpus::{Corpus, Joke};
use gelos::error::Error;
use gelos::transformers::Wordlist;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Gelos::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Gelos::Convert(c) => {
            let wordlist = Wordlist::from_path(&c.wordlist)?;
            let corpus = Corpus::from_path(&c.src, &wordlist)?;

            let mut sink = File::create(&c.dst)?;
            match c.dst.extension().and_then(|e| e.to_str()) {
                Some("xml") => corpus.save_as_xml(&mut sink)?,
                Some("json") => corpus.save_as_json(&mut sink)?,
                _ => return Err(Error::UnsupportedFormat(c.dst)),
            }
            info!("wrote corpus document to {:?}", c.dst);
        }

        cli::Gelos::Tell(t) => {
            let wordlist = Wordlist::from_path(&t.wordlist)?;
            let corpus = Corpus::from_path(&t.src, &wordlist)?;

            if t.all {
                for joke in corpus.jokes() {
                    // one-liners have no delivery to pace, skip them
                    if joke.masked_tokens().len() > 1 {
                        tell(joke);
                    }
                    thread::sleep(Duration::from_secs(10));
                }
            } else if let Some(joke) = corpus.random_joke() {
                tell(joke);
            } else {
                warn!("empty corpus, nothing to tell");
            }
        }
    };
    Ok(())
}

/// Print a joke, pausing before the punch line.
fn tell(joke: &Joke) {
    let (build_up, punch_line) = joke.display_split();
    println!("{}", build_up);
    if let Some(punch_line) = punch_line {
        thread::sleep(Duration::from_secs(1));
        println!("{}", punch_line);
    }
}
