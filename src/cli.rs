//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "gelos", about = "joke corpus processing tool.")]
/// Holds every command that is callable by the `gelos` command.
pub enum Gelos {
    #[structopt(about = "Convert a joke source into an XML or JSON corpus document")]
    Convert(Convert),
    #[structopt(about = "Print a joke from the corpus, profanity masked")]
    Tell(Tell),
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
pub struct Convert {
    #[structopt(parse(from_os_str), help = "source corpus (.csv or .json)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination document (.xml or .json picks the format)"
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "wordlist",
        help = "path to the profanity wordlist",
        default_value = "profanities.txt"
    )]
    pub wordlist: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Tell command and parameters.
pub struct Tell {
    #[structopt(parse(from_os_str), help = "source corpus (.csv or .json)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "wordlist",
        help = "path to the profanity wordlist",
        default_value = "profanities.txt"
    )]
    pub wordlist: PathBuf,
    #[structopt(
        short = "a",
        long = "all",
        help = "tell every multi-sentence joke, pausing between jokes"
    )]
    pub all: bool,
}
