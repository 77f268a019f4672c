/*! Token transformers.

Detects profane terms in tokenized sentences and masks them in place,
against a line-delimited [Wordlist].

!*/

mod profanity;
mod wordlist;

pub use profanity::ProfanityMasker;
pub use wordlist::Wordlist;
