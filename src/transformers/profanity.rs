//! Profanity masking over tokenized sentences.
//!
//! The masker works on a working text made of the current tokens joined by
//! single spaces, not on token indices: substring matching is what catches
//! multi-word phrases, and the replacement length has to come from the
//! original token. Matching is case-sensitive and not word-boundary-aware,
//! so a term that starts a longer token masks that whole token.
use log::trace;

use super::Wordlist;

/// Masks profane terms in tokenized sentences, counting occurrences.
///
/// Masking replaces tokens in place with `#`-runs of the same character
/// length; the masked token list always has the length of the input list.
pub struct ProfanityMasker<'a> {
    wordlist: &'a Wordlist,
}

impl<'a> ProfanityMasker<'a> {
    pub fn new(wordlist: &'a Wordlist) -> Self {
        Self { wordlist }
    }

    /// Mask every sentence of a tokenized text.
    /// Returns the masked token lists and the total occurrence count.
    pub fn mask(&self, tokenized: &[Vec<String>]) -> (Vec<Vec<String>>, usize) {
        let mut masked = Vec::with_capacity(tokenized.len());
        let mut occurrences = 0;

        for sentence in tokenized {
            let (tokens, count) = self.mask_sentence(sentence);
            masked.push(tokens);
            occurrences += count;
        }

        (masked, occurrences)
    }

    /// Mask a single tokenized sentence.
    ///
    /// For each term, the working text is re-scanned until the term no
    /// longer occurs: the leftmost match is located, mapped back onto a
    /// token span, and the span is replaced by `#`-runs. A match that
    /// cannot be aligned to a token start makes no progress and ends the
    /// scan for that term without counting.
    pub fn mask_sentence(&self, tokens: &[String]) -> (Vec<String>, usize) {
        let mut tokens: Vec<String> = tokens.to_vec();
        let mut occurrences = 0;

        for term in self.wordlist.terms() {
            let mut text = tokens.join(" ");

            while let Some(at) = text.find(term.as_str()) {
                // index of the first token under the match: word count of
                // the text in front of it, minus the separator character
                let before = if at == 0 {
                    0
                } else {
                    let front = &text[..at];
                    let front = match front.char_indices().last() {
                        Some((i, _)) => &front[..i],
                        None => front,
                    };
                    front.split(' ').count()
                };

                let span = term.split(' ').count();
                let end = usize::min(before + span, tokens.len());
                if before >= end {
                    trace!("term {:?} matched past the token list, skipping", term);
                    break;
                }

                let replacement: Vec<String> = tokens[before..end]
                    .iter()
                    .map(|word| "#".repeat(word.chars().count()))
                    .collect();

                let mut rebuilt = Vec::with_capacity(tokens.len());
                rebuilt.extend_from_slice(&tokens[..before]);
                rebuilt.extend(replacement);
                rebuilt.extend_from_slice(&tokens[end..]);

                let rejoined = rebuilt.join(" ");
                if rejoined == text {
                    // mid-token match, already-masked span: nothing left to do
                    break;
                }

                tokens = rebuilt;
                text = rejoined;
                occurrences += 1;
            }
        }

        (tokens, occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProfanityMasker, Wordlist};

    fn gen_wordlist(terms: &[&str]) -> Wordlist {
        Wordlist::new(terms.iter().map(|t| t.to_string()).collect())
    }

    fn gen_tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_term() {
        let wordlist = gen_wordlist(&["darn"]);
        let masker = ProfanityMasker::new(&wordlist);

        let (masked, count) = masker.mask_sentence(&gen_tokens(&["that", "darn", "cat"]));

        assert_eq!(masked, vec!["that", "####", "cat"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_multi_word_term() {
        let wordlist = gen_wordlist(&["gosh darn"]);
        let masker = ProfanityMasker::new(&wordlist);

        let (masked, count) = masker.mask_sentence(&gen_tokens(&["gosh", "darn", "it"]));

        assert_eq!(masked, vec!["####", "####", "it"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_repeated_term() {
        let wordlist = gen_wordlist(&["darn"]);
        let masker = ProfanityMasker::new(&wordlist);

        let (masked, count) = masker.mask_sentence(&gen_tokens(&["a", "darn", "darn", "day"]));

        assert_eq!(masked, vec!["a", "####", "####", "day"]);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_several_terms() {
        let wordlist = gen_wordlist(&["darn", "heck"]);
        let masker = ProfanityMasker::new(&wordlist);

        let (masked, count) =
            masker.mask_sentence(&gen_tokens(&["darn", "it", "to", "heck", "!"]));

        assert_eq!(masked, vec!["####", "it", "to", "####", "!"]);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_term_inside_longer_token() {
        // no word boundaries: "darn" masks the whole of "darnedest"
        let wordlist = gen_wordlist(&["darn"]);
        let masker = ProfanityMasker::new(&wordlist);

        let (masked, count) = masker.mask_sentence(&gen_tokens(&["my", "darnedest", "try"]));

        assert_eq!(masked, vec!["my", "#########", "try"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unaligned_match_terminates() {
        // the match sits in the tail of "class"; no token span lines up
        let wordlist = gen_wordlist(&["ss"]);
        let masker = ProfanityMasker::new(&wordlist);

        let (masked, count) = masker.mask_sentence(&gen_tokens(&["class"]));

        assert_eq!(masked, vec!["class"]);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_no_match() {
        let wordlist = gen_wordlist(&["darn"]);
        let masker = ProfanityMasker::new(&wordlist);
        let tokens = gen_tokens(&["a", "clean", "joke", "."]);

        let (masked, count) = masker.mask_sentence(&tokens);

        assert_eq!(masked, tokens);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_shape_is_preserved() {
        let wordlist = gen_wordlist(&["darn", "gosh darn"]);
        let masker = ProfanityMasker::new(&wordlist);
        let tokenized = vec![
            gen_tokens(&["gosh", "darn", "it", "!"]),
            gen_tokens(&["clean", "."]),
            Vec::new(),
        ];

        let (masked, _) = masker.mask(&tokenized);

        assert_eq!(masked.len(), tokenized.len());
        for (masked, tokens) in masked.iter().zip(tokenized.iter()) {
            assert_eq!(masked.len(), tokens.len());
        }
    }

    #[test]
    fn test_masking_is_idempotent() {
        let wordlist = gen_wordlist(&["darn", "heck"]);
        let masker = ProfanityMasker::new(&wordlist);

        let (masked, count) = masker.mask_sentence(&gen_tokens(&["darn", "heck", "yes"]));
        assert_eq!(count, 2);

        let (remasked, count) = masker.mask_sentence(&masked);
        assert_eq!(remasked, masked);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_mask_counts_across_sentences() {
        let wordlist = gen_wordlist(&["darn"]);
        let masker = ProfanityMasker::new(&wordlist);
        let tokenized = vec![
            gen_tokens(&["darn", "cat", "."]),
            gen_tokens(&["darn", "dog", "."]),
        ];

        let (_, count) = masker.mask(&tokenized);

        assert_eq!(count, 2);
    }
}
