//! XML tree document.
//!
//! One `jokes` root wrapping every record's `joke` node in corpus order,
//! each with its ordered leaves (`text`, `author`, `rating`, `link`,
//! `time`, `profanity_score`). UTF-8 with a declaration header, 2-space
//! indentation.
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::corpus::Joke;
use crate::error::Error;

pub fn document(jokes: &[Joke]) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    if jokes.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("jokes")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("jokes")))?;
        for joke in jokes {
            write_joke(&mut writer, joke)?;
        }
        writer.write_event(Event::End(BytesEnd::new("jokes")))?;
    }

    let mut document = writer.into_inner();
    document.push(b'\n');
    Ok(document)
}

fn write_joke(writer: &mut Writer<Vec<u8>>, joke: &Joke) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new("joke")))?;
    for (tag, value) in joke.tree_repr() {
        writer.write_event(Event::Start(BytesStart::new(*tag)))?;
        writer.write_event(Event::Text(BytesText::new(value)))?;
        writer.write_event(Event::End(BytesEnd::new(*tag)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("joke")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::document;
    use crate::corpus::{Joke, RawJoke};
    use crate::transformers::Wordlist;

    fn gen_jokes(texts: &[&str]) -> Vec<Joke> {
        let wordlist = Wordlist::new(vec!["darn".to_string()]);
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let raw = RawJoke::new("author", "link", text, &i.to_string(), "time");
                Joke::from_raw(raw, &wordlist).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_document() {
        let jokes = gen_jokes(&["A darn joke."]);
        let document = String::from_utf8(document(&jokes).unwrap()).unwrap();

        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(document.contains("<jokes>"));
        assert!(document.contains("<joke>"));
        // original text, unmasked, and the stringified score
        assert!(document.contains("<text>A darn joke.</text>"));
        assert!(document.contains("<rating>0</rating>"));
        assert!(document.contains("<profanity_score>1</profanity_score>"));
    }

    #[test]
    fn test_leaf_order() {
        let jokes = gen_jokes(&["One."]);
        let document = String::from_utf8(document(&jokes).unwrap()).unwrap();

        let positions: Vec<usize> = ["<text>", "<author>", "<rating>", "<link>", "<time>", "<profanity_score>"]
            .iter()
            .map(|tag| document.find(tag).unwrap())
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_corpus_order() {
        let jokes = gen_jokes(&["First.", "Second."]);
        let document = String::from_utf8(document(&jokes).unwrap()).unwrap();

        assert!(document.find("First.").unwrap() < document.find("Second.").unwrap());
    }

    #[test]
    fn test_escaping() {
        let jokes = gen_jokes(&["Q&A < jokes"]);
        let document = String::from_utf8(document(&jokes).unwrap()).unwrap();

        assert!(document.contains("Q&amp;A &lt; jokes"));
    }

    #[test]
    fn test_empty_corpus() {
        let document = String::from_utf8(document(&[]).unwrap()).unwrap();

        assert!(document.contains("<jokes/>"));
        assert!(!document.contains("<joke>"));
    }
}
