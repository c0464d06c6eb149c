//! Parsing of the `(word, tag)` lists written by the part-of-speech tagger.
//!
//! The tagger stores each sentence's tokens as a list literal, e.g.
//! `[('quick', 'JJ'), ('fox', 'NN'), ("didn't", 'VBD')]`. Pairs may also be
//! written with square brackets and double quotes, so plain JSON
//! (`[["quick","JJ"]]`) is accepted as well.

use std::fmt;
use std::str::CharIndices;

use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

/// Penn Treebank adjective and adverb tags.
pub const DESCRIPTIVE_TAGS: [&str; 6] = ["JJ", "JJR", "JJS", "RB", "RBR", "RBS"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

/// Position and reason of a parse failure inside one serialized list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        let offset = match e.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        ParseError {
            offset,
            message: e.variant.message().into_owned(),
        }
    }
}

#[derive(Parser)]
#[grammar = "tagged.pest"]
struct TaggedListParser;

/// True for adjective and adverb tags.
pub fn is_descriptive(tag: &str) -> bool {
    DESCRIPTIVE_TAGS.contains(&tag.trim())
}

/// Parses a serialized list of `(word, tag)` pairs.
///
/// A blank string is treated as an empty list.
/// # Example
/// ```
/// use sentiment_words::parse_tagged_words;
/// let pairs = parse_tagged_words("[('very', 'RB'), ('happy', 'JJ')]").unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[1].word, "happy");
/// assert_eq!(pairs[1].tag, "JJ");
/// ```
pub fn parse_tagged_words(text: &str) -> Result<Vec<TaggedWord>, ParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut parsed = TaggedListParser::parse(Rule::list, text)?;
    let Some(list) = parsed.next() else {
        return Ok(Vec::new());
    };
    list.into_inner()
        .filter(|p| p.as_rule() == Rule::pair)
        .map(tagged_word)
        .collect()
}

/// Keeps only the adjectives and adverbs of a serialized list, in order.
///
/// Duplicates are kept; every occurrence counts.
pub fn descriptive_words(text: &str) -> Result<Vec<String>, ParseError> {
    Ok(parse_tagged_words(text)?
        .into_iter()
        .filter(|t| is_descriptive(&t.tag))
        .map(|t| t.word)
        .collect())
}

fn tagged_word(pair: Pair<'_, Rule>) -> Result<TaggedWord, ParseError> {
    let offset = pair.as_span().start();
    let mut strings = pair.into_inner();
    match (strings.next(), strings.next()) {
        (Some(word), Some(tag)) => Ok(TaggedWord {
            word: string_value(word)?,
            tag: string_value(tag)?,
        }),
        _ => Err(ParseError {
            offset,
            message: "expected a (word, tag) pair".to_string(),
        }),
    }
}

fn string_value(string: Pair<'_, Rule>) -> Result<String, ParseError> {
    match string.into_inner().next() {
        Some(quoted) => unescape(quoted.as_str(), quoted.as_span().start()),
        None => Ok(String::new()),
    }
}

/// Decodes the backslash escapes Python `repr` and JSON produce.
///
/// `start` is the byte offset of `raw` in the whole cell, used in errors.
fn unescape(raw: &str, start: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let offset = start + i;
        let decoded = match chars.next() {
            Some((_, esc @ ('\\' | '\'' | '"' | '/'))) => esc,
            Some((_, 'n')) => '\n',
            Some((_, 't')) => '\t',
            Some((_, 'r')) => '\r',
            Some((_, '0')) => '\0',
            Some((_, 'a')) => '\x07',
            Some((_, 'b')) => '\x08',
            Some((_, 'f')) => '\x0c',
            Some((_, 'v')) => '\x0b',
            Some((_, 'x')) => hex_char(&mut chars, 2, offset)?,
            Some((_, 'u')) => hex_char(&mut chars, 4, offset)?,
            Some((_, 'U')) => hex_char(&mut chars, 8, offset)?,
            Some((_, other)) => {
                return Err(ParseError {
                    offset,
                    message: format!("unknown escape \\{other}"),
                });
            }
            None => {
                return Err(ParseError {
                    offset,
                    message: "unterminated escape".to_string(),
                });
            }
        };
        out.push(decoded);
    }
    Ok(out)
}

fn hex_char(chars: &mut CharIndices<'_>, digits: usize, offset: usize) -> Result<char, ParseError> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|(_, c)| c.to_digit(16))
            .ok_or_else(|| ParseError {
                offset,
                message: format!("escape needs {digits} hex digits"),
            })?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or_else(|| ParseError {
        offset,
        message: format!("invalid code point {value:#x}"),
    })
}
