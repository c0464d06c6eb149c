use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::tagged::descriptive_words;

/// Columns that must be present in the tagged corpus header.
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "file_name", "label", "parts_of_speech"];

/// Sentiment class of a corpus sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a corpus label onto a sentiment class.
    ///
    /// Anything that is neither positive nor negative counts as neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" | "pos" => Sentiment::Positive,
            "negative" | "neg" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// One row of the POS-tagged corpus, as written by the tagging stage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaggedSentence {
    pub id: String,
    #[serde(default)]
    pub sentence: String,
    pub file_name: String,
    #[serde(default)]
    pub location: String,
    pub label: String,
    #[serde(default, deserialize_with = "indicator")]
    pub negative: bool,
    #[serde(default, deserialize_with = "indicator")]
    pub positive: bool,
    #[serde(default, deserialize_with = "indicator")]
    pub neutral: bool,
    #[serde(default)]
    pub parts_of_speech: String,
}

impl TaggedSentence {
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_label(&self.label)
    }
}

/// Reads an indicator column without ever failing the row.
///
/// The label column decides the sentiment; these flags are informational, so
/// non-zero numbers and `true`/`yes`/`y` count as set and anything else as unset.
fn indicator<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(false);
    };
    let value = raw.trim().to_lowercase();
    if let Ok(n) = value.parse::<f64>() {
        return Ok(!n.is_nan() && n != 0.0);
    }
    Ok(matches!(value.as_str(), "true" | "yes" | "y"))
}

/// A corpus row together with its adjectives and adverbs.
#[derive(Debug, Clone)]
pub struct CorpusRow {
    pub sentence: TaggedSentence,
    pub words: Vec<String>,
}

impl CorpusRow {
    pub fn sentiment(&self) -> Sentiment {
        self.sentence.sentiment()
    }

    /// Non-neutral rows with at least one descriptive word.
    pub fn is_analyzable(&self) -> bool {
        self.sentiment() != Sentiment::Neutral && !self.words.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub rows: Vec<CorpusRow>,
}

impl Corpus {
    /// Parses a tagged corpus from any CSV source. `source` is only used in errors.
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers().map_err(|e| Error::csv(source, e))?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim() == column) {
                return Err(Error::MissingColumn {
                    path: source.to_path_buf(),
                    column,
                });
            }
        }

        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        for record in rdr.deserialize::<TaggedSentence>() {
            let sentence = record.map_err(|e| Error::csv(source, e))?;
            if !seen.insert(sentence.id.clone()) {
                warn!("{}: duplicate sentence id {}", source.display(), sentence.id);
            }
            let words =
                descriptive_words(&sentence.parts_of_speech).map_err(|e| Error::WordList {
                    id: sentence.id.clone(),
                    offset: e.offset,
                    message: e.message,
                })?;
            rows.push(CorpusRow { sentence, words });
        }
        Ok(Corpus { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows kept for sentiment analysis: not neutral, with descriptive words.
    pub fn analyzable(&self) -> impl Iterator<Item = &CorpusRow> {
        self.rows.iter().filter(|row| row.is_analyzable())
    }
}

/// Loads the tagged corpus from disk.
pub fn read_corpus(path: &Path) -> Result<Corpus> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let corpus = Corpus::from_reader(file, path)?;
    info!("Read {} sentences from {}", corpus.len(), path.display());
    debug!(
        "{} sentences are non-neutral with descriptive words",
        corpus.analyzable().count()
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,sentence,file_name,location,label,negative,positive,neutral,parts_of_speech\n";

    fn parse(body: &str) -> Result<Corpus> {
        let data = format!("{HEADER}{body}");
        Corpus::from_reader(data.as_bytes(), Path::new("corpus.csv"))
    }

    #[test]
    fn labels_map_to_sentiment() {
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label(" NEG "), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("neutral"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(""), Sentiment::Neutral);
    }

    #[test]
    fn reads_rows_and_descriptive_words() {
        let corpus = parse(
            "1,A happy day.,a.txt,3,positive,0,1,0,\"[('happy', 'JJ'), ('day', 'NN')]\"\n\
             2,Nothing.,b.txt,4,neutral,False,False,True,[]\n",
        )
        .unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.rows[0].words, vec!["happy"]);
        assert!(corpus.rows[0].sentence.positive);
        assert!(corpus.rows[1].sentence.neutral);
        assert!(corpus.rows[1].words.is_empty());
    }

    #[test]
    fn analyzable_drops_neutral_and_wordless_rows() {
        let corpus = parse(
            "1,s,a.txt,1,positive,0,1,0,\"[('good', 'JJ')]\"\n\
             2,s,a.txt,2,negative,1,0,0,\"[('dog', 'NN')]\"\n\
             3,s,a.txt,3,neutral,0,0,1,\"[('blue', 'JJ')]\"\n\
             4,s,a.txt,4,negative,1,0,0,\"[('badly', 'RB')]\"\n",
        )
        .unwrap();
        let ids: Vec<&str> = corpus
            .analyzable()
            .map(|r| r.sentence.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let data = "id,file_name,label,parts_of_speech\n7,c.txt,pos,\"[('fine', 'JJ')]\"\n";
        let corpus = Corpus::from_reader(data.as_bytes(), Path::new("c.csv")).unwrap();
        assert_eq!(corpus.rows[0].sentiment(), Sentiment::Positive);
        assert!(!corpus.rows[0].sentence.positive);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let data = "id,file_name,parts_of_speech\n1,a.txt,[]\n";
        let err = Corpus::from_reader(data.as_bytes(), Path::new("c.csv")).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { column: "label", .. }));
    }

    #[test]
    fn malformed_word_list_names_the_row() {
        let err = parse("42,s,a.txt,1,positive,0,1,0,\"[('oops', 'JJ'\"\n").unwrap_err();
        match err {
            Error::WordList { id, .. } => assert_eq!(id, "42"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_corpus(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn odd_indicator_values_do_not_abort() {
        let corpus = parse(
            "1,s,a.txt,1,positive,no,2,maybe,\"[('fine', 'JJ')]\"\n\
             2,s,a.txt,2,negative,yes,0.0,,\"[('poor', 'JJ')]\"\n",
        )
        .unwrap();
        let first = &corpus.rows[0].sentence;
        assert!(!first.negative);
        assert!(first.positive);
        assert!(!first.neutral);
        let second = &corpus.rows[1].sentence;
        assert!(second.negative);
        assert!(!second.positive);
        assert_eq!(corpus.analyzable().count(), 2);
    }
}
