use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, CorpusRow, Sentiment};

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        WordCount {
            word: word.into(),
            count,
        }
    }
}

/// Takes words and counts the occurrences of each one.
/// # Example
/// ```
/// use sentiment_words::count_words;
/// let words = ["one", "two", "two"];
/// let counted = count_words(words);
/// assert_eq!(counted["one"], 1);
/// assert_eq!(counted["two"], 2);
/// ```
pub fn count_words<I, S>(words: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frequency: HashMap<String, u64> = HashMap::new();
    for word in words {
        *frequency.entry(word.as_ref().to_owned()).or_insert(0) += 1;
    }
    frequency
}

/// Sorts a word → count map by count descending, then word ascending.
pub fn sort_counts(frequency: HashMap<String, u64>) -> Vec<WordCount> {
    let mut sorted: Vec<WordCount> = frequency
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    sorted
}

/// Counts the descriptive words of the rows in `scope`.
///
/// `None` counts every row regardless of sentiment.
pub fn word_frequency<'a, I>(rows: I, scope: Option<Sentiment>) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a CorpusRow>,
{
    let words = rows
        .into_iter()
        .filter(|row| scope.is_none_or(|s| row.sentiment() == s))
        .flat_map(|row| row.words.iter());
    sort_counts(count_words(words))
}

/// Concatenates two frequency tables and sums counts per word.
pub fn merge_counts(positive: &[WordCount], negative: &[WordCount]) -> Vec<WordCount> {
    let mut combined: HashMap<String, u64> = HashMap::new();
    for wc in positive.iter().chain(negative) {
        *combined.entry(wc.word.clone()).or_insert(0) += wc.count;
    }
    sort_counts(combined)
}

/// The four tables produced by the word extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub positive: Vec<WordCount>,
    pub negative: Vec<WordCount>,
    pub all: Vec<WordCount>,
    pub interesting: Vec<WordCount>,
}

/// Splits the analyzable rows by sentiment, counts, and merges the counts.
pub fn extract(corpus: &Corpus) -> Extraction {
    let analyzable: Vec<&CorpusRow> = corpus.analyzable().collect();
    debug!(
        "{} of {} rows kept after dropping neutral and wordless sentences",
        analyzable.len(),
        corpus.len()
    );

    let positive = word_frequency(analyzable.iter().copied(), Some(Sentiment::Positive));
    let negative = word_frequency(analyzable.iter().copied(), Some(Sentiment::Negative));
    let all = word_frequency(&corpus.rows, None);
    let interesting = merge_counts(&positive, &negative);

    Extraction {
        positive,
        negative,
        all,
        interesting,
    }
}
