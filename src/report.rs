use std::collections::{BTreeSet, HashMap};

use crate::corpus::Corpus;
use crate::frequency::WordCount;

/// Maximum number of rows in the final report.
pub const REPORT_LIMIT: usize = 20;

/// Where a descriptive word occurs in the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSources {
    pub files: BTreeSet<String>,
    pub count: u64,
}

/// Builds word → originating files over every row of the corpus.
///
/// Rows of any sentiment contribute, so a word's files may include neutral
/// sentences.
pub fn map_words(corpus: &Corpus) -> HashMap<String, WordSources> {
    let mut mapping: HashMap<String, WordSources> = HashMap::new();
    for row in &corpus.rows {
        for word in &row.words {
            let sources = mapping.entry(word.clone()).or_default();
            sources.count += 1;
            if !sources.files.contains(&row.sentence.file_name) {
                sources.files.insert(row.sentence.file_name.clone());
            }
        }
    }
    mapping
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub word: String,
    /// Occurrences across the whole corpus; the report is ordered by it.
    pub count: u64,
    /// Combined positive + negative count from the ranking.
    pub combined_count: u64,
    pub files: BTreeSet<String>,
}

/// Joins file associations onto the ranking and keeps the top `limit` rows.
///
/// The ranking only selects the words. Rows are ordered by the corpus-wide
/// count the join brings in, neutral sentences included. Words missing from
/// `mapping` get no files and a zero count.
pub fn assemble_report(
    ranking: &[WordCount],
    mapping: &HashMap<String, WordSources>,
    limit: usize,
) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = ranking
        .iter()
        .map(|wc| {
            let sources = mapping.get(&wc.word);
            ReportRow {
                word: wc.word.clone(),
                count: sources.map_or(0, |s| s.count),
                combined_count: wc.count,
                files: sources.map(|s| s.files.clone()).unwrap_or_default(),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.combined_count.cmp(&a.combined_count))
            .then_with(|| a.word.cmp(&b.word))
    });
    rows.truncate(limit);
    rows
}
