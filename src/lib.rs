//! # sentiment_words
//!
//! Finds the adjectives and adverbs most associated with positive and negative
//! sentences in a part-of-speech tagged corpus.
//!
//! The work runs in two stages that only share files:
//! 1. [`run_extractor`] counts descriptive words in positive and negative
//!    sentences and writes four frequency tables, including the merged
//!    "interesting words" ranking.
//! 2. [`run_report`] joins the source file names onto the top
//!    [`REPORT_LIMIT`] interesting words and writes the final report.
//!
//! Each stage has its own binary (`interesting_words`, `prepare_table`).

pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod frequency;
pub mod pipeline;
pub mod report;
pub mod tagged;

pub use config::Paths;
pub use corpus::{Corpus, CorpusRow, Sentiment, TaggedSentence, read_corpus};
pub use error::{Error, Result};
pub use export::{csv_safe_cell, read_word_counts, write_report, write_word_counts};
pub use frequency::{
    Extraction, WordCount, count_words, extract, merge_counts, sort_counts, word_frequency,
};
pub use pipeline::{ExtractSummary, run_extractor, run_report};
pub use report::{REPORT_LIMIT, ReportRow, WordSources, assemble_report, map_words};
pub use tagged::{TaggedWord, descriptive_words, is_descriptive, parse_tagged_words};

/// Formats the first `top` rows of a frequency table for the terminal.
pub fn format_top(title: &str, counts: &[WordCount], top: usize) -> String {
    let mut out = format!("{title} (top {})\n", top.min(counts.len()));
    for (rank, wc) in counts.iter().take(top).enumerate() {
        out.push_str(&format!("{:>3}. {:<24} {}\n", rank + 1, wc.word, wc.count));
    }
    out
}

/// Formats the final report rows for the terminal.
pub fn format_report(rows: &[ReportRow]) -> String {
    let mut out = format!("Final report ({} words)\n", rows.len());
    for (rank, row) in rows.iter().enumerate() {
        let files: Vec<&str> = row.files.iter().map(String::as_str).collect();
        out.push_str(&format!(
            "{:>3}. {:<24} {:>6}  {}\n",
            rank + 1,
            row.word,
            row.count,
            files.join(", ")
        ));
    }
    out
}
