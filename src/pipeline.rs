use log::info;

use crate::config::Paths;
use crate::corpus::read_corpus;
use crate::error::Result;
use crate::export::{read_word_counts, write_report, write_word_counts};
use crate::frequency::{Extraction, extract};
use crate::report::{REPORT_LIMIT, ReportRow, assemble_report, map_words};

/// What the word extractor read and wrote.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    pub sentences: usize,
    pub analyzed: usize,
    pub tables: Extraction,
}

/// Word extractor: counts descriptive words by sentiment and writes the four tables.
///
/// The corpus is fully parsed before any table is written.
pub fn run_extractor(paths: &Paths) -> Result<ExtractSummary> {
    let corpus = read_corpus(&paths.corpus)?;
    let tables = extract(&corpus);

    write_word_counts(&paths.positive_words(), &tables.positive)?;
    write_word_counts(&paths.negative_words(), &tables.negative)?;
    write_word_counts(&paths.all_words(), &tables.all)?;
    write_word_counts(&paths.interesting_words(), &tables.interesting)?;

    let summary = ExtractSummary {
        sentences: corpus.len(),
        analyzed: corpus.analyzable().count(),
        tables,
    };
    info!(
        "{} positive, {} negative, {} interesting words from {} of {} sentences",
        summary.tables.positive.len(),
        summary.tables.negative.len(),
        summary.tables.interesting.len(),
        summary.analyzed,
        summary.sentences
    );
    Ok(summary)
}

/// Report assembler: joins source files onto the top interesting words.
pub fn run_report(paths: &Paths) -> Result<Vec<ReportRow>> {
    let ranking = read_word_counts(&paths.interesting_words())?;
    let corpus = read_corpus(&paths.corpus)?;
    let report = assemble_report(&ranking, &map_words(&corpus), REPORT_LIMIT);
    write_report(&paths.final_report(), &report)?;
    Ok(report)
}
