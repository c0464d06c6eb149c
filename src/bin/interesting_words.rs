#![forbid(unsafe_code)]
//! # interesting_words
//!
//! First stage: reads the POS-tagged corpus, drops neutral sentences and
//! sentences without adjectives or adverbs, and writes the positive, negative,
//! all-words and merged "interesting words" frequency tables.
//!
//! ## Example
//! ```bash
//! cargo run --release --bin interesting_words
//! cargo run --release --bin interesting_words -- --corpus data/corpus_pos.csv --output-dir data
//! ```

use clap::Parser;
use log::error;
use sentiment_words::{Paths, format_top, run_extractor};
use std::process;

/// Rank descriptive words by positive and negative sentence counts
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    paths: Paths,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run_extractor(&cli.paths) {
        Ok(summary) => {
            println!(
                "Analyzed {} of {} sentences",
                summary.analyzed, summary.sentences
            );
            println!(
                "{}",
                format_top("Interesting words", &summary.tables.interesting, 20)
            );
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
