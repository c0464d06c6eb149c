#![forbid(unsafe_code)]
//! # prepare_table
//!
//! Second stage: joins the files each word came from onto the top interesting
//! words and writes the final report table. Run `interesting_words` first.
//!
//! ## Example
//! ```bash
//! cargo run --release --bin prepare_table
//! ```

use clap::Parser;
use log::error;
use sentiment_words::{Paths, format_report, run_report};
use std::process;

/// Build the final interesting-words report with source files
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    paths: Paths,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run_report(&cli.paths) {
        Ok(rows) => {
            print!("{}", format_report(&rows));
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
