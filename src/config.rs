use std::path::PathBuf;

use clap::Args;

pub const DEFAULT_CORPUS: &str = "output/corpus_pos.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub const POSITIVE_WORDS: &str = "positive_words.csv";
pub const NEGATIVE_WORDS: &str = "negative_words.csv";
pub const ALL_WORDS: &str = "all_words.csv";
pub const INTERESTING_WORDS: &str = "interesting_words.csv";
pub const FINAL_REPORT: &str = "final_report.csv";

/// Input and output locations shared by both stages.
///
/// Every flag has a default, so running a stage without arguments uses the
/// fixed `output/` layout.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// POS-tagged corpus CSV produced by the tagging step
    #[arg(long, default_value = DEFAULT_CORPUS)]
    pub corpus: PathBuf,

    /// Directory holding the frequency tables and the final report
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            corpus: PathBuf::from(DEFAULT_CORPUS),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Paths {
    pub fn positive_words(&self) -> PathBuf {
        self.output_dir.join(POSITIVE_WORDS)
    }

    pub fn negative_words(&self) -> PathBuf {
        self.output_dir.join(NEGATIVE_WORDS)
    }

    pub fn all_words(&self) -> PathBuf {
        self.output_dir.join(ALL_WORDS)
    }

    pub fn interesting_words(&self) -> PathBuf {
        self.output_dir.join(INTERESTING_WORDS)
    }

    pub fn final_report(&self) -> PathBuf {
        self.output_dir.join(FINAL_REPORT)
    }
}
