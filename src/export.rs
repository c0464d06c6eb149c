use std::fs::{self, File};
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::frequency::WordCount;
use crate::report::ReportRow;

/// Separator between file names in the report's `files` column.
pub const FILES_SEPARATOR: &str = "; ";

/// Neutralizes cells a spreadsheet would evaluate as a formula.
///
/// A leading `=`, `+`, `-`, `@`, tab or carriage return gets a `'` prefix.
/// Cells that already start with `'` are returned unchanged.
/// # Example
/// ```
/// use sentiment_words::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("calm".to_string()), "calm");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell,
    }
}

fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    Ok(csv::Writer::from_writer(file))
}

/// Writes a `word,count` table, overwriting `path`.
pub fn write_word_counts(path: &Path, counts: &[WordCount]) -> Result<()> {
    let mut wtr = create_writer(path)?;
    // serialize() skips the header for an empty table, so write it by hand
    wtr.write_record(["word", "count"])
        .map_err(|e| Error::csv(path, e))?;
    for wc in counts {
        wtr.write_record([wc.word.as_str(), wc.count.to_string().as_str()])
            .map_err(|e| Error::csv(path, e))?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    info!("Wrote {} rows to {}", counts.len(), path.display());
    Ok(())
}

/// Reads a `word,count` table written by [`write_word_counts`].
pub fn read_word_counts(path: &Path) -> Result<Vec<WordCount>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut rdr = csv::Reader::from_reader(file);
    let headers = rdr.headers().map_err(|e| Error::csv(path, e))?.clone();
    for column in ["word", "count"] {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    rdr.deserialize::<WordCount>()
        .map(|row| row.map_err(|e| Error::csv(path, e)))
        .collect()
}

/// Writes the final report.
///
/// Words are written verbatim so they match the ranking table; only the
/// file names get formula neutralization.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut wtr = create_writer(path)?;
    wtr.write_record(["word", "count", "combined_count", "files"])
        .map_err(|e| Error::csv(path, e))?;
    for row in rows {
        let files = row
            .files
            .iter()
            .map(|f| csv_safe_cell(f.clone()))
            .collect::<Vec<_>>()
            .join(FILES_SEPARATOR);
        wtr.write_record([
            row.word.clone(),
            row.count.to_string(),
            row.combined_count.to_string(),
            files,
        ])
        .map_err(|e| Error::csv(path, e))?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    info!("Wrote {} report rows to {}", rows.len(), path.display());
    Ok(())
}
