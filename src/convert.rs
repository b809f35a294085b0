use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error};

use crate::config::ConvertConfig;
use crate::export::{csv_writer, write_rows};
use crate::model::WordRecord;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Could not find the input file '{}'", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn open_error(path: &Path, e: io::Error) -> ConvertError {
    match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            ConvertError::FileNotFound(path.to_path_buf())
        }
        _ => ConvertError::Io(e),
    }
}

/// Reads the word list, trimming every line and dropping the blank ones.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_words(path: &Path) -> Result<Vec<String>, ConvertError> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        words.extend(
            line.split('\r')
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .map(str::to_string),
        );
    }
    debug!(path = %path.display(), count = words.len(), "read word list");
    Ok(words)
}

pub fn build_records(words: Vec<String>, language: &str) -> Vec<WordRecord> {
    words
        .into_iter()
        .map(|word| WordRecord::new(word, language.to_string()))
        .collect()
}

pub fn write_csv(path: &Path, records: &[WordRecord]) -> Result<(), ConvertError> {
    let file = File::create(path)?;
    let mut wtr = csv_writer(file);
    write_rows(&mut wtr, records)?;
    wtr.flush()?;
    debug!(path = %path.display(), rows = records.len(), "wrote CSV");
    Ok(())
}

/// Runs a conversion and returns the number of words written.
///
/// The input is read in full before the output is opened, so a missing input
/// never leaves an output file behind.
pub fn try_convert(config: &ConvertConfig) -> Result<usize, ConvertError> {
    let words = read_words(&config.input)?;
    let records = build_records(words, &config.language);
    write_csv(&config.output, &records)?;
    Ok(records.len())
}

/// Runs a conversion, printing the outcome to stdout.
///
/// Errors never escape; `false` means the conversion failed.
pub fn convert(config: &ConvertConfig) -> bool {
    match try_convert(config) {
        Ok(count) => {
            debug!(count, output = %config.output.display(), "conversion finished");
            println!(
                "Successfully transformed {} words to {}",
                count,
                config.output.display()
            );
            true
        }
        Err(e) => {
            error!(%e, input = %config.input.display(), "conversion failed");
            println!("Error: {}", e);
            false
        }
    }
}
