use std::io;
use std::path::Path;

use crate::export::ExportError;
use crate::model::WordRecord;

pub const CSV_HEADER: [&str; 3] = ["UUID", "Word", "Language"];

/// Builds a CSV writer that leaves the header to [`write_rows`], so an empty
/// word list still produces a header line.
pub fn csv_writer<W: io::Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(out)
}

pub fn write_rows<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    records: &[WordRecord],
) -> Result<(), csv::Error> {
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    Ok(())
}

pub fn read_rows<R: io::Read>(input: R) -> Result<Vec<WordRecord>, ExportError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Loads a word table previously written by the converter.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<WordRecord>, ExportError> {
    let file = std::fs::File::open(path)?;
    read_rows(io::BufReader::new(file))
}
