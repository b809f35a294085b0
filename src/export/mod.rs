pub mod error;
pub mod words;

pub use error::ExportError;
pub use words::{csv_writer, read_csv, read_rows, write_rows, CSV_HEADER};
