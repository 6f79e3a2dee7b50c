pub mod csv_writer;
pub mod line_classifier;

pub use csv_writer::{CsvWriter, TableLayout};
pub use line_classifier::{classify_line, LineKind};
