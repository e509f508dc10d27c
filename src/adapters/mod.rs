pub mod csv_source;
pub mod pdf;

pub use csv_source::CsvEntrySource;
pub use pdf::PdfCanvas;
