use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("PDF backend error: {0}")]
    PdfError(String),

    #[error("Unparseable time value: {value}")]
    TimeParseError { value: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, LabelError>;
