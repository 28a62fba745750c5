use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Invalid log line: {0}")]
    InvalidLine(String),
}
