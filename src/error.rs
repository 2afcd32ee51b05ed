use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("schema error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
