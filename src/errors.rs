use thiserror::Error;

/// Error type that captures the recoverable failures of the day ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid ledger configuration: {0}")]
    InvalidConfig(String),
    #[error("no day {0} in the current month")]
    InvalidDate(u32),
    #[error("no transaction in category `{category}` on day {date}")]
    TransactionNotFound { date: u32, category: String },
    #[error("invalid date range: {start} > {end}")]
    InvalidRange { start: u32, end: u32 },
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
