use thiserror::Error;

/// Error type covering ledger mutations, report building, and export.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid {field}: {message}")]
    Validation {
        /// Zero-based row of a bulk edit, when the failure came from one.
        row: Option<usize>,
        field: &'static str,
        message: String,
    },
    #[error("invariant violated: {0}")]
    Invariant(String),
    #[error("invalid report period: month {month}, year {year}")]
    InvalidPeriod { month: u32, year: i32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

impl LedgerError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            row: None,
            field,
            message: message.into(),
        }
    }

    pub fn validation_at(row: usize, field: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            row: Some(row),
            field,
            message: format!("row {row}: {message}"),
        }
    }
}
