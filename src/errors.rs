use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatementError>;

/// Failures surfaced while building a report.
///
/// Everything the input design treats as recoverable (unresolvable account
/// names in ledger rows, blank or malformed path rows) is silently omitted
/// and never reaches this type.
#[derive(Error, Debug)]
pub enum StatementError {
    // IO-related.
    #[error("error reading input file: {0}")]
    Read(#[from] std::io::Error),

    // Parsing-related.
    #[error("invalid CSV table: {0}")]
    InvalidCsv(#[from] csv::Error),
    #[error("invalid ISO date: {date}")]
    InvalidDate { date: String },
    #[error("invalid amount: '{value}'")]
    InvalidAmount { value: String },
    #[error("invalid ISO currency code: {code}")]
    InvalidCurrencyCode { code: String },

    // Ledger-structure-related.
    #[error("ledger table is missing its two header rows")]
    MissingLedgerHeader,
    #[error("unrecognized ledger kind: '{kind}'")]
    UnknownLedgerKind { kind: String },

    // Aggregation-related.
    #[error("no postings: cannot derive a reporting period range")]
    NoPostings,

    // Output-related.
    #[error("failed to serialize report output: {0}")]
    Json(#[from] serde_json::Error),
}
