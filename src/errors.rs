use thiserror::Error;

/// Error type that captures failures around loading and querying ledger data.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures raised before or while dispatching student notifications.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("message body is empty")]
    EmptyMessage,
    #[error("no recipients selected")]
    NoRecipients,
    #[error("gateway rejected message to {number}: {reason}")]
    Gateway { number: String, reason: String },
}
