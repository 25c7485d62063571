pub mod notification_service;
pub mod report_service;

pub use notification_service::NotificationService;
pub use report_service::{Report, ReportRequest, ReportService};

use crate::errors::{LedgerError, NotifyError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("{0}")]
    Invalid(String),
}
