use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;
use crate::errors::LedgerError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start of the ledger history used by cumulative statements.
pub fn default_inception() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

/// Inclusive date range; an inverted range contains nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, LedgerError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Cumulative range from `inception` through `end`.
    pub fn since(inception: NaiveDate, end: NaiveDate) -> Self {
        Self::new(inception, end)
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// January 1st of `today`'s year through `today`.
    pub fn year_to_date(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self::new(start, today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Accounting basis a balance is computed on.
///
/// `Accrual` counts every posted entry, including the fee-due vouchers that
/// recognise a receivable. `Cash` drops those vouchers entirely so that only
/// collections and actual spending remain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RecognitionBasis {
    #[default]
    Accrual,
    Cash,
}

impl RecognitionBasis {
    pub fn admits(self, txn: &Transaction) -> bool {
        match self {
            RecognitionBasis::Accrual => true,
            RecognitionBasis::Cash => !txn.kind.is_liability_recognition(),
        }
    }
}
