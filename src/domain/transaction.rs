use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// Business type of a voucher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// A fee becomes owed but has not been collected yet.
    #[serde(rename = "FEE_DUE")]
    FeeDue,
    #[serde(rename = "FEE_RCV")]
    FeeReceived,
    #[serde(rename = "FEE")]
    Fee,
    #[serde(other)]
    Other,
}

impl TransactionType {
    /// True for the entries that recognise a receivable without moving cash.
    pub fn is_liability_recognition(self) -> bool {
        match self {
            TransactionType::FeeDue => true,
            TransactionType::FeeReceived | TransactionType::Fee | TransactionType::Other => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Posted,
    Draft,
    Void,
    #[serde(other)]
    Unknown,
}

/// A double-entry voucher supplied by the host application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub debit_account: String,
    pub credit_account: String,
    pub amount: f64,
    pub status: TransactionStatus,
    #[serde(default)]
    pub voucher_no: String,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Creates a posted transaction moving `amount` from `credit` to `debit`.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        kind: TransactionType,
        debit_account: impl Into<String>,
        credit_account: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            kind,
            debit_account: debit_account.into(),
            credit_account: credit_account.into(),
            amount,
            status: TransactionStatus::Posted,
            voucher_no: String::new(),
            description: String::new(),
        }
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_voucher(mut self, voucher_no: impl Into<String>) -> Self {
        self.voucher_no = voucher_no.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_posted(&self) -> bool {
        self.status == TransactionStatus::Posted
    }

    /// Signed effect on `code`: debit first, then credit, otherwise nothing.
    pub fn effect_on(&self, code: &str) -> f64 {
        if self.debit_account == code {
            self.amount
        } else if self.credit_account == code {
            -self.amount
        } else {
            0.0
        }
    }

    pub fn touches(&self, code: &str) -> bool {
        self.debit_account == code || self.credit_account == code
    }
}

impl Identifiable for Transaction {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} {} Dr {} / Cr {} {:.2}",
            self.date, self.voucher_no, self.debit_account, self.credit_account, self.amount
        )
    }
}
