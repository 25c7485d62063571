//! Statement assemblers layered over [`LedgerBalanceEngine`](crate::ledger::LedgerBalanceEngine).
//!
//! Each assembler picks its accounts by category and leaf level, then asks the
//! engine for balances on the basis its [`ReportPolicy`] names.

pub mod balance_sheet;
pub mod general_ledger;
pub mod income_statement;
pub mod transaction_summary;
pub mod trial_balance;

pub use balance_sheet::{BalanceSheet, SURPLUS_LABEL};
pub use general_ledger::{GeneralLedger, GeneralLedgerLine};
pub use income_statement::IncomeStatement;
pub use transaction_summary::{SummaryFilter, TransactionSummary};
pub use trial_balance::{TrialBalance, TrialBalanceRow};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountCategory, RecognitionBasis};

/// Statements the crate can assemble.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReportKind {
    TrialBalance,
    IncomeStatement,
    BalanceSheet,
    GeneralLedger,
    TransactionSummary,
}

impl ReportKind {
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::TrialBalance => "Trial Balance",
            ReportKind::IncomeStatement => "Income Statement (Cash Basis)",
            ReportKind::BalanceSheet => "Statement of Financial Position (Balance Sheet)",
            ReportKind::GeneralLedger => "General Ledger",
            ReportKind::TransactionSummary => "Transaction Summary",
        }
    }
}

/// Recognition basis per statement section.
///
/// The defaults keep revenue on a cash footing (unpaid dues are not income
/// yet) while positions and spending stay on accrual.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPolicy {
    pub trial_balance: RecognitionBasis,
    pub revenue: RecognitionBasis,
    pub expenditure: RecognitionBasis,
    pub position: RecognitionBasis,
    pub general_ledger: RecognitionBasis,
    pub summary: RecognitionBasis,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            trial_balance: RecognitionBasis::Accrual,
            revenue: RecognitionBasis::Cash,
            expenditure: RecognitionBasis::Accrual,
            position: RecognitionBasis::Accrual,
            general_ledger: RecognitionBasis::Accrual,
            summary: RecognitionBasis::Cash,
        }
    }
}

/// A statement line for a single account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountAmount {
    pub code: String,
    pub name: String,
    pub amount: f64,
}

impl AccountAmount {
    pub(crate) fn from_account(account: &Account, amount: f64) -> Self {
        Self {
            code: account.code.clone(),
            name: account.name.clone(),
            amount,
        }
    }
}

/// Zero rows are implicit; NaN rows are kept so upstream defects stay visible.
pub(crate) fn is_listed(amount: f64) -> bool {
    amount != 0.0
}

pub(crate) fn total_of(rows: &[AccountAmount]) -> f64 {
    rows.iter().map(|row| row.amount).sum()
}

/// How each category feeds an Income Statement or Balance Sheet section.
pub(crate) enum Section {
    Assets,
    Liabilities,
    Revenue,
    Expenditure,
    Unlisted,
}

pub(crate) fn section_of(category: AccountCategory) -> Section {
    match category {
        AccountCategory::Asset => Section::Assets,
        AccountCategory::Liability => Section::Liabilities,
        AccountCategory::Income => Section::Revenue,
        AccountCategory::Expense => Section::Expenditure,
        AccountCategory::Equity => Section::Unlisted,
    }
}

/// Statement period; cumulative statements only read `to`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportPeriod {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}
