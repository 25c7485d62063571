use serde::{Deserialize, Serialize};

use crate::domain::{
    account::{is_expense_code, is_income_code},
    DateRange, Transaction,
};
use crate::errors::LedgerError;
use crate::ledger::Ledger;

use super::{ReportPeriod, ReportPolicy};

/// Which side of the chart the summary keeps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SummaryFilter {
    #[default]
    All,
    /// Collections: credited to an income account.
    Income,
    /// Spending: debited to an expense account.
    Expense,
}

impl SummaryFilter {
    pub fn keeps(self, txn: &Transaction) -> bool {
        match self {
            SummaryFilter::All => true,
            SummaryFilter::Income => is_income_code(&txn.credit_account),
            SummaryFilter::Expense => is_expense_code(&txn.debit_account),
        }
    }
}

impl std::str::FromStr for SummaryFilter {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SummaryFilter::All),
            "income" => Ok(SummaryFilter::Income),
            "expense" => Ok(SummaryFilter::Expense),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown summary filter `{other}` (expected all, income or expense)"
            ))),
        }
    }
}

/// Voucher listing for a period, without liability recognition entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionSummary {
    pub period: ReportPeriod,
    pub filter: SummaryFilter,
    pub transactions: Vec<Transaction>,
    pub total_amount: f64,
}

impl TransactionSummary {
    pub fn assemble(
        ledger: &Ledger<'_>,
        period: ReportPeriod,
        filter: SummaryFilter,
        policy: &ReportPolicy,
    ) -> Self {
        let range = DateRange::new(period.from, period.to);
        let transactions: Vec<Transaction> = ledger
            .engine()
            .eligible(range, policy.summary)
            .filter(|txn| filter.keeps(txn))
            .cloned()
            .collect();
        let total_amount = transactions.iter().map(|txn| txn.amount).sum();
        tracing::debug!(rows = transactions.len(), ?filter, "assembled transaction summary");

        Self {
            period,
            filter,
            transactions,
            total_amount,
        }
    }
}
