pub mod balance;

pub use balance::LedgerBalanceEngine;

use chrono::NaiveDate;

use crate::domain::{
    period::default_inception, Account, DateRange, Identifiable, RecognitionBasis, Transaction,
};

/// Read-only view over the chart of accounts and the vouchers owned by the host.
#[derive(Debug, Clone, Copy)]
pub struct Ledger<'a> {
    pub accounts: &'a [Account],
    pub transactions: &'a [Transaction],
    pub inception: NaiveDate,
}

impl<'a> Ledger<'a> {
    pub fn new(accounts: &'a [Account], transactions: &'a [Transaction]) -> Self {
        Self {
            accounts,
            transactions,
            inception: default_inception(),
        }
    }

    /// Moves the start of the cumulative history.
    pub fn with_inception(mut self, inception: NaiveDate) -> Self {
        self.inception = inception;
        self
    }

    pub fn engine(&self) -> LedgerBalanceEngine<'a> {
        LedgerBalanceEngine::new(self.transactions)
    }

    pub fn balance_of(&self, code: &str, range: DateRange, basis: RecognitionBasis) -> f64 {
        self.engine().balance_of(code, range, basis)
    }

    /// Range covering the whole history up to and including `as_of`.
    pub fn cumulative(&self, as_of: NaiveDate) -> DateRange {
        DateRange::since(self.inception, as_of)
    }

    pub fn account(&self, code: &str) -> Option<&'a Account> {
        self.accounts.iter().find(|account| account.key() == code)
    }

    pub fn leaf_accounts(&self) -> impl Iterator<Item = &'a Account> {
        self.accounts.iter().filter(|account| account.is_leaf())
    }
}
