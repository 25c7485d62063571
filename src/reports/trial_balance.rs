use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::AccountCategory;
use crate::ledger::Ledger;

use super::{is_listed, ReportPolicy};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialBalanceRow {
    pub code: String,
    pub name: String,
    pub category: AccountCategory,
    pub debit: f64,
    pub credit: f64,
}

/// Cumulative debit and credit position of every leaf account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialBalance {
    pub as_of: NaiveDate,
    pub rows: Vec<TrialBalanceRow>,
    pub total_debit: f64,
    pub total_credit: f64,
}

impl TrialBalance {
    pub fn assemble(ledger: &Ledger<'_>, as_of: NaiveDate, policy: &ReportPolicy) -> Self {
        let engine = ledger.engine();
        let range = ledger.cumulative(as_of);

        let rows: Vec<TrialBalanceRow> = ledger
            .leaf_accounts()
            .filter_map(|account| {
                let balance = engine.balance_of(&account.code, range, policy.trial_balance);
                if !is_listed(balance) {
                    return None;
                }
                let (debit, credit) = split_sides(balance);
                Some(TrialBalanceRow {
                    code: account.code.clone(),
                    name: account.name.clone(),
                    category: account.category,
                    debit,
                    credit,
                })
            })
            .collect();

        let total_debit = rows.iter().map(|row| row.debit).sum();
        let total_credit = rows.iter().map(|row| row.credit).sum();
        tracing::debug!(rows = rows.len(), total_debit, total_credit, "assembled trial balance");

        Self {
            as_of,
            rows,
            total_debit,
            total_credit,
        }
    }

    pub fn is_balanced(&self) -> bool {
        (self.total_debit - self.total_credit).abs() < f64::EPSILON * self.total_debit.abs().max(1.0)
    }
}

// NaN lands in the debit column so the defect shows up in the totals.
fn split_sides(balance: f64) -> (f64, f64) {
    if balance < 0.0 {
        (0.0, balance.abs())
    } else {
        (balance, 0.0)
    }
}
