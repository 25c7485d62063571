use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

use super::{is_listed, section_of, total_of, AccountAmount, ReportPolicy, Section};

pub const SURPLUS_LABEL: &str = "Current Period Surplus";

/// Financial position as at a date, with equity derived from results since inception.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceSheet {
    pub as_of: NaiveDate,
    pub assets: Vec<AccountAmount>,
    pub liabilities: Vec<AccountAmount>,
    pub total_assets: f64,
    pub total_liabilities: f64,
    /// Cumulative revenue minus cumulative expenditure.
    pub surplus: f64,
}

impl BalanceSheet {
    pub fn assemble(ledger: &Ledger<'_>, as_of: NaiveDate, policy: &ReportPolicy) -> Self {
        let engine = ledger.engine();
        let range = ledger.cumulative(as_of);
        let mut assets = Vec::new();
        let mut liabilities = Vec::new();
        let mut income = 0.0;
        let mut expense = 0.0;

        for account in ledger.leaf_accounts() {
            match section_of(account.category) {
                Section::Assets => {
                    let amount = engine.balance_of(&account.code, range, policy.position);
                    if is_listed(amount) {
                        assets.push(AccountAmount::from_account(account, amount));
                    }
                }
                Section::Liabilities => {
                    let amount = engine.balance_of(&account.code, range, policy.position).abs();
                    if is_listed(amount) {
                        liabilities.push(AccountAmount::from_account(account, amount));
                    }
                }
                Section::Revenue => {
                    income += engine.balance_of(&account.code, range, policy.revenue).abs();
                }
                Section::Expenditure => {
                    expense += engine.balance_of(&account.code, range, policy.expenditure);
                }
                // Stored equity is neither listed nor netted against the surplus.
                Section::Unlisted => {}
            }
        }

        let total_assets = total_of(&assets);
        let total_liabilities = total_of(&liabilities);
        let surplus = income - expense;
        tracing::debug!(
            asset_rows = assets.len(),
            liability_rows = liabilities.len(),
            total_assets,
            total_liabilities,
            surplus,
            "assembled balance sheet"
        );

        Self {
            as_of,
            assets,
            liabilities,
            total_assets,
            total_liabilities,
            surplus,
        }
    }

    pub fn total_liabilities_and_equity(&self) -> f64 {
        self.total_liabilities + self.surplus
    }
}
