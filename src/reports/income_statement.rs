use serde::{Deserialize, Serialize};

use crate::domain::DateRange;
use crate::ledger::Ledger;

use super::{is_listed, section_of, total_of, AccountAmount, ReportPeriod, ReportPolicy, Section};

/// Collections against spending for a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeStatement {
    pub period: ReportPeriod,
    pub revenue: Vec<AccountAmount>,
    pub expenditure: Vec<AccountAmount>,
    pub total_revenue: f64,
    pub total_expenditure: f64,
}

impl IncomeStatement {
    pub fn assemble(ledger: &Ledger<'_>, period: ReportPeriod, policy: &ReportPolicy) -> Self {
        let engine = ledger.engine();
        let range = DateRange::new(period.from, period.to);
        let mut revenue = Vec::new();
        let mut expenditure = Vec::new();

        for account in ledger.leaf_accounts() {
            match section_of(account.category) {
                Section::Revenue => {
                    let amount = engine.balance_of(&account.code, range, policy.revenue).abs();
                    if is_listed(amount) {
                        revenue.push(AccountAmount::from_account(account, amount));
                    }
                }
                Section::Expenditure => {
                    let amount = engine.balance_of(&account.code, range, policy.expenditure);
                    if is_listed(amount) {
                        expenditure.push(AccountAmount::from_account(account, amount));
                    }
                }
                Section::Assets | Section::Liabilities | Section::Unlisted => {}
            }
        }

        let total_revenue = total_of(&revenue);
        let total_expenditure = total_of(&expenditure);
        tracing::debug!(
            revenue_rows = revenue.len(),
            expenditure_rows = expenditure.len(),
            total_revenue,
            total_expenditure,
            "assembled income statement"
        );

        Self {
            period,
            revenue,
            expenditure,
            total_revenue,
            total_expenditure,
        }
    }

    pub fn net(&self) -> f64 {
        self.total_revenue - self.total_expenditure
    }

    pub fn is_surplus(&self) -> bool {
        self.net() >= 0.0
    }
}
