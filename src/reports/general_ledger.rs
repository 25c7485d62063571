use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, DateRange};
use crate::ledger::Ledger;

use super::{ReportPeriod, ReportPolicy};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralLedgerLine {
    pub date: NaiveDate,
    pub voucher_no: String,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub running_balance: f64,
}

/// Movements of one account with its opening and closing balances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralLedger {
    pub code: String,
    pub name: String,
    pub period: ReportPeriod,
    pub opening_balance: f64,
    pub lines: Vec<GeneralLedgerLine>,
    pub total_debit: f64,
    pub total_credit: f64,
    pub closing_balance: f64,
}

impl GeneralLedger {
    pub fn assemble(
        ledger: &Ledger<'_>,
        account: &Account,
        period: ReportPeriod,
        policy: &ReportPolicy,
    ) -> Self {
        let engine = ledger.engine();
        let basis = policy.general_ledger;
        // Lines never predate inception; an empty window opens and closes on the balance at `to`.
        let window = DateRange::new(period.from.max(ledger.inception), period.to);
        let opening_balance = if window.is_empty() {
            engine.balance_of(&account.code, ledger.cumulative(period.to), basis)
        } else {
            match window.start.pred_opt() {
                Some(day_before) => {
                    engine.balance_of(&account.code, ledger.cumulative(day_before), basis)
                }
                None => 0.0,
            }
        };

        let mut running_balance = opening_balance;
        let mut total_debit = 0.0;
        let mut total_credit = 0.0;
        let lines: Vec<GeneralLedgerLine> = engine
            .eligible(window, basis)
            .filter(|txn| txn.touches(&account.code))
            .map(|txn| {
                let effect = txn.effect_on(&account.code);
                let (debit, credit) = if effect < 0.0 { (0.0, -effect) } else { (effect, 0.0) };
                total_debit += debit;
                total_credit += credit;
                running_balance += effect;
                GeneralLedgerLine {
                    date: txn.date,
                    voucher_no: txn.voucher_no.clone(),
                    description: txn.description.clone(),
                    debit,
                    credit,
                    running_balance,
                }
            })
            .collect();

        tracing::debug!(
            account = %account.code,
            lines = lines.len(),
            opening_balance,
            closing_balance = running_balance,
            "assembled general ledger"
        );

        Self {
            code: account.code.clone(),
            name: account.name.clone(),
            period,
            opening_balance,
            lines,
            total_debit,
            total_credit,
            closing_balance: running_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountCategory, RecognitionBasis, Transaction, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn running_balance_starts_from_opening() {
        let cash = Account::new("1001", "Cash", AccountCategory::Asset);
        let accounts = vec![cash.clone()];
        let txns = vec![
            Transaction::new("1", date(2023, 12, 1), TransactionType::Fee, "1001", "4001", 100.0),
            Transaction::new("2", date(2024, 1, 5), TransactionType::Fee, "1001", "4001", 40.0)
                .with_voucher("RV-2"),
            Transaction::new("3", date(2024, 1, 9), TransactionType::Other, "5001", "1001", 25.0)
                .with_voucher("PV-3"),
            Transaction::new("4", date(2024, 1, 9), TransactionType::Other, "5001", "1002", 99.0),
        ];
        let ledger = Ledger::new(&accounts, &txns);
        let period = ReportPeriod::new(date(2024, 1, 1), date(2024, 1, 31));
        let gl = GeneralLedger::assemble(&ledger, &cash, period, &ReportPolicy::default());

        assert_eq!(gl.opening_balance, 100.0);
        assert_eq!(gl.lines.len(), 2);
        assert_eq!(gl.lines[0].voucher_no, "RV-2");
        assert_eq!(gl.lines[0].running_balance, 140.0);
        assert_eq!(gl.lines[1].credit, 25.0);
        assert_eq!(gl.closing_balance, 115.0);
        assert_eq!(
            gl.closing_balance,
            ledger.balance_of("1001", ledger.cumulative(period.to), RecognitionBasis::Accrual)
        );
    }
}
