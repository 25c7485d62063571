mod common;

use common::{chart_of_accounts, date, vouchers};
use ledger_reports::{
    core::services::{Report, ReportRequest, ReportService},
    domain::{Account, AccountCategory, Transaction, TransactionType},
    ledger::Ledger,
    reports::{ReportKind, ReportPeriod, ReportPolicy, SummaryFilter},
};

fn year_2024() -> ReportPeriod {
    ReportPeriod::new(date(2024, 1, 1), date(2024, 12, 31))
}

#[test]
fn trial_balance_columns_agree_on_balanced_ledger() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let tb = ReportService::trial_balance(&ledger, date(2024, 12, 31), &ReportPolicy::default());

    assert_eq!(tb.total_debit, 660000.0);
    assert_eq!(tb.total_credit, 660000.0);
    assert!(tb.is_balanced());
    let codes: Vec<_> = tb.rows.iter().map(|row| row.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["1001", "1002", "1201", "2001", "3001", "4001", "4002", "5001", "5002"]
    );
    let tuition = tb.rows.iter().find(|row| row.code == "4001").unwrap();
    assert_eq!((tuition.debit, tuition.credit), (0.0, 140000.0));
}

#[test]
fn trial_balance_excludes_group_accounts() {
    let accounts = vec![
        Account::new("1", "Assets", AccountCategory::Asset).with_level(1),
        Account::new("4", "Income", AccountCategory::Income).with_level(2),
    ];
    let txns = vec![Transaction::new("g", date(2024, 1, 1), TransactionType::Fee, "1", "4", 10.0)];
    let ledger = Ledger::new(&accounts, &txns);
    let tb = ReportService::trial_balance(&ledger, date(2024, 12, 31), &ReportPolicy::default());
    assert!(tb.rows.is_empty());
}

#[test]
fn trial_balance_respects_as_of_date() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let tb = ReportService::trial_balance(&ledger, date(2023, 12, 31), &ReportPolicy::default());
    let receivable = tb.rows.iter().find(|row| row.code == "1201").unwrap();
    assert_eq!(receivable.debit, 20000.0);
    assert!(tb.is_balanced());
}

#[test]
fn income_statement_is_cash_basis_for_revenue() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let is = ReportService::income_statement(&ledger, year_2024(), &ReportPolicy::default());

    let revenue: Vec<_> = is.revenue.iter().map(|r| (r.code.as_str(), r.amount)).collect();
    assert_eq!(revenue, vec![("4002", 15000.0)]);
    let expenditure: Vec<_> = is.expenditure.iter().map(|r| (r.code.as_str(), r.amount)).collect();
    assert_eq!(expenditure, vec![("5002", 8000.0)]);
    assert_eq!(is.net(), 7000.0);
    assert!(is.is_surplus());
}

#[test]
fn accrual_policy_recognises_dues_as_revenue() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let policy = ReportPolicy {
        revenue: ledger_reports::domain::RecognitionBasis::Accrual,
        ..ReportPolicy::default()
    };
    let is = ReportService::income_statement(&ledger, year_2024(), &policy);
    assert_eq!(is.total_revenue, 95000.0);
}

#[test]
fn surplus_matches_income_statement_since_inception() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let policy = ReportPolicy::default();
    let as_of = date(2024, 12, 31);

    let sheet = ReportService::balance_sheet(&ledger, as_of, &policy);
    let since_inception = ReportPeriod::new(ledger.inception, as_of);
    let is = ReportService::income_statement(&ledger, since_inception, &policy);

    assert_eq!(sheet.surplus, is.net());
    assert_eq!(sheet.surplus, -23000.0);
    assert!(!is.is_surplus());
}

#[test]
fn balance_sheet_sections_and_totals() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let sheet = ReportService::balance_sheet(&ledger, date(2024, 12, 31), &ReportPolicy::default());

    let assets: Vec<_> = sheet.assets.iter().map(|r| (r.name.as_str(), r.amount)).collect();
    assert_eq!(
        assets,
        vec![("Cash in Hand", 52000.0), ("Bank", 540000.0), ("Fee Receivable", 30000.0)]
    );
    assert_eq!(sheet.total_assets, 622000.0);
    assert_eq!(sheet.liabilities.len(), 1);
    assert_eq!(sheet.total_liabilities, 5000.0);
    assert_eq!(sheet.total_liabilities_and_equity(), -18000.0);
}

#[test]
fn custom_inception_shortens_cumulative_history() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns).with_inception(date(2024, 1, 1));
    let sheet = ReportService::balance_sheet(&ledger, date(2024, 12, 31), &ReportPolicy::default());
    let cash = sheet.assets.iter().find(|r| r.code == "1001").unwrap();
    assert_eq!(cash.amount, 12000.0);
}

#[test]
fn transaction_summary_tabs() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let policy = ReportPolicy::default();

    let all = ReportService::transaction_summary(&ledger, year_2024(), SummaryFilter::All, &policy);
    let vouchers: Vec<_> = all.transactions.iter().map(|t| t.voucher_no.as_str()).collect();
    assert_eq!(vouchers, vec!["RV-002", "RV-003", "PV-002", "JV-002"]);
    assert_eq!(all.total_amount, 98000.0);

    let income = ReportService::transaction_summary(&ledger, year_2024(), SummaryFilter::Income, &policy);
    assert_eq!(income.transactions.len(), 1);
    let expense = ReportService::transaction_summary(&ledger, year_2024(), SummaryFilter::Expense, &policy);
    assert_eq!(expense.transactions[0].voucher_no, "PV-002");
}

#[test]
fn general_ledger_closing_equals_cumulative_balance() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let request = ReportRequest::new(ReportKind::GeneralLedger, year_2024()).for_account("1001");
    let Report::GeneralLedger(gl) = ReportService::build(&ledger, &request).unwrap() else {
        panic!("expected general ledger");
    };

    assert_eq!(gl.opening_balance, 40000.0);
    let running: Vec<_> = gl.lines.iter().map(|l| l.running_balance).collect();
    assert_eq!(running, vec![55000.0, 47000.0, 52000.0]);
    assert_eq!(gl.total_debit, 20000.0);
    assert_eq!(gl.total_credit, 8000.0);
    assert_eq!(
        gl.closing_balance,
        ledger.balance_of(
            "1001",
            ledger.cumulative(date(2024, 12, 31)),
            ledger_reports::domain::RecognitionBasis::Accrual
        )
    );
}

#[test]
fn empty_inputs_produce_empty_reports() {
    let ledger = Ledger::new(&[], &[]);
    let policy = ReportPolicy::default();
    let tb = ReportService::trial_balance(&ledger, date(2024, 12, 31), &policy);
    assert!(tb.rows.is_empty() && tb.total_debit == 0.0 && tb.total_credit == 0.0);
    let is = ReportService::income_statement(&ledger, year_2024(), &policy);
    assert_eq!((is.total_revenue, is.total_expenditure), (0.0, 0.0));
    let bs = ReportService::balance_sheet(&ledger, date(2024, 12, 31), &policy);
    assert_eq!((bs.total_assets, bs.total_liabilities, bs.surplus), (0.0, 0.0, 0.0));
    let ts = ReportService::transaction_summary(&ledger, year_2024(), SummaryFilter::All, &policy);
    assert!(ts.transactions.is_empty());
}

#[test]
fn reports_serialize_with_kind_tag() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let report =
        ReportService::build(&ledger, &ReportRequest::new(ReportKind::BalanceSheet, year_2024())).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["kind"], "BalanceSheet");
    assert_eq!(json["data"]["total_assets"], 622000.0);
}

fn general_ledger_for(ledger: &Ledger<'_>, code: &str, period: ReportPeriod) -> ledger_reports::reports::GeneralLedger {
    ReportService::general_ledger(ledger, code, period, &ReportPolicy::default()).unwrap()
}

#[test]
fn general_ledger_ignores_vouchers_before_inception() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns).with_inception(date(2024, 1, 1));
    let period = ReportPeriod::new(date(2023, 1, 1), date(2024, 12, 31));
    let gl = general_ledger_for(&ledger, "1001", period);

    assert_eq!(gl.opening_balance, 0.0);
    assert_eq!(gl.lines.len(), 3);
    assert_eq!(gl.closing_balance, 12000.0);
    assert_eq!(
        gl.closing_balance,
        ledger.balance_of(
            "1001",
            ledger.cumulative(period.to),
            ledger_reports::domain::RecognitionBasis::Accrual
        )
    );
}

#[test]
fn inverted_general_ledger_period_lists_nothing_and_keeps_balance_at_end() {
    let accounts = chart_of_accounts();
    let txns = vouchers();
    let ledger = Ledger::new(&accounts, &txns);
    let period = ReportPeriod::new(date(2024, 6, 1), date(2024, 1, 31));
    let gl = general_ledger_for(&ledger, "1001", period);

    assert!(gl.lines.is_empty());
    assert_eq!((gl.total_debit, gl.total_credit), (0.0, 0.0));
    assert_eq!(gl.opening_balance, 55000.0);
    assert_eq!(gl.closing_balance, 55000.0);
    assert_eq!(
        gl.closing_balance,
        ledger.balance_of(
            "1001",
            ledger.cumulative(period.to),
            ledger_reports::domain::RecognitionBasis::Accrual
        )
    );
}

#[test]
fn malformed_amount_surfaces_as_nan_in_every_statement() {
    let accounts = chart_of_accounts();
    let txns = vec![Transaction::new("nan", date(2024, 4, 1), TransactionType::Fee, "1001", "4001", f64::NAN)];
    let ledger = Ledger::new(&accounts, &txns);
    let policy = ReportPolicy::default();

    let tb = ReportService::trial_balance(&ledger, date(2024, 12, 31), &policy);
    let cash = tb.rows.iter().find(|row| row.code == "1001").unwrap();
    assert!(cash.debit.is_nan());
    assert_eq!(cash.credit, 0.0);
    assert!(tb.total_debit.is_nan());
    assert!(!tb.is_balanced());

    let is = ReportService::income_statement(&ledger, year_2024(), &policy);
    assert_eq!(is.revenue.len(), 1);
    assert!(is.total_revenue.is_nan());

    let sheet = ReportService::balance_sheet(&ledger, date(2024, 12, 31), &policy);
    assert!(sheet.surplus.is_nan());
}
