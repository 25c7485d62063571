use crate::config::ReportConfig;
use crate::core::services::Report;
use crate::currency::format_amount;
use crate::notify::{DeliveryStatus, DispatchReport};
use crate::reports::{
    AccountAmount, BalanceSheet, GeneralLedger, IncomeStatement, ReportKind, TransactionSummary,
    TrialBalance, SURPLUS_LABEL,
};

use super::table::{Table, TableColumn};

const DESCRIPTION_WIDTH: usize = 40;

/// Formatting settings shared by every statement.
pub struct StatementRenderer<'a> {
    config: &'a ReportConfig,
}

impl<'a> StatementRenderer<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, report: &Report) -> String {
        match report {
            Report::TrialBalance(tb) => self.trial_balance(tb),
            Report::IncomeStatement(is) => self.income_statement(is),
            Report::BalanceSheet(bs) => self.balance_sheet(bs),
            Report::GeneralLedger(gl) => self.general_ledger(gl),
            Report::TransactionSummary(ts) => self.transaction_summary(ts),
        }
    }

    fn amount(&self, value: f64) -> String {
        format_amount(&self.config.locale, &self.config.currency, value)
    }

    /// Zero cells read as a dash, the way printed ledgers show empty columns.
    fn column_amount(&self, value: f64) -> String {
        if value == 0.0 {
            "-".into()
        } else {
            self.amount(value)
        }
    }

    fn heading(&self, kind: ReportKind, subtitle: String) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.config.institute_name.to_uppercase(),
            kind.title(),
            subtitle
        )
    }

    pub fn trial_balance(&self, tb: &TrialBalance) -> String {
        let symbol = crate::currency::symbol_for(self.config.currency.as_str());
        let mut table = Table::new(vec![
            TableColumn::left("Code"),
            TableColumn::left("Account Name"),
            TableColumn::left("Category"),
            TableColumn::right(format!("Debit ({symbol})")),
            TableColumn::right(format!("Credit ({symbol})")),
        ]);
        for row in &tb.rows {
            table.push_row(vec![
                row.code.clone(),
                row.name.clone(),
                row.category.to_string(),
                self.column_amount(row.debit),
                self.column_amount(row.credit),
            ]);
        }
        table.push_footer(vec![
            String::new(),
            "TOTAL".into(),
            String::new(),
            self.amount(tb.total_debit),
            self.amount(tb.total_credit),
        ]);
        format!(
            "{}\n{}",
            self.heading(ReportKind::TrialBalance, format!("As at {}", tb.as_of)),
            table.render()
        )
    }

    fn section(&self, header: &str, rows: &[AccountAmount], total_label: &str, total: f64) -> String {
        let mut table = Table::new(vec![TableColumn::left(header), TableColumn::right("Amount")]);
        for row in rows {
            table.push_row(vec![row.name.clone(), self.amount(row.amount)]);
        }
        table.push_footer(vec![total_label.into(), self.amount(total)]);
        table.render()
    }

    pub fn income_statement(&self, is: &IncomeStatement) -> String {
        let net = is.net();
        let verdict = if is.is_surplus() {
            "SURPLUS (NET PROFIT)"
        } else {
            "DEFICIT"
        };
        format!(
            "{}\n{}\n\n{}\n\n{}: {} {}",
            self.heading(
                ReportKind::IncomeStatement,
                format!("For the period {} to {}", is.period.from, is.period.to)
            ),
            self.section("REVENUE (COLLECTIONS)", &is.revenue, "Total Revenue", is.total_revenue),
            self.section("EXPENDITURE", &is.expenditure, "Total Expenditure", is.total_expenditure),
            verdict,
            crate::currency::symbol_for(self.config.currency.as_str()),
            self.amount(net.abs())
        )
    }

    pub fn balance_sheet(&self, bs: &BalanceSheet) -> String {
        let mut equity = Table::new(vec![
            TableColumn::left("Equity & Retained Earnings"),
            TableColumn::right("Amount"),
        ]);
        equity.push_row(vec![SURPLUS_LABEL.into(), self.amount(bs.surplus)]);
        equity.push_footer(vec![
            "TOTAL LIABILITIES & EQUITY".into(),
            self.amount(bs.total_liabilities_and_equity()),
        ]);
        format!(
            "{}\n{}\n\n{}\n\n{}",
            self.heading(ReportKind::BalanceSheet, format!("As at {}", bs.as_of)),
            self.section("ASSETS", &bs.assets, "TOTAL ASSETS", bs.total_assets),
            self.section("Liabilities", &bs.liabilities, "Total Liabilities", bs.total_liabilities),
            equity.render()
        )
    }

    pub fn general_ledger(&self, gl: &GeneralLedger) -> String {
        let mut table = Table::new(vec![
            TableColumn::left("Date"),
            TableColumn::left("Voucher"),
            TableColumn::left("Description").max_width(DESCRIPTION_WIDTH),
            TableColumn::right("Debit"),
            TableColumn::right("Credit"),
            TableColumn::right("Balance"),
        ]);
        table.push_row(vec![
            gl.period.from.to_string(),
            String::new(),
            "Opening balance".into(),
            String::new(),
            String::new(),
            self.amount(gl.opening_balance),
        ]);
        for line in &gl.lines {
            table.push_row(vec![
                line.date.to_string(),
                line.voucher_no.clone(),
                line.description.clone(),
                self.column_amount(line.debit),
                self.column_amount(line.credit),
                self.amount(line.running_balance),
            ]);
        }
        table.push_footer(vec![
            gl.period.to.to_string(),
            String::new(),
            "Closing balance".into(),
            self.amount(gl.total_debit),
            self.amount(gl.total_credit),
            self.amount(gl.closing_balance),
        ]);
        format!(
            "{}\n{}",
            self.heading(
                ReportKind::GeneralLedger,
                format!(
                    "{} {} for the period {} to {}",
                    gl.code, gl.name, gl.period.from, gl.period.to
                )
            ),
            table.render()
        )
    }

    pub fn transaction_summary(&self, ts: &TransactionSummary) -> String {
        let mut table = Table::new(vec![
            TableColumn::left("Date"),
            TableColumn::left("Voucher"),
            TableColumn::left("Description").max_width(DESCRIPTION_WIDTH),
            TableColumn::right("Amount"),
        ]);
        for txn in &ts.transactions {
            table.push_row(vec![
                txn.date.to_string(),
                txn.voucher_no.clone(),
                txn.description.clone(),
                self.amount(txn.amount),
            ]);
        }
        table.push_footer(vec![
            String::new(),
            format!("{} rows", ts.transactions.len()),
            String::new(),
            self.amount(ts.total_amount),
        ]);
        format!(
            "{}\n{}",
            self.heading(
                ReportKind::TransactionSummary,
                format!(
                    "For the period {} to {} ({:?})",
                    ts.period.from, ts.period.to, ts.filter
                )
            ),
            table.render()
        )
    }

    pub fn dispatch_report(&self, report: &DispatchReport) -> String {
        let mut table = Table::new(vec![
            TableColumn::left("Admission No"),
            TableColumn::left("Number"),
            TableColumn::left("Status"),
        ]);
        for entry in &report.entries {
            let status = match &entry.status {
                DeliveryStatus::Sent => "Sent Successfully".to_string(),
                DeliveryStatus::Skipped(reason) => format!("Skipped: {reason}"),
                DeliveryStatus::Failed(reason) => format!("Failed: {reason}"),
            };
            table.push_row(vec![
                entry.admission_no.clone(),
                entry.number.clone().unwrap_or_else(|| "-".into()),
                status,
            ]);
        }
        format!(
            "Batch {}: {} sent, {} skipped, {} failed\n{}",
            report.batch_id,
            report.sent(),
            report.skipped(),
            report.failed(),
            table.render()
        )
    }
}
