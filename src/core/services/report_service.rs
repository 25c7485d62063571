use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::Ledger;
use crate::reports::{
    BalanceSheet, GeneralLedger, IncomeStatement, ReportKind, ReportPeriod, ReportPolicy,
    SummaryFilter, TransactionSummary, TrialBalance,
};

use super::ServiceResult;

/// Parameters for assembling any statement through [`ReportService::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub period: ReportPeriod,
    pub filter: SummaryFilter,
    pub account: Option<String>,
    pub policy: ReportPolicy,
}

impl ReportRequest {
    pub fn new(kind: ReportKind, period: ReportPeriod) -> Self {
        Self {
            kind,
            period,
            filter: SummaryFilter::All,
            account: None,
            policy: ReportPolicy::default(),
        }
    }

    pub fn with_filter(mut self, filter: SummaryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn for_account(mut self, code: impl Into<String>) -> Self {
        self.account = Some(code.into());
        self
    }

    pub fn with_policy(mut self, policy: ReportPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data")]
pub enum Report {
    TrialBalance(TrialBalance),
    IncomeStatement(IncomeStatement),
    BalanceSheet(BalanceSheet),
    GeneralLedger(GeneralLedger),
    TransactionSummary(TransactionSummary),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::TrialBalance(_) => ReportKind::TrialBalance,
            Report::IncomeStatement(_) => ReportKind::IncomeStatement,
            Report::BalanceSheet(_) => ReportKind::BalanceSheet,
            Report::GeneralLedger(_) => ReportKind::GeneralLedger,
            Report::TransactionSummary(_) => ReportKind::TransactionSummary,
        }
    }
}

pub struct ReportService;

impl ReportService {
    pub fn trial_balance(ledger: &Ledger<'_>, as_of: NaiveDate, policy: &ReportPolicy) -> TrialBalance {
        TrialBalance::assemble(ledger, as_of, policy)
    }

    pub fn income_statement(
        ledger: &Ledger<'_>,
        period: ReportPeriod,
        policy: &ReportPolicy,
    ) -> IncomeStatement {
        IncomeStatement::assemble(ledger, period, policy)
    }

    pub fn balance_sheet(ledger: &Ledger<'_>, as_of: NaiveDate, policy: &ReportPolicy) -> BalanceSheet {
        BalanceSheet::assemble(ledger, as_of, policy)
    }

    pub fn transaction_summary(
        ledger: &Ledger<'_>,
        period: ReportPeriod,
        filter: SummaryFilter,
        policy: &ReportPolicy,
    ) -> TransactionSummary {
        TransactionSummary::assemble(ledger, period, filter, policy)
    }

    pub fn general_ledger(
        ledger: &Ledger<'_>,
        code: &str,
        period: ReportPeriod,
        policy: &ReportPolicy,
    ) -> ServiceResult<GeneralLedger> {
        let account = ledger
            .account(code)
            .ok_or_else(|| LedgerError::AccountNotFound(code.to_string()))?;
        Ok(GeneralLedger::assemble(ledger, account, period, policy))
    }

    pub fn build(ledger: &Ledger<'_>, request: &ReportRequest) -> ServiceResult<Report> {
        if request.period.from > request.period.to {
            tracing::warn!(
                from = %request.period.from,
                to = %request.period.to,
                "report period is inverted; period-based sections will be empty"
            );
        }
        tracing::info!(kind = ?request.kind, to = %request.period.to, "building report");

        let policy = &request.policy;
        let report = match request.kind {
            ReportKind::TrialBalance => {
                Report::TrialBalance(Self::trial_balance(ledger, request.period.to, policy))
            }
            ReportKind::IncomeStatement => {
                Report::IncomeStatement(Self::income_statement(ledger, request.period, policy))
            }
            ReportKind::BalanceSheet => {
                Report::BalanceSheet(Self::balance_sheet(ledger, request.period.to, policy))
            }
            ReportKind::TransactionSummary => Report::TransactionSummary(
                Self::transaction_summary(ledger, request.period, request.filter, policy),
            ),
            ReportKind::GeneralLedger => {
                let code = request.account.as_deref().ok_or_else(|| {
                    super::ServiceError::Invalid("general ledger needs an account code".into())
                })?;
                Report::GeneralLedger(Self::general_ledger(ledger, code, request.period, policy)?)
            }
        };
        Ok(report)
    }
}
