//! Command-line front end: loads a host snapshot and prints statements.

pub mod output;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::config::{ConfigManager, ReportConfig};
use crate::core::services::{NotificationService, ReportRequest, ReportService, ServiceError};
use crate::domain::{period::parse_date, NamedEntity};
use crate::errors::LedgerError;
use crate::notify::{templates::find_template, DefaulterFilter, SimulatedGateway};
use crate::render::StatementRenderer;
use crate::reports::{ReportKind, ReportPeriod, SummaryFilter};
use crate::storage::{load_snapshot_from_path, snapshot_warnings, LedgerSnapshot};

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Invalid input: {0}")]
    Input(String),
}

#[derive(Parser, Debug)]
#[command(name = "ledger_reports_cli")]
#[command(about = "Financial statements and fee-defaulter notifications from a ledger snapshot")]
pub struct Cli {
    /// JSON snapshot with accounts, transactions, students and master data.
    #[arg(long, env = "LEDGER_REPORTS_SNAPSHOT")]
    snapshot: PathBuf,

    /// Configuration file (defaults to the managed location).
    #[arg(long, env = "LEDGER_REPORTS_CONFIG")]
    config: Option<PathBuf>,

    /// Print the report structure as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cumulative debit/credit position of every leaf account.
    TrialBalance(AsOfArgs),
    /// Cash-basis revenue against expenditure for a period.
    IncomeStatement(PeriodArgs),
    /// Assets, liabilities and the current surplus as at a date.
    BalanceSheet(AsOfArgs),
    /// Posted vouchers for a period, without fee-due entries.
    Summary(SummaryArgs),
    /// Movements and running balance of one account.
    GeneralLedger(GeneralLedgerArgs),
    /// Students with an outstanding balance.
    Defaulters(FilterArgs),
    /// Send a (simulated) SMS to every matching defaulter.
    Notify(NotifyArgs),
    /// Report integrity warnings for the snapshot.
    Check,
}

#[derive(Args, Debug)]
struct AsOfArgs {
    /// Statement date (YYYY-MM-DD), defaults to today.
    #[arg(long, value_parser = date_arg)]
    to: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct PeriodArgs {
    /// First day of the period, defaults to January 1st of this year.
    #[arg(long, value_parser = date_arg)]
    from: Option<NaiveDate>,
    /// Last day of the period, defaults to today.
    #[arg(long, value_parser = date_arg)]
    to: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    #[command(flatten)]
    period: PeriodArgs,
    /// all, income or expense.
    #[arg(long, default_value = "all")]
    filter: SummaryFilter,
}

#[derive(Args, Debug)]
struct GeneralLedgerArgs {
    #[arg(long)]
    account: String,
    #[command(flatten)]
    period: PeriodArgs,
}

#[derive(Args, Debug)]
struct FilterArgs {
    #[arg(long)]
    campus: Option<String>,
    #[arg(long)]
    program: Option<String>,
    #[arg(long)]
    semester: Option<String>,
}

impl From<&FilterArgs> for DefaulterFilter {
    fn from(args: &FilterArgs) -> Self {
        Self {
            campus: args.campus.clone(),
            program: args.program.clone(),
            semester: args.semester.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct NotifyArgs {
    #[command(flatten)]
    filter: FilterArgs,
    /// Name of a built-in template.
    #[arg(long, conflicts_with = "message")]
    template: Option<String>,
    /// Message text; `[NAME]` and `[BALANCE]` are filled per student.
    #[arg(long)]
    message: Option<String>,
    /// Overrides the configured pause between sends.
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| err.to_string())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl PeriodArgs {
    fn resolve(&self) -> ReportPeriod {
        let to = self.to.unwrap_or_else(today);
        let year_start = crate::domain::DateRange::year_to_date(to).start;
        ReportPeriod::new(self.from.unwrap_or(year_start), to)
    }
}

impl AsOfArgs {
    fn resolve(&self) -> ReportPeriod {
        let to = self.to.unwrap_or_else(today);
        ReportPeriod::new(to, to)
    }
}

pub fn run_cli() -> Result<(), CliError> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => ConfigManager::at_path(path).load()?,
        None => ConfigManager::new().load()?,
    };
    let snapshot = load_snapshot_from_path(&cli.snapshot)?;

    match &cli.command {
        Command::TrialBalance(args) => {
            report(&cli, &config, &snapshot, ReportRequest::new(ReportKind::TrialBalance, args.resolve()))
        }
        Command::IncomeStatement(args) => report(
            &cli,
            &config,
            &snapshot,
            ReportRequest::new(ReportKind::IncomeStatement, args.resolve()),
        ),
        Command::BalanceSheet(args) => {
            report(&cli, &config, &snapshot, ReportRequest::new(ReportKind::BalanceSheet, args.resolve()))
        }
        Command::Summary(args) => report(
            &cli,
            &config,
            &snapshot,
            ReportRequest::new(ReportKind::TransactionSummary, args.period.resolve())
                .with_filter(args.filter),
        ),
        Command::GeneralLedger(args) => report(
            &cli,
            &config,
            &snapshot,
            ReportRequest::new(ReportKind::GeneralLedger, args.period.resolve())
                .for_account(args.account.clone()),
        ),
        Command::Defaulters(args) => list_defaulters(&cli, &config, &snapshot, args),
        Command::Notify(args) => notify(&cli, &config, &snapshot, args),
        Command::Check => check(&snapshot),
    }
}

fn report(
    cli: &Cli,
    config: &ReportConfig,
    snapshot: &LedgerSnapshot,
    request: ReportRequest,
) -> Result<(), CliError> {
    let ledger = snapshot.ledger().with_inception(config.inception_date);
    let report = ReportService::build(&ledger, &request)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).map_err(LedgerError::from)?);
    } else {
        println!("{}", StatementRenderer::new(config).render(&report));
    }
    Ok(())
}

fn list_defaulters(
    cli: &Cli,
    config: &ReportConfig,
    snapshot: &LedgerSnapshot,
    args: &FilterArgs,
) -> Result<(), CliError> {
    let filter = DefaulterFilter::from(args);
    let found = NotificationService::defaulters(&snapshot.students, &filter);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&found).map_err(LedgerError::from)?);
        return Ok(());
    }
    output::section(format!("Defaulters ({})", found.len()));
    for student in found {
        println!(
            "{}  {}  {}  {}",
            student.admission_no,
            student.name(),
            crate::currency::format_currency_value(&config.locale, &config.currency, student.balance),
            student.reachable_number().unwrap_or("-")
        );
    }
    Ok(())
}

fn notify(
    cli: &Cli,
    config: &ReportConfig,
    snapshot: &LedgerSnapshot,
    args: &NotifyArgs,
) -> Result<(), CliError> {
    let body = match (&args.template, &args.message) {
        (Some(name), _) => find_template(name)
            .map(|template| template.text)
            .ok_or_else(|| CliError::Input(format!("unknown template `{name}`")))?,
        (None, Some(message)) => message.clone(),
        (None, None) => return Err(CliError::Input("pass --template or --message".into())),
    };

    let mut config = config.clone();
    if let Some(delay_ms) = args.delay_ms {
        config.sms.dispatch_delay_ms = delay_ms;
    }
    let mut dispatcher = NotificationService::dispatcher(SimulatedGateway::new(), &config);
    let report = NotificationService::notify_defaulters(
        &mut dispatcher,
        &snapshot.students,
        &DefaulterFilter::from(&args.filter),
        &body,
        |progress| tracing::debug!(percent = progress.percent, "dispatch progress"),
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).map_err(LedgerError::from)?);
    } else {
        println!("{}", StatementRenderer::new(&config).dispatch_report(&report));
        output::success("Bulk SMS finished!");
    }
    Ok(())
}

fn check(snapshot: &LedgerSnapshot) -> Result<(), CliError> {
    let warnings = snapshot_warnings(snapshot);
    if warnings.is_empty() {
        output::success("Snapshot is consistent.");
    } else {
        for warning in &warnings {
            output::warning(warning);
        }
        output::info(format!("{} warning(s)", warnings.len()));
    }
    Ok(())
}
