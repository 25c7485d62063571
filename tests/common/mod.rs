#![allow(dead_code)]

use chrono::NaiveDate;
use ledger_reports::{
    domain::{
        Account, AccountCategory, Campus, MasterData, Student, Transaction, TransactionStatus,
        TransactionType,
    },
    storage::LedgerSnapshot,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn chart_of_accounts() -> Vec<Account> {
    vec![
        Account::new("1", "Assets", AccountCategory::Asset).with_level(1),
        Account::new("1001", "Cash in Hand", AccountCategory::Asset),
        Account::new("1002", "Bank", AccountCategory::Asset),
        Account::new("1201", "Fee Receivable", AccountCategory::Asset),
        Account::new("2001", "Security Deposits", AccountCategory::Liability),
        Account::new("3001", "Capital", AccountCategory::Equity),
        Account::new("4", "Income", AccountCategory::Income).with_level(1),
        Account::new("4001", "Tuition Fee", AccountCategory::Income),
        Account::new("4002", "Admission Fee", AccountCategory::Income),
        Account::new("5001", "Salaries", AccountCategory::Expense),
        Account::new("5002", "Utilities", AccountCategory::Expense),
    ]
}

/// A balanced ledger: every voucher debits and credits leaf accounts.
pub fn vouchers() -> Vec<Transaction> {
    vec![
        Transaction::new("t01", date(2023, 9, 1), TransactionType::Other, "1002", "3001", 500000.0)
            .with_voucher("JV-001")
            .with_description("Opening capital"),
        Transaction::new("t02", date(2023, 10, 1), TransactionType::FeeDue, "1201", "4001", 60000.0)
            .with_voucher("FD-001")
            .with_description("Tuition due fall batch"),
        Transaction::new("t03", date(2023, 10, 15), TransactionType::FeeReceived, "1001", "1201", 40000.0)
            .with_voucher("RV-001")
            .with_description("Tuition collected"),
        Transaction::new("t04", date(2023, 11, 30), TransactionType::Other, "5001", "1002", 30000.0)
            .with_voucher("PV-001")
            .with_description("November salaries"),
        Transaction::new("t05", date(2024, 1, 10), TransactionType::FeeDue, "1201", "4001", 80000.0)
            .with_voucher("FD-002")
            .with_description("Tuition due spring batch"),
        Transaction::new("t06", date(2024, 1, 20), TransactionType::Fee, "1001", "4002", 15000.0)
            .with_voucher("RV-002")
            .with_description("Admission fee collected"),
        Transaction::new("t07", date(2024, 2, 5), TransactionType::FeeReceived, "1002", "1201", 70000.0)
            .with_voucher("RV-003")
            .with_description("Tuition collected by bank"),
        Transaction::new("t08", date(2024, 2, 28), TransactionType::Other, "5002", "1001", 8000.0)
            .with_voucher("PV-002")
            .with_description("Electricity"),
        Transaction::new("t09", date(2024, 3, 1), TransactionType::Other, "1001", "2001", 5000.0)
            .with_voucher("JV-002")
            .with_description("Hostel security deposit"),
        Transaction::new("t10", date(2024, 3, 2), TransactionType::Other, "5001", "1002", 45000.0)
            .with_voucher("PV-003")
            .with_description("February salaries")
            .with_status(TransactionStatus::Draft),
    ]
}

pub fn students() -> Vec<Student> {
    vec![
        Student::new("GIMS-001", "Ahmed Raza", 25000.0)
            .with_sms_number("03001234567")
            .enrolled("Main", "MBBS", "1st"),
        Student::new("GIMS-002", "Fatima Noor", 0.0)
            .with_sms_number("03007654321")
            .enrolled("Main", "MBBS", "1st"),
        Student::new("GIMS-003", "Usman Ali", 12000.5)
            .enrolled("City", "DPT", "3rd"),
        Student::new("GIMS-004", "Zainab Khan", 8000.0)
            .with_sms_number("03111111111")
            .enrolled("City", "DPT", "3rd"),
    ]
}

pub fn master_data() -> MasterData {
    MasterData {
        campuses: vec![
            Campus { name: "Main".into() },
            Campus { name: "City".into() },
        ],
        programs: vec!["MBBS".into(), "DPT".into()],
        semesters: vec!["1st".into(), "3rd".into()],
    }
}

pub fn snapshot() -> LedgerSnapshot {
    LedgerSnapshot {
        accounts: chart_of_accounts(),
        transactions: vouchers(),
        students: students(),
        master_data: master_data(),
    }
}
