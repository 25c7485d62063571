#![doc(test(attr(deny(warnings))))]

//! Ledger Reports computes accounting statements (trial balance, income
//! statement, balance sheet, general ledger and transaction summary) over an
//! institute's in-memory vouchers, and selects and messages fee defaulters.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod notify;
pub mod render;
pub mod reports;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Ledger Reports tracing initialized.");
    });
}
