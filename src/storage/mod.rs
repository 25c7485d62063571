pub mod json_backend;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Account, MasterData, Student, Transaction};
use crate::errors::LedgerError;
use crate::ledger::Ledger;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Everything the host application hands over in one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub master_data: MasterData,
}

impl LedgerSnapshot {
    pub fn ledger(&self) -> Ledger<'_> {
        Ledger::new(&self.accounts, &self.transactions)
    }
}

/// Abstraction over places a snapshot can be read from or written to.
pub trait SnapshotSource {
    fn load(&self, path: &Path) -> Result<LedgerSnapshot>;
    fn save(&self, snapshot: &LedgerSnapshot, path: &Path) -> Result<()>;
}

pub use json_backend::{
    load_snapshot_from_path, save_snapshot_to_path, snapshot_warnings, JsonSnapshots,
};
