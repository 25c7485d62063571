use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use crate::domain::{Displayable, Identifiable};
use crate::utils::write_atomic;

use super::{LedgerSnapshot, Result, SnapshotSource};

/// JSON file backend for host snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshots;

impl SnapshotSource for JsonSnapshots {
    fn load(&self, path: &Path) -> Result<LedgerSnapshot> {
        load_snapshot_from_path(path)
    }

    fn save(&self, snapshot: &LedgerSnapshot, path: &Path) -> Result<()> {
        save_snapshot_to_path(snapshot, path)
    }
}

pub fn load_snapshot_from_path(path: &Path) -> Result<LedgerSnapshot> {
    let data = fs::read_to_string(path)?;
    let snapshot: LedgerSnapshot = serde_json::from_str(&data)?;
    tracing::info!(
        path = %path.display(),
        accounts = snapshot.accounts.len(),
        transactions = snapshot.transactions.len(),
        students = snapshot.students.len(),
        "snapshot loaded"
    );
    for warning in snapshot_warnings(&snapshot) {
        tracing::warn!("{warning}");
    }
    Ok(snapshot)
}

pub fn save_snapshot_to_path(snapshot: &LedgerSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    write_atomic(path, &json)?;
    Ok(())
}

/// Integrity findings that do not stop reporting but usually point at bad upstream data.
pub fn snapshot_warnings(snapshot: &LedgerSnapshot) -> Vec<String> {
    let levels: HashMap<&str, u8> = snapshot
        .accounts
        .iter()
        .map(|account| (account.code.as_str(), account.level))
        .collect();
    let mut seen_ids = HashSet::new();
    let mut warnings = Vec::new();

    for txn in &snapshot.transactions {
        if !seen_ids.insert(txn.key()) {
            warnings.push(format!("Transaction {} appears more than once", txn.id));
        }
        if txn.debit_account == txn.credit_account {
            warnings.push(format!(
                "Transaction {} debits and credits the same account: {}",
                txn.id,
                txn.display_label()
            ));
        }
        for (side, code) in [("debit", &txn.debit_account), ("credit", &txn.credit_account)] {
            match levels.get(code.as_str()) {
                None => warnings.push(format!(
                    "Transaction {} references unknown {} account {}",
                    txn.id, side, code
                )),
                Some(level) if *level != crate::domain::account::LEAF_LEVEL => {
                    warnings.push(format!(
                        "Transaction {} posts to non-leaf {} account {} (level {})",
                        txn.id, side, code, level
                    ))
                }
                Some(_) => {}
            }
        }
    }

    warnings
}
