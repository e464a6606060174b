//! JSON snapshot export
//!
//! A single document holding every collection, usable as a full backup.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Account, Budget, Card, Goal, Transaction};
use crate::storage::Storage;

/// Complete data snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub cards: Vec<Card>,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    /// Capture the current storage state
    pub fn capture(storage: &Storage) -> SaldoResult<Self> {
        Ok(Self {
            accounts: storage.accounts.get_all()?,
            cards: storage.cards.get_all()?,
            transactions: storage.transactions.get_all()?,
            goals: storage.goals.get_all()?,
            budgets: storage.budgets.get_all()?,
        })
    }
}

/// Write a snapshot as pretty-printed JSON
pub fn write_json<W: Write>(writer: &mut W, snapshot: &Snapshot) -> SaldoResult<()> {
    serde_json::to_writer_pretty(&mut *writer, snapshot)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Read a snapshot back from JSON
pub fn read_json<R: Read>(reader: R) -> SaldoResult<Snapshot> {
    serde_json::from_reader(reader)
        .map_err(|e| SaldoError::Import(format!("invalid snapshot: {}", e)))
}
