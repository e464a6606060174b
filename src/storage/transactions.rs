//! Transaction repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::SaldoError;
use crate::models::{AccountId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), SaldoError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, most recent first
    pub fn get_all(&self) -> Result<Vec<Transaction>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Get transactions for an account
    pub fn get_by_account(&self, account_id: AccountId) -> Result<Vec<Transaction>, SaldoError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|t| t.account_id == account_id)
            .collect())
    }

    /// Get transactions on an exact date
    pub fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Transaction>, SaldoError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|t| t.date == date).collect())
    }

    /// Insert a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete all transactions owned by an account, returning how many went
    pub fn delete_by_account(&self, account_id: AccountId) -> Result<usize, SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|_, t| t.account_id != account_id);
        Ok(before - data.len())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn sample(account_id: AccountId, day: u32) -> Transaction {
        Transaction::new(
            "Mercado",
            Money::new(dec!(50)),
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            Category::Food,
            TransactionKind::Expense,
            account_id,
        )
    }

    #[test]
    fn test_get_all_sorted_recent_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account_id = AccountId::new();
        repo.upsert(sample(account_id, 5)).unwrap();
        repo.upsert(sample(account_id, 20)).unwrap();
        repo.upsert(sample(account_id, 12)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].date.to_string(), "2025-03-20");
        assert_eq!(all[2].date.to_string(), "2025-03-05");
    }

    #[test]
    fn test_get_by_account() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mine = AccountId::new();
        let other = AccountId::new();
        repo.upsert(sample(mine, 1)).unwrap();
        repo.upsert(sample(other, 2)).unwrap();

        let txns = repo.get_by_account(mine).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].account_id, mine);
    }

    #[test]
    fn test_get_by_date_exact_match_only() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account_id = AccountId::new();
        repo.upsert(sample(account_id, 10)).unwrap();
        repo.upsert(sample(account_id, 11)).unwrap();

        let on_day = repo
            .get_by_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
            .unwrap();
        assert_eq!(on_day.len(), 1);
    }

    #[test]
    fn test_delete_by_account() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mine = AccountId::new();
        let other = AccountId::new();
        repo.upsert(sample(mine, 1)).unwrap();
        repo.upsert(sample(mine, 2)).unwrap();
        repo.upsert(sample(other, 3)).unwrap();

        let removed = repo.delete_by_account(mine).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = sample(AccountId::new(), 15);
        let id = txn.id;
        repo.upsert(txn).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();
        assert!(repo2.get(id).unwrap().is_some());
    }
}
