//! Account repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SaldoError;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<AccountId, Account>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), SaldoError> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for account in file_data.accounts {
            data.insert(account.id, account);
        }

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = AccountData {
            accounts: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Result<Option<Account>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all accounts, sorted by name
    pub fn get_all(&self) -> Result<Vec<Account>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut accounts: Vec<_> = data.values().cloned().collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }

    /// Get an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Account>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|a| a.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update an account
    pub fn upsert(&self, account: Account) -> Result<(), SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(account.id, account);
        Ok(())
    }

    /// Delete an account, returning whether it existed
    pub fn delete(&self, id: AccountId) -> Result<bool, SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if an account exists
    pub fn exists(&self, id: AccountId) -> Result<bool, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Count accounts
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
    use crate::models::{AccountKind, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AccountRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        let repo = AccountRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_account(name: &str) -> Account {
        Account::new(name, "Nubank", Money::zero(), AccountKind::Checking, "#820ad1")
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = sample_account("Conta Corrente");
        let id = account.id;

        repo.upsert(account).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Conta Corrente");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let account = sample_account("Poupança");
        let id = account.id;

        repo.load().unwrap();
        repo.upsert(account).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("accounts.json");
        let repo2 = AccountRepository::new(path);
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Poupança");
    }

    #[test]
    fn test_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(sample_account("Minha Conta")).unwrap();

        let found = repo.get_by_name("minha conta").unwrap();
        assert!(found.is_some());

        let not_found = repo.get_by_name("outra").unwrap();
        assert!(not_found.is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = sample_account("Conta");
        let id = account.id;

        repo.upsert(account).unwrap();
        assert!(repo.exists(id).unwrap());

        assert!(repo.delete(id).unwrap());
        assert!(!repo.exists(id).unwrap());
        assert!(!repo.delete(id).unwrap());
    }
}
