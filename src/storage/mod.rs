//! Storage layer for saldo
//!
//! JSON file storage with atomic writes. One repository per collection,
//! coordinated by `Storage`. This is the state store: every command loads
//! all collections into memory, mutates, and saves.

pub mod accounts;
pub mod budgets;
pub mod cards;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use accounts::AccountRepository;
pub use budgets::BudgetRepository;
pub use cards::CardRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::SaldoPaths;
use crate::error::SaldoError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SaldoPaths,
    pub accounts: AccountRepository,
    pub cards: CardRepository,
    pub transactions: TransactionRepository,
    pub goals: GoalRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SaldoPaths) -> Result<Self, SaldoError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            cards: CardRepository::new(paths.cards_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            goals: GoalRepository::new(paths.goals_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SaldoPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SaldoError> {
        self.accounts.load()?;
        self.cards.load()?;
        self.transactions.load()?;
        self.goals.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SaldoError> {
        self.accounts.save()?;
        self.cards.save()?;
        self.transactions.save()?;
        self.goals.save()?;
        self.budgets.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let _storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_load_all_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.accounts.count().unwrap(), 0);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
