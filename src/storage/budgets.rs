//! Budget repository for JSON storage
//!
//! Budgets are keyed by category: at most one ceiling per category.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SaldoError;
use crate::models::{Budget, Category};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<Category, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), SaldoError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in file_data.budgets {
            data.insert(budget.category, budget);
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get the budget for a category
    pub fn get(&self, category: Category) -> Result<Option<Budget>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&category).cloned())
    }

    /// Get all budgets, in category display order
    pub fn get_all(&self) -> Result<Vec<Budget>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<Budget> = Vec::new();
        for category in Category::ALL {
            if let Some(budget) = data.get(&category) {
                budgets.push(budget.clone());
            }
        }
        Ok(budgets)
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> Result<(), SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(budget.category, budget);
        Ok(())
    }

    /// Delete the budget for a category, returning whether it existed
    pub fn delete(&self, category: Category) -> Result<bool, SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&category).is_some())
    }
}
