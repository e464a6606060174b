//! Budget service
//!
//! Setting a budget replaces the ceiling for its category. The stored
//! `spent` figure is preserved when a ceiling is updated and starts at
//! zero for a fresh category.

use crate::error::SaldoResult;
use crate::models::{Budget, Category, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly ceiling for a category
    pub fn set(&self, category: Category, limit: Money) -> SaldoResult<Budget> {
        let budget = match self.storage.budgets.get(category)? {
            Some(mut existing) => {
                existing.limit = limit;
                existing
            }
            None => Budget::new(category, limit),
        };

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;
        Ok(budget)
    }

    /// List all budgets in category display order
    pub fn list(&self) -> SaldoResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Remove the ceiling for a category, returning whether one existed
    pub fn unset(&self, category: Category) -> SaldoResult<bool> {
        let existed = self.storage.budgets.delete(category)?;
        if existed {
            self.storage.budgets.save()?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SaldoPaths;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_fresh_category_starts_unspent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let budget = service.set(Category::Food, Money::new(dec!(800))).unwrap();
        assert!(budget.spent.is_zero());
    }

    #[test]
    fn test_set_preserves_spent_on_update() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let mut budget = service.set(Category::Food, Money::new(dec!(800))).unwrap();
        budget.spent = Money::new(dec!(320));
        storage.budgets.upsert(budget).unwrap();

        let updated = service.set(Category::Food, Money::new(dec!(1000))).unwrap();
        assert_eq!(updated.limit, Money::new(dec!(1000)));
        assert_eq!(updated.spent, Money::new(dec!(320)));
    }

    #[test]
    fn test_unset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set(Category::Transport, Money::new(dec!(400))).unwrap();
        assert!(service.unset(Category::Transport).unwrap());
        assert!(!service.unset(Category::Transport).unwrap());
        assert!(service.list().unwrap().is_empty());
    }
}
