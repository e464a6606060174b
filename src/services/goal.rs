//! Savings goal service

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Category, Goal, GoalId, Money};
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new savings goal
    pub fn create(
        &self,
        title: &str,
        target_amount: Money,
        current_amount: Money,
        deadline: NaiveDate,
        category: Category,
    ) -> SaldoResult<Goal> {
        let goal = Goal::new(title, target_amount, current_amount, deadline, category);
        goal.validate().map_err(SaldoError::Validation)?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        debug!(goal = %goal.id, "created goal");
        Ok(goal)
    }

    /// List all goals, nearest deadline first
    pub fn list(&self) -> SaldoResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }

    /// Add a manual contribution toward a goal
    pub fn contribute(&self, id: GoalId, amount: Money) -> SaldoResult<Goal> {
        if amount.is_negative() {
            return Err(SaldoError::Validation(
                "Contribution cannot be negative".to_string(),
            ));
        }

        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| SaldoError::goal_not_found(id.to_string()))?;

        goal.current_amount += amount;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;
        Ok(goal)
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
    fn test_create_and_list_by_deadline() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        service
            .create(
                "Viagem",
                Money::new(dec!(5000)),
                Money::zero(),
                NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                Category::Entertainment,
            )
            .unwrap();
        service
            .create(
                "Reserva",
                Money::new(dec!(10000)),
                Money::new(dec!(2000)),
                NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                Category::Investment,
            )
            .unwrap();

        let goals = service.list().unwrap();
        assert_eq!(goals[0].title, "Reserva");
        assert_eq!(goals[1].title, "Viagem");
    }

    #[test]
    fn test_contribute() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service
            .create(
                "Meta",
                Money::new(dec!(1000)),
                Money::new(dec!(100)),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                Category::Others,
            )
            .unwrap();

        let updated = service.contribute(goal.id, Money::new(dec!(150))).unwrap();
        assert_eq!(updated.current_amount, Money::new(dec!(250)));
    }

    #[test]
    fn test_contribute_rejects_negative() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service
            .create(
                "Meta",
                Money::new(dec!(1000)),
                Money::zero(),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                Category::Others,
            )
            .unwrap();

        let result = service.contribute(goal.id, Money::new(dec!(-5)));
        assert!(matches!(result, Err(SaldoError::Validation(_))));
    }

    #[test]
    fn test_contribute_unknown_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let result = service.contribute(GoalId::new(), Money::new(dec!(10)));
        assert!(result.unwrap_err().is_not_found());
    }
}
