//! Budget model
//!
//! A per-category monthly spending ceiling. The `spent` figure is stored
//! display data, not recomputed from transactions.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A monthly spending ceiling for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Category this ceiling applies to (also the collection key)
    pub category: Category,

    /// Monthly limit
    pub limit: Money,

    /// Spent so far (static display data)
    #[serde(default)]
    pub spent: Money,
}

impl Budget {
    /// Create a new budget with nothing spent
    pub fn new(category: Category, limit: Money) -> Self {
        Self {
            category,
            limit,
            spent: Money::zero(),
        }
    }

    /// Share of the limit consumed, 0.0 to 100.0 (may exceed 100)
    pub fn usage_percent(&self) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        let spent = self.spent.amount().to_f64().unwrap_or(0.0);
        let limit = self.limit.amount().to_f64().unwrap_or(1.0);
        (spent / limit) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_budget_starts_unspent() {
        let budget = Budget::new(Category::Food, Money::new(dec!(800)));
        assert!(budget.spent.is_zero());
    }

    #[test]
    fn test_usage_percent() {
        let mut budget = Budget::new(Category::Transport, Money::new(dec!(400)));
        budget.spent = Money::new(dec!(100));
        assert!((budget.usage_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_usage_percent_zero_limit() {
        let budget = Budget::new(Category::Others, Money::zero());
        assert_eq!(budget.usage_percent(), 0.0);
    }
}
