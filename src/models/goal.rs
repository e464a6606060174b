//! Savings goal model
//!
//! Goals are tracked independently of transaction flow; contributions are
//! manual updates, never automatic.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::GoalId;
use super::money::Money;

/// A savings target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal title (e.g. "Reserva de emergência")
    pub title: String,

    /// Target amount
    pub target_amount: Money,

    /// Amount accumulated so far
    pub current_amount: Money,

    /// Deadline date
    pub deadline: NaiveDate,

    /// Category
    pub category: Category,
}

impl Goal {
    /// Create a new goal
    pub fn new(
        title: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        deadline: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            current_amount,
            deadline,
            category,
        }
    }

    /// Progress toward the target, 0.0 to 100.0 (may exceed 100)
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount.is_zero() {
            return 0.0;
        }
        let current = self.current_amount.amount().to_f64().unwrap_or(0.0);
        let target = self.target_amount.amount().to_f64().unwrap_or(1.0);
        (current / target) * 100.0
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Goal title cannot be empty".to_string());
        }
        if self.target_amount.is_negative() || self.current_amount.is_negative() {
            return Err("Goal amounts cannot be negative".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.title, self.current_amount, self.target_amount)
    }
}
