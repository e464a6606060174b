//! Balance projection
//!
//! A what-if simulator over the monthly totals: extra income and expense
//! cuts are applied on top of the recorded flows to project the end state.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Money;

/// Inputs for a projection scenario
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Additional income assumed on top of the recorded total
    pub extra_income: Money,

    /// Spending reduction assumed against the recorded total
    pub spending_cut: Money,
}

impl Scenario {
    /// Scenario with no adjustments
    pub fn baseline() -> Self {
        Self {
            extra_income: Money::zero(),
            spending_cut: Money::zero(),
        }
    }
}

/// Outcome of a projection scenario
#[derive(Debug, Clone)]
pub struct Projection {
    /// Balance after applying adjusted income and expenses
    pub projected_balance: Money,

    /// Adjusted expenses as a share of adjusted income, in percent
    pub commitment_rate: f64,

    /// Difference between projected and current balance
    pub free_capacity: Money,
}

/// Project the balance under a scenario
pub fn project(balance: Money, income: Money, expense: Money, scenario: Scenario) -> Projection {
    let adjusted_income = income + scenario.extra_income;
    let adjusted_expense = expense - scenario.spending_cut;

    let projected_balance = balance + adjusted_income - adjusted_expense;

    let commitment_rate = if adjusted_income.is_zero() {
        0.0
    } else {
        let rate = adjusted_expense.amount() / adjusted_income.amount() * Decimal::from(100);
        rate.to_f64().unwrap_or(0.0)
    };

    Projection {
        projected_balance,
        commitment_rate,
        free_capacity: projected_balance - balance,
    }
}
