//! Dashboard summary
//!
//! Aggregates the whole transaction history into the headline figures and
//! the per-category expense breakdown.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::SaldoResult;
use crate::models::{Category, Money};
use crate::storage::Storage;

/// Headline figures for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// Net of the transaction history: income minus expense
    pub balance: Money,

    /// Sum of account balances, shown alongside the flow figures
    pub account_total: Money,

    /// Sum of all income transactions
    pub income: Money,

    /// Sum of all expense transactions
    pub expense: Money,

    /// Sum of current invoices across all cards
    pub card_invoices: Money,

    /// Expense breakdown per category, largest first
    pub by_category: Vec<CategorySlice>,
}

/// One category's share of total expenses
#[derive(Debug, Clone)]
pub struct CategorySlice {
    pub category: Category,
    pub total: Money,
    pub percent: f64,
}

/// Build the dashboard summary from current storage state
pub fn dashboard_summary(storage: &Storage) -> SaldoResult<DashboardSummary> {
    let account_total: Money = storage.accounts.get_all()?.iter().map(|a| a.balance).sum();
    let card_invoices: Money = storage
        .cards
        .get_all()?
        .iter()
        .map(|c| c.current_invoice)
        .sum();

    let transactions = storage.transactions.get_all()?;

    let mut income = Money::zero();
    let mut expense = Money::zero();
    let mut per_category = vec![Money::zero(); Category::ALL.len()];

    for txn in &transactions {
        if txn.is_income() {
            income += txn.amount;
        } else {
            expense += txn.amount;
            let idx = Category::ALL
                .iter()
                .position(|c| *c == txn.category)
                .unwrap_or(Category::ALL.len() - 1);
            per_category[idx] += txn.amount;
        }
    }

    let mut by_category: Vec<CategorySlice> = Category::ALL
        .iter()
        .zip(per_category)
        .filter(|(_, total)| !total.is_zero())
        .map(|(category, total)| {
            let percent = if expense.is_zero() {
                0.0
            } else {
                let share = total.amount() / expense.amount() * Decimal::from(100);
                share.to_f64().unwrap_or(0.0)
            };
            CategorySlice {
                category: *category,
                total,
                percent,
            }
        })
        .collect();

    by_category.sort_by(|a, b| b.total.amount().cmp(&a.total.amount()));

    Ok(DashboardSummary {
        balance: income - expense,
        account_total,
        income,
        expense,
        card_invoices,
        by_category,
    })
}
