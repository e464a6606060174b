//! Credit card model
//!
//! A revolving-credit instrument tracked by limit and current invoice.
//! Invariant held by `charge`: `available_limit = limit - sum(charged
//! amounts)` and `current_invoice` accumulates the same sum.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CardId;
use super::money::Money;

/// A credit card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: CardId,

    /// Card name (e.g. "Nubank Ultravioleta")
    pub name: String,

    /// Total credit limit
    pub limit: Money,

    /// Remaining available limit
    pub available_limit: Money,

    /// Current invoice balance
    pub current_invoice: Money,

    /// Statement closing day of month (1-31)
    pub closing_day: u8,

    /// Payment due day of month (1-31)
    pub due_day: u8,

    /// Display color (hex string)
    #[serde(default)]
    pub color: String,
}

impl Card {
    /// Create a new card with a clean invoice and the full limit available
    pub fn new(
        name: impl Into<String>,
        limit: Money,
        closing_day: u8,
        due_day: u8,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(),
            name: name.into(),
            limit,
            available_limit: limit,
            current_invoice: Money::zero(),
            closing_day,
            due_day,
            color: color.into(),
        }
    }

    /// Charge an expense to this card
    ///
    /// No limit check: the available limit may go negative.
    pub fn charge(&mut self, amount: Money) {
        self.current_invoice += amount;
        self.available_limit -= amount;
    }

    /// Validate required fields and day-of-month ranges
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Card name cannot be empty".to_string());
        }
        if !(1..=31).contains(&self.closing_day) {
            return Err(format!("Invalid closing day: {}", self.closing_day));
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(format!("Invalid due day: {}", self.due_day));
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (fecha dia {})", self.name, self.closing_day)
    }
}
