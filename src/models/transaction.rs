//! Transaction model
//!
//! A single income or expense event affecting exactly one account, or a
//! card when `card_id` is set. Transactions are immutable once recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{AccountId, CardId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Some(Self::Income),
            "expense" | "despesa" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// How often a recurring transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "diária"),
            Self::Weekly => write!(f, "semanal"),
            Self::Monthly => write!(f, "mensal"),
            Self::Yearly => write!(f, "anual"),
        }
    }
}

/// Recurrence descriptor
///
/// Recorded for display only; no scheduler ever expands it into future
/// transaction instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub frequency: RecurrenceFrequency,
    pub end_date: Option<NaiveDate>,
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Description (e.g. "Supermercado Pão de Açúcar")
    pub description: String,

    /// Amount, always non-negative; direction comes from `kind`
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// Category
    pub category: Category,

    /// Income or expense
    pub kind: TransactionKind,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Card charged instead of the account (expenses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<CardId>,

    /// Optional recurrence descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: Category,
        kind: TransactionKind,
        account_id: AccountId,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            date,
            category,
            kind,
            account_id,
            card_id: None,
            recurrence: None,
        }
    }

    /// Attach a card to charge (expenses only)
    pub fn with_card(mut self, card_id: CardId) -> Self {
        self.card_id = Some(card_id);
        self
    }

    /// Attach a recurrence descriptor
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Description cannot be empty".to_string());
        }
        if self.amount.is_negative() {
            return Err("Amount cannot be negative".to_string());
        }
        if self.card_id.is_some() && self.is_income() {
            return Err("Income cannot be charged to a card".to_string());
        }
        Ok(())
    }
}
