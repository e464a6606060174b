//! Transaction service
//!
//! Recording a transaction applies its financial side-effect: a card charge
//! when a card is referenced, otherwise an account balance adjustment. The
//! transaction itself is immutable once stored.

use tracing::warn;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{
    AccountId, CardId, Category, Money, Recurrence, Transaction, TransactionKind,
};
use crate::storage::Storage;

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    pub description: String,
    pub amount: Money,
    pub date: chrono::NaiveDate,
    pub category: Category,
    pub kind: TransactionKind,
    pub account_id: AccountId,
    pub card_id: Option<CardId>,
    pub recurrence: Option<Recurrence>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction and apply its balance effect
    ///
    /// When the referenced account or card does not exist, the transaction
    /// is still stored and the posting silently no-ops; no error surfaces.
    pub fn record(&self, input: RecordTransactionInput) -> SaldoResult<Transaction> {
        let mut txn = Transaction::new(
            input.description,
            input.amount,
            input.date,
            input.category,
            input.kind,
            input.account_id,
        );
        if let Some(card_id) = input.card_id {
            txn = txn.with_card(card_id);
        }
        if let Some(recurrence) = input.recurrence {
            txn = txn.with_recurrence(recurrence);
        }

        txn.validate().map_err(SaldoError::Validation)?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.post(&txn)?;

        Ok(txn)
    }

    /// Apply the financial side-effect of a transaction
    fn post(&self, txn: &Transaction) -> SaldoResult<()> {
        if let Some(card_id) = txn.card_id {
            match self.storage.cards.get(card_id)? {
                Some(mut card) => {
                    card.charge(txn.amount);
                    self.storage.cards.upsert(card)?;
                    self.storage.cards.save()?;
                }
                None => {
                    warn!(card = %card_id, "posting skipped: card not found");
                }
            }
        } else {
            match self.storage.accounts.get(txn.account_id)? {
                Some(mut account) => {
                    account.balance = match txn.kind {
                        TransactionKind::Income => account.balance + txn.amount,
                        TransactionKind::Expense => account.balance - txn.amount,
                    };
                    self.storage.accounts.upsert(account)?;
                    self.storage.accounts.save()?;
                }
                None => {
                    warn!(account = %txn.account_id, "posting skipped: account not found");
                }
            }
        }
        Ok(())
    }

    /// List transactions, most recent first, optionally limited
    pub fn list(&self, limit: Option<usize>) -> SaldoResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }
}
