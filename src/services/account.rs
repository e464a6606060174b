//! Account service
//!
//! Business logic for account management: creation, rename, deletion with
//! its transaction cascade, and the simulated Open Finance flows.

use tracing::debug;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Account, AccountId, AccountKind, Money};
use crate::storage::Storage;

use super::openfinance::BankConnector;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    pub fn create(
        &self,
        name: &str,
        bank: &str,
        balance: Money,
        kind: AccountKind,
        color: &str,
    ) -> SaldoResult<Account> {
        let account = Account::new(name, bank, balance, kind, color);
        account.validate().map_err(SaldoError::Validation)?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        debug!(account = %account.id, "created account");
        Ok(account)
    }

    /// Find an account by ID string or name
    pub fn find(&self, identifier: &str) -> SaldoResult<Option<Account>> {
        if let Ok(id) = identifier.parse::<AccountId>() {
            if let Some(account) = self.storage.accounts.get(id)? {
                return Ok(Some(account));
            }
        }
        self.storage.accounts.get_by_name(identifier)
    }

    /// List all accounts
    pub fn list(&self) -> SaldoResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Total balance across all accounts
    pub fn total_balance(&self) -> SaldoResult<Money> {
        Ok(self.storage.accounts.get_all()?.iter().map(|a| a.balance).sum())
    }

    /// Rename an account
    pub fn rename(&self, id: AccountId, new_name: &str) -> SaldoResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| SaldoError::account_not_found(id.to_string()))?;

        account.name = new_name.to_string();
        account.validate().map_err(SaldoError::Validation)?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;
        Ok(account)
    }

    /// Delete an account and every transaction it owns
    ///
    /// Cards and goals are untouched; other account balances are untouched.
    /// Returns the deleted account and how many transactions went with it.
    pub fn delete(&self, id: AccountId) -> SaldoResult<(Account, usize)> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| SaldoError::account_not_found(id.to_string()))?;

        let removed = self.storage.transactions.delete_by_account(id)?;
        self.storage.accounts.delete(id)?;

        self.storage.accounts.save()?;
        self.storage.transactions.save()?;

        debug!(account = %id, removed, "deleted account with its transactions");
        Ok((account, removed))
    }

    /// Connect a bank via the (simulated) Open Finance flow
    ///
    /// Creates a checking account named after the institution, with a
    /// balance reported by the connector.
    pub fn connect_bank(
        &self,
        bank: &str,
        color: &str,
        connector: &dyn BankConnector,
    ) -> SaldoResult<Account> {
        let name = format!("Conta {}", bank);
        self.create(
            &name,
            bank,
            connector.initial_balance(),
            AccountKind::Checking,
            color,
        )
    }

    /// Refresh an account balance from the connector, never dropping below zero
    pub fn sync(&self, id: AccountId, connector: &dyn BankConnector) -> SaldoResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| SaldoError::account_not_found(id.to_string()))?;

        let updated = account.balance + connector.balance_variation();
        account.balance = if updated.is_negative() {
            Money::zero()
        } else {
            updated
        };

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;
        Ok(account)
    }
}
