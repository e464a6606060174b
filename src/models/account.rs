//! Bank account model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Checking account
    #[default]
    Checking,
    /// Savings account
    Savings,
    /// Investment account
    Investment,
}

impl AccountKind {
    /// Parse account kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" | "corrente" => Some(Self::Checking),
            "savings" | "poupança" | "poupanca" => Some(Self::Savings),
            "investment" | "investimento" => Some(Self::Investment),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Corrente"),
            Self::Savings => write!(f, "Poupança"),
            Self::Investment => write!(f, "Investimento"),
        }
    }
}

/// A bank-like balance holder that transactions debit and credit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Display name (e.g. "Conta Nubank")
    pub name: String,

    /// Institution name
    pub bank: String,

    /// Current balance (signed; nothing prevents it going negative)
    pub balance: Money,

    /// Kind of account
    pub kind: AccountKind,

    /// Display color (hex string)
    #[serde(default)]
    pub color: String,
}

impl Account {
    /// Create a new account
    pub fn new(
        name: impl Into<String>,
        bank: impl Into<String>,
        balance: Money,
        kind: AccountKind,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            bank: bank.into(),
            balance,
            kind,
            color: color.into(),
        }
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Account name cannot be empty".to_string());
        }
        if self.bank.trim().is_empty() {
            return Err("Bank name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account() {
        let account = Account::new(
            "Conta Nubank",
            "Nubank",
            Money::new(dec!(1500.00)),
            AccountKind::Checking,
            "#820ad1",
        );
        assert_eq!(account.name, "Conta Nubank");
        assert_eq!(account.kind, AccountKind::Checking);
        assert_eq!(account.balance, Money::new(dec!(1500.00)));
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Conta", "Itaú", Money::zero(), AccountKind::Savings, "");
        assert!(account.validate().is_ok());

        account.name = "  ".to_string();
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(AccountKind::parse("checking"), Some(AccountKind::Checking));
        assert_eq!(AccountKind::parse("POUPANÇA"), Some(AccountKind::Savings));
        assert_eq!(AccountKind::parse("invalid"), None);
    }

    #[test]
    fn test_serialization() {
        let account = Account::new("Conta", "Inter", Money::zero(), AccountKind::Investment, "#f77737");
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account.id, deserialized.id);
        assert_eq!(account.kind, deserialized.kind);
    }
}
