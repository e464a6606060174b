//! Open Finance bank connection (simulated)
//!
//! There is no real banking integration. The connector is a trait so the
//! account-creation path stays honest about where balances come from, and
//! the shipped implementation is an explicit fake that fabricates figures
//! from UUID entropy.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Money;

/// Source of balances for a connected bank account
pub trait BankConnector {
    /// Balance reported when an account is first connected
    fn initial_balance(&self) -> Money;

    /// Balance delta reported by a sync
    fn balance_variation(&self) -> Money;
}

/// Fake connector: fabricates plausible figures, no network involved
#[derive(Debug, Default)]
pub struct MockBankConnector;

impl MockBankConnector {
    fn entropy() -> u64 {
        let bytes = *Uuid::new_v4().as_bytes();
        u64::from_le_bytes(bytes[..8].try_into().expect("uuid has 16 bytes"))
    }
}

impl BankConnector for MockBankConnector {
    /// Whole-unit balance in 1000..6000, like the original mock
    fn initial_balance(&self) -> Money {
        let units = 1000 + (Self::entropy() % 5000) as i64;
        Money::new(Decimal::from(units))
    }

    /// Variation in -50.00..=50.00
    fn balance_variation(&self) -> Money {
        let cents = (Self::entropy() % 10001) as i64 - 5000;
        Money::new(Decimal::new(cents, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_initial_balance_range() {
        let connector = MockBankConnector;
        for _ in 0..50 {
            let balance = connector.initial_balance();
            assert!(balance.amount() >= dec!(1000));
            assert!(balance.amount() < dec!(6000));
        }
    }

    #[test]
    fn test_variation_range() {
        let connector = MockBankConnector;
        for _ in 0..50 {
            let variation = connector.balance_variation();
            assert!(variation.amount() >= dec!(-50));
            assert!(variation.amount() <= dec!(50));
        }
    }
}
