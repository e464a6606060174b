//! Credit card service

use tracing::debug;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Card, CardId, Money};
use crate::storage::Storage;

/// Service for credit card management
pub struct CardService<'a> {
    storage: &'a Storage,
}

impl<'a> CardService<'a> {
    /// Create a new card service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new card
    pub fn create(
        &self,
        name: &str,
        limit: Money,
        closing_day: u8,
        due_day: u8,
        color: &str,
    ) -> SaldoResult<Card> {
        let card = Card::new(name, limit, closing_day, due_day, color);
        card.validate().map_err(SaldoError::Validation)?;

        self.storage.cards.upsert(card.clone())?;
        self.storage.cards.save()?;

        debug!(card = %card.id, "registered card");
        Ok(card)
    }

    /// Find a card by ID string or name
    pub fn find(&self, identifier: &str) -> SaldoResult<Option<Card>> {
        if let Ok(id) = identifier.parse::<CardId>() {
            if let Some(card) = self.storage.cards.get(id)? {
                return Ok(Some(card));
            }
        }
        self.storage.cards.get_by_name(identifier)
    }

    /// List all cards
    pub fn list(&self) -> SaldoResult<Vec<Card>> {
        self.storage.cards.get_all()
    }

    /// Sum of current invoices across all cards
    pub fn total_invoice(&self) -> SaldoResult<Money> {
        Ok(self
            .storage
            .cards
            .get_all()?
            .iter()
            .map(|c| c.current_invoice)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SaldoPaths;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_find_by_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        let card = service
            .create("Nubank Ultravioleta", Money::new(dec!(8000)), 5, 12, "#820ad1")
            .unwrap();

        let found = service.find("nubank ultravioleta").unwrap().unwrap();
        assert_eq!(found.id, card.id);
        assert_eq!(found.available_limit, Money::new(dec!(8000)));
    }

    #[test]
    fn test_create_rejects_bad_days() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        let result = service.create("Card", Money::new(dec!(1000)), 0, 12, "");
        assert!(matches!(result, Err(SaldoError::Validation(_))));
    }

    #[test]
    fn test_total_invoice() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CardService::new(&storage);

        let a = service.create("A", Money::new(dec!(1000)), 5, 12, "").unwrap();
        let b = service.create("B", Money::new(dec!(2000)), 10, 17, "").unwrap();

        let mut a = storage.cards.get(a.id).unwrap().unwrap();
        a.charge(Money::new(dec!(150)));
        storage.cards.upsert(a).unwrap();

        let mut b = storage.cards.get(b.id).unwrap().unwrap();
        b.charge(Money::new(dec!(99.90)));
        storage.cards.upsert(b).unwrap();

        assert_eq!(service.total_invoice().unwrap(), Money::new(dec!(249.90)));
    }
}
