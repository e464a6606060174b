//! Card repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SaldoError;
use crate::models::{Card, CardId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CardData {
    cards: Vec<Card>,
}

/// Repository for card persistence
pub struct CardRepository {
    path: PathBuf,
    data: RwLock<HashMap<CardId, Card>>,
}

impl CardRepository {
    /// Create a new card repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load cards from disk
    pub fn load(&self) -> Result<(), SaldoError> {
        let file_data: CardData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for card in file_data.cards {
            data.insert(card.id, card);
        }

        Ok(())
    }

    /// Save cards to disk
    pub fn save(&self) -> Result<(), SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CardData {
            cards: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a card by ID
    pub fn get(&self, id: CardId) -> Result<Option<Card>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all cards, sorted by name
    pub fn get_all(&self) -> Result<Vec<Card>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut cards: Vec<_> = data.values().cloned().collect();
        cards.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cards)
    }

    /// Get a card by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Card>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a card
    pub fn upsert(&self, card: Card) -> Result<(), SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(card.id, card);
        Ok(())
    }

    /// Delete a card, returning whether it existed
    pub fn delete(&self, id: CardId) -> Result<bool, SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a card exists
    pub fn exists(&self, id: CardId) -> Result<bool, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }
}
