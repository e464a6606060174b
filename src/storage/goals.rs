//! Goal repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SaldoError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<Goal>,
}

/// Repository for goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, Goal>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), SaldoError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = GoalData {
            goals: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all goals, sorted by deadline (soonest first)
    pub fn get_all(&self) -> Result<Vec<Goal>, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline));
        Ok(goals)
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: Goal) -> Result<(), SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal, returning whether it existed
    pub fn delete(&self, id: GoalId) -> Result<bool, SaldoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count goals
    pub fn count(&self) -> Result<usize, SaldoError> {
        let data = self
            .data
            .read()
            .map_err(|e| SaldoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
