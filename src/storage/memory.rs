//! In-memory snapshot store
//!
//! Holds the snapshot in process memory. Used by tests and by embedders that
//! don't want a file on disk.

use std::sync::RwLock;

use super::{remove_from, upsert_into, SnapshotStore};
use crate::error::{BankError, BankResult};
use crate::models::Account;

/// Snapshot store that never touches the filesystem
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<Vec<Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            data: RwLock::new(accounts),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load_all(&self) -> BankResult<Vec<Account>> {
        let data = self
            .data
            .read()
            .map_err(|e| BankError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    fn save_all(&self, accounts: &[Account]) -> BankResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = accounts.to_vec();
        Ok(())
    }

    fn upsert(&self, account: &Account) -> BankResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        upsert_into(&mut data, account);
        Ok(())
    }

    fn delete(&self, login: &str) -> BankResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BankError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(remove_from(&mut data, login))
    }
}
