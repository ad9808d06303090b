//! Storage layer for CardBank
//!
//! All accounts are persisted together as one snapshot. Every write replaces
//! the whole collection; there is no incremental or partial update.

pub mod file_io;
pub mod memory;
pub mod snapshot;

pub use file_io::{read_document, write_document_atomic};
pub use memory::MemoryStore;
pub use snapshot::FileSnapshotStore;

use crate::error::BankResult;
use crate::models::Account;

/// Whole-collection account persistence
///
/// Implementors only need `load_all` and `save_all`; the keyed operations
/// are built on top of them. Stores that guard their state with a lock
/// override the keyed operations to hold it across the read-modify-write.
pub trait SnapshotStore {
    /// Load every persisted account, in stored order
    fn load_all(&self) -> BankResult<Vec<Account>>;

    /// Replace the persisted collection with `accounts`
    fn save_all(&self, accounts: &[Account]) -> BankResult<()>;

    /// Replace the account with the same login, or append it
    fn upsert(&self, account: &Account) -> BankResult<()> {
        let mut accounts = self.load_all()?;
        upsert_into(&mut accounts, account);
        self.save_all(&accounts)
    }

    /// Remove the account with this login, returning whether one existed
    fn delete(&self, login: &str) -> BankResult<bool> {
        let mut accounts = self.load_all()?;
        let removed = remove_from(&mut accounts, login);
        if removed {
            self.save_all(&accounts)?;
        }
        Ok(removed)
    }

    /// Find an account by login
    fn find(&self, login: &str) -> BankResult<Option<Account>> {
        Ok(self.load_all()?.into_iter().find(|a| a.login == login))
    }
}

pub(crate) fn upsert_into(accounts: &mut Vec<Account>, account: &Account) {
    match accounts.iter_mut().find(|a| a.login == account.login) {
        Some(existing) => *existing = account.clone(),
        None => accounts.push(account.clone()),
    }
    // Older snapshots may carry duplicates; keep only the first
    let mut seen = false;
    accounts.retain(|a| {
        if a.login != account.login {
            return true;
        }
        let keep = !seen;
        seen = true;
        keep
    });
}

pub(crate) fn remove_from(accounts: &mut Vec<Account>, login: &str) -> bool {
    let before = accounts.len();
    accounts.retain(|a| a.login != login);
    accounts.len() != before
}
