//! File-backed snapshot store
//!
//! Keeps every account in one `accounts.json` (or `accounts.yml`) file under
//! the data directory.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use super::file_io::{read_document, write_document_atomic};
use super::{remove_from, upsert_into, SnapshotStore};
use crate::config::{BankPaths, SnapshotFormat};
use crate::error::{BankError, BankResult};
use crate::models::Account;

const SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotData {
    #[serde(default)]
    schema_version: u32,
    #[serde(default)]
    accounts: Vec<Account>,
}

/// Snapshot store backed by a single file
pub struct FileSnapshotStore {
    path: PathBuf,
    format: SnapshotFormat,
    /// Serializes whole load-modify-save sequences
    guard: Mutex<()>,
}

impl FileSnapshotStore {
    /// Create a store for an explicit file path
    pub fn new(path: PathBuf, format: SnapshotFormat) -> Self {
        Self {
            path,
            format,
            guard: Mutex::new(()),
        }
    }

    /// Create a store at the standard location for `format`
    pub fn open(paths: &BankPaths, format: SnapshotFormat) -> BankResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.snapshot_file(format), format))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }

    fn lock(&self) -> BankResult<MutexGuard<'_, ()>> {
        self.guard
            .lock()
            .map_err(|e| BankError::Storage(format!("Failed to acquire snapshot lock: {}", e)))
    }

    fn read_locked(&self) -> BankResult<Vec<Account>> {
        match read_document::<SnapshotData, _>(&self.path, self.format)? {
            Some(data) => {
                tracing::debug!(
                    path = %self.path.display(),
                    accounts = data.accounts.len(),
                    "loaded snapshot"
                );
                Ok(data.accounts)
            }
            None => {
                tracing::info!(path = %self.path.display(), "no snapshot found, initializing");
                self.write_locked(&[])?;
                Ok(Vec::new())
            }
        }
    }

    fn write_locked(&self, accounts: &[Account]) -> BankResult<()> {
        let data = SnapshotData {
            schema_version: SCHEMA_VERSION,
            accounts: accounts.to_vec(),
        };
        write_document_atomic(&self.path, self.format, &data)?;
        tracing::debug!(
            path = %self.path.display(),
            accounts = accounts.len(),
            "saved snapshot"
        );
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load_all(&self) -> BankResult<Vec<Account>> {
        let _guard = self.lock()?;
        self.read_locked()
    }

    fn save_all(&self, accounts: &[Account]) -> BankResult<()> {
        let _guard = self.lock()?;
        self.write_locked(accounts)
    }

    fn upsert(&self, account: &Account) -> BankResult<()> {
        let _guard = self.lock()?;
        let mut accounts = self.read_locked()?;
        upsert_into(&mut accounts, account);
        self.write_locked(&accounts)
    }

    fn delete(&self, login: &str) -> BankResult<bool> {
        let _guard = self.lock()?;
        let mut accounts = self.read_locked()?;
        let removed = remove_from(&mut accounts, login);
        if removed {
            self.write_locked(&accounts)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, CardKind};
    use tempfile::TempDir;

    fn create_test_store(format: SnapshotFormat) -> (TempDir, FileSnapshotStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = FileSnapshotStore::open(&paths, format).unwrap();
        (temp_dir, store)
    }

    fn account_with_cards(login: &str) -> Account {
        let mut account = Account::new(login, "password1", "Tester", 30);
        account.push_card(Card::issue(CardKind::Standard));
        let mut premium = Card::issue(CardKind::Premium);
        premium.balance = 48.0;
        account.push_card(premium);
        account
    }

    #[test]
    fn test_missing_snapshot_initializes_empty() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Json);
        assert!(!store.path().exists());

        let accounts = store.load_all().unwrap();

        assert!(accounts.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_round_trip_json() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Json);
        let accounts = vec![account_with_cards("alpha"), account_with_cards("bravo")];

        store.save_all(&accounts).unwrap();

        assert_eq!(store.load_all().unwrap(), accounts);
    }

    #[test]
    fn test_round_trip_yaml() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Yaml);
        let accounts = vec![account_with_cards("alpha")];

        store.save_all(&accounts).unwrap();

        assert!(store.path().ends_with("accounts.yml"));
        assert_eq!(store.load_all().unwrap(), accounts);
    }

    #[test]
    fn test_save_of_load_is_a_no_op() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Json);
        store.save_all(&[account_with_cards("alpha")]).unwrap();

        let first = store.load_all().unwrap();
        store.save_all(&first).unwrap();

        assert_eq!(store.load_all().unwrap(), first);
    }

    #[test]
    fn test_upsert_keeps_logins_unique() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Json);
        let mut account = account_with_cards("alpha");
        store.upsert(&account).unwrap();
        store.upsert(&account_with_cards("bravo")).unwrap();

        account.name = "Changed".into();
        store.upsert(&account).unwrap();

        let accounts = store.load_all().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].login, "alpha");
        assert_eq!(accounts[0].name, "Changed");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Json);
        store.upsert(&account_with_cards("alpha")).unwrap();

        assert!(store.delete("alpha").unwrap());
        assert!(!store.delete("alpha").unwrap());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_find() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Json);
        store.upsert(&account_with_cards("alpha")).unwrap();

        assert!(store.find("alpha").unwrap().is_some());
        assert!(store.find("zulu").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_snapshot_is_fatal() {
        let (_temp_dir, store) = create_test_store(SnapshotFormat::Json);
        std::fs::write(store.path(), "{ \"accounts\": [ broken").unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, BankError::CorruptSnapshot { .. }));
    }
}
