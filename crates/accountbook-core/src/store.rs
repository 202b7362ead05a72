//! The account list and its persistence.

use std::collections::HashSet;

use tracing::{debug, error, info};

use crate::account::{Account, AccountId, is_valid};
use crate::config::{DEFAULT_STORAGE_KEY, StoreConfig};
use crate::storage::{FileStorage, Storage};
use crate::{Error, Result};

/// In-memory account list mirrored to a storage slot.
///
/// Every mutating action saves the whole list afterwards. Storage failures
/// inside actions are logged and do not undo the in-memory change; the
/// `try_` variants return them instead.
#[derive(Debug)]
pub struct AccountStore<S> {
    accounts: Vec<Account>,
    storage: S,
    key: String,
}

impl AccountStore<FileStorage> {
    /// Open the file-backed store described by `config` and load it.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored list exists but cannot be read or parsed.
    pub async fn open(config: &StoreConfig) -> Result<Self> {
        let mut store = Self::with_key(config.storage(), &config.storage_key);
        store.try_load().await?;
        Ok(store)
    }
}

impl<S: Storage> AccountStore<S> {
    /// Create an empty store over `storage` using the default slot.
    ///
    /// Nothing is read until [`AccountStore::load_from_storage`] is called.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create an empty store over `storage` using slot `key`.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            accounts: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    /// Underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// All accounts in list order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Account at `index`.
    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    /// Position and record of the account with `id`.
    pub fn find(&self, id: AccountId) -> Option<(usize, &Account)> {
        self.accounts
            .iter()
            .enumerate()
            .find(|(_, account)| account.id == id)
    }

    /// Number of accounts.
    pub fn accounts_count(&self) -> usize {
        self.accounts.len()
    }

    /// Accounts that pass validation, in list order.
    pub fn valid_accounts(&self) -> Vec<&Account> {
        self.accounts.iter().filter(|a| is_valid(a)).collect()
    }

    /// Replace the list with the stored one.
    ///
    /// An absent or empty slot leaves the list untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or does not hold a valid
    /// account list. The in-memory list is unchanged in that case.
    pub async fn try_load(&mut self) -> Result<()> {
        let stored = self.storage.get_item(&self.key).await?;
        let Some(stored) = stored.filter(|s| !s.is_empty()) else {
            debug!("No stored accounts under {:?}", self.key);
            return Ok(());
        };

        self.accounts = serde_json::from_str(&stored)?;
        debug!("Loaded {} accounts", self.accounts.len());
        Ok(())
    }

    /// Write the list to the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub async fn try_save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.accounts)?;
        self.storage.set_item(&self.key, &json).await?;
        debug!("Saved {} accounts", self.accounts.len());
        Ok(())
    }

    /// Load the stored list, falling back to an empty list on failure.
    pub async fn load_from_storage(&mut self) {
        if let Err(e) = self.try_load().await {
            error!("Failed to load accounts from storage: {e}");
            self.accounts.clear();
        }
    }

    /// Save the list, logging any failure.
    pub async fn save_to_storage(&self) {
        if let Err(e) = self.try_save().await {
            error!("Failed to save accounts to storage: {e}");
        }
    }

    /// Append a new empty account and save.
    ///
    /// Returns the index of the new account.
    pub async fn add_account(&mut self) -> usize {
        let index = self.push_new();
        self.save_to_storage().await;
        index
    }

    /// Like [`AccountStore::add_account`], but reports a failed save.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails. The account stays in the list.
    pub async fn try_add_account(&mut self) -> Result<usize> {
        let index = self.push_new();
        self.try_save().await?;
        Ok(index)
    }

    /// Remove the account at `index` and save.
    ///
    /// Out-of-range indexes are ignored and nothing is saved. Returns the
    /// removed account.
    pub async fn delete_account(&mut self, index: usize) -> Option<Account> {
        let removed = self.remove_at(index)?;
        self.save_to_storage().await;
        Some(removed)
    }

    /// Like [`AccountStore::delete_account`], but reports a failed save.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails. The account stays removed.
    pub async fn try_delete_account(&mut self, index: usize) -> Result<Option<Account>> {
        let Some(removed) = self.remove_at(index) else {
            return Ok(None);
        };
        self.try_save().await?;
        Ok(Some(removed))
    }

    /// Apply `edit` to the account at `index`, normalize it and save.
    ///
    /// Normalizing re-derives the tag list, clears the password of LDAP
    /// accounts and refreshes the `validated` flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccountNotFound`] if `index` is out of range.
    pub async fn update_account<F>(&mut self, index: usize, edit: F) -> Result<&Account>
    where
        F: FnOnce(&mut Account),
    {
        self.edit_at(index, edit)?;
        self.save_to_storage().await;
        Ok(&self.accounts[index])
    }

    /// Like [`AccountStore::update_account`], but reports a failed save.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccountNotFound`] if `index` is out of range, or the
    /// storage error if the save fails. The edit stays applied.
    pub async fn try_update_account<F>(&mut self, index: usize, edit: F) -> Result<&Account>
    where
        F: FnOnce(&mut Account),
    {
        self.edit_at(index, edit)?;
        self.try_save().await?;
        Ok(&self.accounts[index])
    }

    fn push_new(&mut self) -> usize {
        let id = self.next_id(AccountId::now());
        self.accounts.push(Account::new(id));
        info!("Added account {id}");
        self.accounts.len() - 1
    }

    fn remove_at(&mut self, index: usize) -> Option<Account> {
        if index >= self.accounts.len() {
            debug!("Ignoring delete of index {index}, have {}", self.accounts.len());
            return None;
        }

        let removed = self.accounts.remove(index);
        info!("Deleted account {}", removed.id);
        Some(removed)
    }

    fn edit_at<F>(&mut self, index: usize, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Account),
    {
        let len = self.accounts.len();
        let account = self
            .accounts
            .get_mut(index)
            .ok_or_else(|| Error::AccountNotFound(format!("index {index} of {len}")))?;

        edit(account);
        account.normalize();
        debug!(
            "Updated account {} ({} tags, valid: {})",
            account.id,
            account.parsed_tags.len(),
            account.validated
        );
        Ok(())
    }

    /// Ids are creation timestamps; bump past the newest one so two adds in
    /// the same millisecond still get distinct ids.
    ///
    /// Stored data may already hold `i64::MAX`. Then the closest free id at
    /// or below `now` is used instead.
    fn next_id(&self, now: AccountId) -> AccountId {
        let Some(max) = self.accounts.iter().map(|a| a.id).max() else {
            return now;
        };
        if now > max {
            return now;
        }
        if let Some(next) = max.0.checked_add(1) {
            return AccountId::new(next);
        }

        let taken: HashSet<AccountId> = self.accounts.iter().map(|a| a.id).collect();
        (i64::MIN..=now.0)
            .rev()
            .map(AccountId::new)
            .find(|id| !taken.contains(id))
            .unwrap_or(now)
    }
}
