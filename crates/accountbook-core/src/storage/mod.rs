//! Persistent key-value slots.
//!
//! A [`Storage`] holds string values under string keys, the way a browser's
//! local storage does. The account store keeps its whole list in one slot.

mod file;
mod memory;

use std::future::Future;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// A string key-value store.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    fn get_item(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;

    /// Remove the value under `key`. Removing an empty slot is not an error.
    fn remove_item(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}
