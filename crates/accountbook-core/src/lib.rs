//! # accountbook-core
//!
//! Core logic for `accountbook`.
//!
//! This crate provides:
//! - Account records (login, type, tags, password, validation status)
//! - Tag parsing from `;`-delimited text
//! - Account validation
//! - Key-value storage slots (file and in-memory)
//! - **Account Store** - the in-memory list mirrored to storage

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod config;
mod error;
pub mod storage;
pub mod store;

pub use account::{
    Account, AccountId, AccountType, Tag, ValidationError, ValidationResult, is_valid, join_tags,
    parse_tags, validate_account,
};
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::AccountStore;
