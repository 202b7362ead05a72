//! Account management module.
//!
//! Provides the account record, tag parsing, and validation.

mod model;
pub mod tags;
mod validation;

pub use model::{Account, AccountId, AccountType, Tag};
pub use tags::{join_tags, parse_tags};
pub use validation::{ValidationError, ValidationResult, is_valid, validate_account};
