//! Account model types.

use serde::{Deserialize, Serialize};

use super::tags::parse_tags;

/// Unique identifier for an account.
///
/// The value is the creation time in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Create a new account ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Create an ID from the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authentication type of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountType {
    /// Not chosen yet.
    #[default]
    #[serde(rename = "")]
    Unset,
    /// Directory-backed account; never carries a password.
    #[serde(rename = "LDAP")]
    Ldap,
    /// Local account with its own password.
    #[serde(rename = "Локальная", alias = "Local")]
    Local,
}

impl AccountType {
    /// Get display name for the account type.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Unset => "(none)",
            Self::Ldap => "LDAP",
            Self::Local => "Local",
        }
    }

    /// Whether a type has been chosen.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for AccountType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self::Unset),
            t if t.eq_ignore_ascii_case("ldap") => Ok(Self::Ldap),
            t if t.eq_ignore_ascii_case("local") || t == "Локальная" => Ok(Self::Local),
            other => Err(crate::Error::Config(format!("unknown account type: {other}"))),
        }
    }
}

/// A single label parsed out of the raw tag string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Trimmed, non-empty label text.
    pub text: String,
}

impl Tag {
    /// Creates a new tag.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A user-editable credential record.
///
/// Field names serialize in the camelCase layout the stored slot has always
/// used, so previously saved lists load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Creation timestamp, doubles as identifier.
    pub id: AccountId,
    /// Raw `;`-delimited tag text as typed by the user.
    pub tags: String,
    /// Tags derived from [`Account::tags`].
    #[serde(default)]
    pub parsed_tags: Vec<Tag>,
    /// Authentication type.
    #[serde(rename = "type", default)]
    pub account_type: AccountType,
    /// Login name.
    pub login: String,
    /// Password; always `None` for LDAP accounts once normalized.
    pub password: Option<String>,
    /// Whether the record passed validation at its last update.
    #[serde(default)]
    pub validated: bool,
    /// UI-only flag controlling whether the password is shown in clear.
    #[serde(default)]
    pub show_password: bool,
}

impl Account {
    /// Create a new empty account with the given id.
    ///
    /// The password starts as an empty string rather than `None`.
    #[must_use]
    pub const fn new(id: AccountId) -> Self {
        Self {
            id,
            tags: String::new(),
            parsed_tags: Vec::new(),
            account_type: AccountType::Unset,
            login: String::new(),
            password: Some(String::new()),
            validated: false,
            show_password: false,
        }
    }

    /// Re-derive computed fields after an edit.
    ///
    /// Rebuilds `parsed_tags` from `tags`, clears the password of LDAP
    /// accounts and refreshes `validated`.
    pub fn normalize(&mut self) {
        self.parsed_tags = parse_tags(&self.tags);

        if self.account_type == AccountType::Ldap {
            self.password = None;
        }

        self.validated = super::validation::is_valid(self);
    }

    /// Password text, empty when absent.
    #[must_use]
    pub fn password_str(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}
