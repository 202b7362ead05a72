//! Account validation.

use super::model::{Account, AccountType};

/// Validation error for an account record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Login is empty.
    EmptyLogin,
    /// Account type has not been chosen.
    MissingType,
    /// Local account without a password.
    MissingPassword,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyLogin => "Login is required",
            Self::MissingType => "Account type is required",
            Self::MissingPassword => "Password is required for local accounts",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyLogin => "login",
            Self::MissingType => "type",
            Self::MissingPassword => "password",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating an account.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate an account record.
///
/// Returns `Ok(())` if valid, or `Err(Vec<ValidationError>)` with all errors.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_account(account: &Account) -> ValidationResult {
    let mut errors = Vec::new();

    if account.login.is_empty() {
        errors.push(ValidationError::EmptyLogin);
    }

    match account.account_type {
        AccountType::Unset => errors.push(ValidationError::MissingType),
        AccountType::Ldap => {}
        AccountType::Local => {
            if account.password_str().is_empty() {
                errors.push(ValidationError::MissingPassword);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether an account would be accepted by [`validate_account`].
#[must_use]
pub fn is_valid(account: &Account) -> bool {
    validate_account(account).is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::account::AccountId;

    fn account(account_type: AccountType, login: &str, password: Option<&str>) -> Account {
        let mut account = Account::new(AccountId::new(1));
        account.account_type = account_type;
        account.login = login.to_string();
        account.password = password.map(str::to_string);
        account
    }

    #[test]
    fn test_validate_empty_account() {
        let errors = validate_account(&Account::new(AccountId::new(1))).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyLogin, ValidationError::MissingType]
        );
    }

    #[test]
    fn test_ldap_needs_no_password() {
        assert!(is_valid(&account(AccountType::Ldap, "alice", None)));
    }

    #[test]
    fn test_local_needs_password() {
        let errors = validate_account(&account(AccountType::Local, "alice", Some(""))).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingPassword]);

        assert!(!is_valid(&account(AccountType::Local, "alice", None)));
        assert!(is_valid(&account(AccountType::Local, "alice", Some("pw"))));
    }

    #[test]
    fn test_login_required() {
        assert!(!is_valid(&account(AccountType::Ldap, "", None)));
        // Emptiness is literal, whitespace counts as content.
        assert!(is_valid(&account(AccountType::Ldap, " ", None)));
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(ValidationError::EmptyLogin.field(), "login");
        assert_eq!(ValidationError::MissingType.field(), "type");
        assert_eq!(ValidationError::MissingPassword.field(), "password");
        assert_eq!(
            ValidationError::MissingPassword.to_string(),
            "Password is required for local accounts"
        );
    }
}
