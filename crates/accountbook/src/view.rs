//! Text rendering of accounts.

use accountbook_core::{Account, join_tags, validate_account};

/// Placeholder for hidden passwords.
const MASK: &str = "********";

/// One line describing `account` at position `index`.
pub fn account_line(index: usize, account: &Account) -> String {
    let login = if account.login.is_empty() {
        "<no login>"
    } else {
        account.login.as_str()
    };

    let password = match account.password.as_deref() {
        None => "-",
        Some("") => "<empty>",
        Some(_) if !account.show_password => MASK,
        Some(p) => p,
    };

    let status = match validate_account(account) {
        Ok(()) => "valid".to_string(),
        Err(errors) => errors
            .iter()
            .map(|e| e.field())
            .collect::<Vec<_>>()
            .join(","),
    };

    format!(
        "[{index}] {id} {kind:<6} {login} pw={password} tags=[{tags}] ({status})",
        id = account.id,
        kind = account.account_type.display_name(),
        tags = join_tags(&account.parsed_tags),
    )
}

/// Lines for a list of `(index, account)` pairs.
pub fn account_lines<'a>(accounts: impl IntoIterator<Item = (usize, &'a Account)>) -> Vec<String> {
    accounts
        .into_iter()
        .map(|(index, account)| account_line(index, account))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use accountbook_core::{AccountId, AccountType};

    #[test]
    fn test_empty_account_line() {
        let account = Account::new(AccountId::new(5));
        assert_eq!(
            account_line(0, &account),
            "[0] 5 (none) <no login> pw=<empty> tags=[] (login,type)"
        );
    }

    #[test]
    fn test_masks_password() {
        let mut account = Account::new(AccountId::new(5));
        account.account_type = AccountType::Local;
        account.login = "alice".to_string();
        account.password = Some("secret".to_string());
        account.tags = "a;b".to_string();
        account.normalize();

        let line = account_line(3, &account);
        assert!(line.contains("pw=********"));
        assert!(line.contains("tags=[a; b]"));
        assert!(line.ends_with("(valid)"));

        account.show_password = true;
        assert!(account_line(3, &account).contains("pw=secret"));
    }

    #[test]
    fn test_ldap_has_no_password() {
        let mut account = Account::new(AccountId::new(5));
        account.account_type = AccountType::Ldap;
        account.login = "bob".to_string();
        account.normalize();
        assert!(account_line(0, &account).contains("pw=-"));
    }
}
