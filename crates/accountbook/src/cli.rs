//! Command line arguments.

use std::path::PathBuf;

use accountbook_core::AccountType;
use accountbook_core::config::DEFAULT_STORAGE_KEY;
use clap::{Parser, Subcommand};

/// Manage a local list of login accounts.
#[derive(Parser, Debug)]
#[command(name = "accountbook", version)]
#[command(about = "Manage a local list of login accounts", long_about = None)]
pub struct Cli {
    /// Directory holding the account list (default: platform data dir)
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage slot holding the account list
    #[arg(long, value_name = "KEY", default_value = DEFAULT_STORAGE_KEY, global = true)]
    pub key: String,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Store actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every account
    List,
    /// Add an empty account
    Add,
    /// Edit the account at INDEX
    Update(UpdateArgs),
    /// Delete the account at INDEX
    Delete {
        /// Position in the list, starting at 0
        index: usize,
    },
    /// List only accounts that pass validation
    Valid,
    /// Print the number of accounts
    Count,
    /// Print the account list as pretty JSON
    Export,
}

/// Field edits for `update`. Omitted fields are left as they are.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct UpdateArgs {
    /// Position in the list, starting at 0
    pub index: usize,

    /// Raw tag text, separated by `;`
    #[arg(long)]
    pub tags: Option<String>,

    /// Account type: ldap, local, or empty to unset
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_account_type)]
    pub account_type: Option<AccountType>,

    /// Login name
    #[arg(long)]
    pub login: Option<String>,

    /// Password (ignored for LDAP accounts)
    #[arg(long)]
    pub password: Option<String>,

    /// Whether the password is shown in listings
    #[arg(long, value_name = "BOOL")]
    pub show_password: Option<bool>,
}

fn parse_account_type(s: &str) -> Result<AccountType, String> {
    s.parse().map_err(|e: accountbook_core::Error| e.to_string())
}

impl UpdateArgs {
    /// Apply the requested edits to `account`.
    pub fn apply(&self, account: &mut accountbook_core::Account) {
        if let Some(tags) = &self.tags {
            account.tags.clone_from(tags);
        }
        if let Some(account_type) = self.account_type {
            account.account_type = account_type;
        }
        if let Some(login) = &self.login {
            account.login.clone_from(login);
        }
        if let Some(password) = &self.password {
            account.password = Some(password.clone());
        }
        if let Some(show) = self.show_password {
            account.show_password = show;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use accountbook_core::{Account, AccountId};

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["accountbook", "list"]).unwrap();
        assert_eq!(cli.command, Command::List);
        assert_eq!(cli.key, DEFAULT_STORAGE_KEY);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_parse_global_data_dir() {
        let cli = Cli::try_parse_from(["accountbook", "count", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::try_parse_from([
            "accountbook",
            "update",
            "2",
            "--tags",
            "a;b",
            "--type",
            "ldap",
            "--login",
            "alice",
        ])
        .unwrap();
        let Command::Update(args) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.index, 2);
        assert_eq!(args.account_type, Some(AccountType::Ldap));
        assert_eq!(args.tags.as_deref(), Some("a;b"));
        assert!(args.password.is_none());
    }

    #[test]
    fn test_parse_bad_type() {
        assert!(Cli::try_parse_from(["accountbook", "update", "0", "--type", "kerberos"]).is_err());
    }

    #[test]
    fn test_parse_delete_requires_index() {
        assert!(Cli::try_parse_from(["accountbook", "delete"]).is_err());
    }

    #[test]
    fn test_apply_only_given_fields() {
        let mut account = Account::new(AccountId::new(1));
        account.login = "keep".to_string();

        let args = UpdateArgs {
            index: 0,
            tags: Some("x".to_string()),
            account_type: Some(AccountType::Local),
            login: None,
            password: Some("pw".to_string()),
            show_password: None,
        };
        args.apply(&mut account);

        assert_eq!(account.login, "keep");
        assert_eq!(account.tags, "x");
        assert_eq!(account.account_type, AccountType::Local);
        assert_eq!(account.password_str(), "pw");
    }
}
