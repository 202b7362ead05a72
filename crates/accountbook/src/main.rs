//! `accountbook` - command line front-end for the account store
//!
//! Loads the stored account list, applies one action and prints the result.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod view;

use accountbook_core::{AccountStore, Storage, StoreConfig, is_valid};
use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "accountbook=info,accountbook_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = store_config(&cli);
    debug!("Using {:?} slot {:?}", config.data_dir, config.storage_key);

    let mut store = AccountStore::open(&config)
        .await
        .with_context(|| format!("loading accounts from {}", config.data_dir.display()))?;

    for line in run(&mut store, &cli.command).await? {
        println!("{line}");
    }
    Ok(())
}

/// Resolve the store configuration from command line flags.
fn store_config(cli: &Cli) -> StoreConfig {
    let mut config = cli
        .data_dir
        .clone()
        .map_or_else(StoreConfig::default, StoreConfig::with_data_dir);
    config.storage_key.clone_from(&cli.key);
    config
}

/// Execute `command` against `store`, returning the lines to print.
///
/// Mutations go through the `try_` actions so a failed save is reported.
async fn run<S: Storage>(
    store: &mut AccountStore<S>,
    command: &Command,
) -> anyhow::Result<Vec<String>> {
    let lines = match command {
        Command::List => view::account_lines(store.accounts().iter().enumerate()),
        Command::Add => {
            let index = store.try_add_account().await.context("saving accounts")?;
            let id = store.accounts()[index].id;
            vec![format!("Added account {id} at index {index}")]
        }
        Command::Update(args) => {
            let account = store
                .try_update_account(args.index, |a| args.apply(a))
                .await?;
            vec![view::account_line(args.index, account)]
        }
        Command::Delete { index } => {
            let removed = store
                .try_delete_account(*index)
                .await
                .context("saving accounts")?
                .with_context(|| format!("no account at index {index}"))?;
            vec![format!("Deleted account {}", removed.id)]
        }
        Command::Valid => view::account_lines(
            store
                .accounts()
                .iter()
                .enumerate()
                .filter(|(_, a)| is_valid(a)),
        ),
        Command::Count => vec![store.accounts_count().to_string()],
        Command::Export => vec![serde_json::to_string_pretty(store.accounts())?],
    };
    Ok(lines)
}
