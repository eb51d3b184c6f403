use std::sync::Arc;

use clap::{Parser, Subcommand};
use lantern_accounts::messages::Catalog;

use crate::commands;
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::store::FileAccountStore;

#[derive(Parser)]
#[command(
    name = "lantern",
    about = "Lantern wallet: create and import accounts",
    version
)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ~/.lantern/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the accounts directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage accounts
    #[command(subcommand)]
    Account(AccountCommand),
}

/// Account subcommands.
#[derive(Subcommand)]
pub enum AccountCommand {
    /// Create an account with a freshly generated keypair
    Create {
        /// Account name (defaults to the next free default name)
        #[arg(long)]
        name: Option<String>,
        /// Create the account on testnet
        #[arg(long)]
        testnet: bool,
        /// Store the secret without password protection
        #[arg(long)]
        no_password: bool,
        /// Create the key as co-signer of the account with this hex public key
        #[arg(long)]
        cosigner_of: Option<String>,
    },
    /// Import an account from a secret key or a hardware wallet
    Import {
        /// Hex-encoded secret key (prompted for when neither source is given)
        #[arg(long, conflicts_with = "hardware")]
        secret_key: Option<String>,
        /// ID of a connected hardware wallet
        #[arg(long, conflicts_with = "secret_key")]
        hardware: Option<String>,
        /// Account name (defaults to the next free default name)
        #[arg(long)]
        name: Option<String>,
        /// Import the account on testnet
        #[arg(long)]
        testnet: bool,
        /// Store the secret without password protection
        #[arg(long)]
        no_password: bool,
    },
    /// List all accounts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the secret key of a software account
    Export {
        /// Account ID
        id: String,
    },
}

/// Shared state of a command invocation.
pub struct Context {
    pub store: Arc<FileAccountStore>,
    pub catalog: Catalog,
}

pub async fn run(cli: Cli, config: WalletConfig) -> Result<(), WalletError> {
    let dir = config.accounts_dir(cli.data_dir.as_deref())?;
    tracing::debug!(dir = %dir.display(), "using accounts directory");
    let ctx = Context {
        store: Arc::new(FileAccountStore::new(dir)),
        catalog: Catalog::new(config.naming),
    };

    match cli.command {
        Command::Account(AccountCommand::Create {
            name,
            testnet,
            no_password,
            cosigner_of,
        }) => commands::create::run(&ctx, name, testnet, no_password, cosigner_of).await,
        Command::Account(AccountCommand::Import {
            secret_key,
            hardware,
            name,
            testnet,
            no_password,
        }) => {
            commands::import::run(&ctx, secret_key, hardware, name, testnet, no_password).await
        }
        Command::Account(AccountCommand::List { json }) => commands::list::run(&ctx, json),
        Command::Account(AccountCommand::Export { id }) => commands::export::run(&ctx, &id),
    }
}
