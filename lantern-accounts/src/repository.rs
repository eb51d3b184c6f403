use std::sync::RwLock;

use async_trait::async_trait;
use lantern_crypto::address::account_id;
use lantern_crypto::keys::Keypair;
use lantern_types::account::{Account, HardwareAccount};

use crate::error::RepositoryError;

/// Everything the accounts manager needs to register a software account.
pub struct AccountDescriptor {
    pub name: String,
    pub cosigner_of: Option<String>,
    pub keypair: Keypair,
    /// `None` when the user opted out of password protection.
    pub password: Option<String>,
    pub testnet: bool,
}

/// The wallet's account store.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    /// Snapshot of all known accounts.
    fn accounts(&self) -> Result<Vec<Account>, RepositoryError>;

    /// Persist a software account.
    async fn create_account(&self, descriptor: AccountDescriptor)
        -> Result<Account, RepositoryError>;

    /// Persist an account that lives on a hardware wallet.
    async fn create_hardware_account(
        &self,
        hardware: HardwareAccount,
    ) -> Result<Account, RepositoryError>;
}

/// In-memory account store. Secrets are not retained.
pub struct MemoryAccounts {
    accounts: RwLock<Vec<Account>>,
}

impl MemoryAccounts {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_accounts(Vec::new())
    }

    /// Create a store pre-populated with `accounts`.
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.write().map_err(|e| RepositoryError::Write {
            reason: e.to_string(),
        })?;
        if accounts.iter().any(|a| a.id == account.id) {
            return Err(RepositoryError::Duplicate { id: account.id });
        }
        accounts.push(account.clone());
        Ok(account)
    }
}

impl Default for MemoryAccounts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountsRepository for MemoryAccounts {
    fn accounts(&self) -> Result<Vec<Account>, RepositoryError> {
        let accounts = self.accounts.read().map_err(|e| RepositoryError::Read {
            reason: e.to_string(),
        })?;
        Ok(accounts.clone())
    }

    async fn create_account(
        &self,
        descriptor: AccountDescriptor,
    ) -> Result<Account, RepositoryError> {
        let public_key = descriptor.keypair.public_key();
        self.insert(Account {
            id: account_id(&public_key, descriptor.testnet),
            name: descriptor.name,
            public_key,
            testnet: descriptor.testnet,
            cosigner_of: descriptor.cosigner_of,
            requires_password: descriptor.password.is_some(),
            hardware_wallet: None,
        })
    }

    async fn create_hardware_account(
        &self,
        hardware: HardwareAccount,
    ) -> Result<Account, RepositoryError> {
        self.insert(Account {
            id: hardware.account_id(),
            name: hardware.name,
            public_key: hardware.public_key,
            testnet: hardware.testnet,
            cosigner_of: None,
            requires_password: false,
            hardware_wallet: Some(hardware.wallet_id),
        })
    }
}
