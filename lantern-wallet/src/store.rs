use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use lantern_accounts::error::RepositoryError;
use lantern_accounts::repository::{AccountDescriptor, AccountsRepository};
use lantern_crypto::address::account_id;
use lantern_crypto::keys::{encode_public_key, parse_public_key, Keypair};
use lantern_crypto::seal::{open, seal, SealedSecret, NONCE_LEN, SALT_LEN};
use lantern_types::account::{Account, HardwareAccount};
use lantern_types::primitives::{AccountIndex, Seed};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::WalletError;

/// File holding every account record.
const ACCOUNTS_FILE: &str = "accounts.json";

/// Hex-encoded [`SealedSecret`] as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SealedBlob {
    pub salt: String,
    pub nonce: String,
    pub ciphertext: String,
}

impl SealedBlob {
    fn from_sealed(sealed: &SealedSecret) -> Self {
        Self {
            salt: hex::encode(sealed.salt),
            nonce: hex::encode(sealed.nonce),
            ciphertext: hex::encode(&sealed.ciphertext),
        }
    }

    fn to_sealed(&self) -> Result<SealedSecret, WalletError> {
        let salt: [u8; SALT_LEN] = decode_fixed(&self.salt, "salt")?;
        let nonce: [u8; NONCE_LEN] = decode_fixed(&self.nonce, "nonce")?;
        let ciphertext = hex::decode(&self.ciphertext)
            .map_err(|e| WalletError::SerializationError(e.to_string()))?;
        Ok(SealedSecret {
            salt,
            nonce,
            ciphertext,
        })
    }
}

fn decode_fixed<const N: usize>(s: &str, what: &str) -> Result<[u8; N], WalletError> {
    let bytes = hex::decode(s).map_err(|e| WalletError::SerializationError(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| WalletError::SerializationError(format!("invalid {} length", what)))
}

/// Location of a hardware-held key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareRef {
    pub wallet_id: String,
    pub account_index: AccountIndex,
}

/// On-disk account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub public_key: String,
    pub testnet: bool,
    #[serde(default)]
    pub cosigner_of: Option<String>,
    pub requires_password: bool,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware: Option<HardwareRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed_secret: Option<SealedBlob>,
    /// Hex secret of an account created without a password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_secret: Option<String>,
}

impl AccountRecord {
    fn to_account(&self) -> Result<Account, RepositoryError> {
        let public_key = parse_public_key(&self.public_key).map_err(|e| RepositoryError::Read {
            reason: format!("account '{}': {}", self.id, e),
        })?;
        Ok(Account {
            id: self.id.clone(),
            name: self.name.clone(),
            public_key,
            testnet: self.testnet,
            cosigner_of: self.cosigner_of.clone(),
            requires_password: self.requires_password,
            hardware_wallet: self.hardware.as_ref().map(|hw| hw.wallet_id.clone()),
        })
    }

    /// Recover the keypair of a software account.
    pub fn keypair(&self, password: Option<&str>) -> Result<Keypair, WalletError> {
        if self.hardware.is_some() {
            return Err(WalletError::HardwareHeld(self.id.clone()));
        }
        if let Some(sealed) = &self.sealed_secret {
            let sealed = sealed.to_sealed()?;
            let seed_bytes =
                open(password.unwrap_or_default(), &sealed).map_err(|_| WalletError::InvalidPassword)?;
            let seed: Seed = seed_bytes.as_slice().try_into().map_err(|_| {
                WalletError::SerializationError("sealed seed must be 32 bytes".to_string())
            })?;
            return Ok(Keypair::from_seed(&seed));
        }
        match &self.plain_secret {
            Some(secret) => Ok(Keypair::from_secret(secret)?),
            None => Err(WalletError::SerializationError(format!(
                "account '{}' has no stored secret",
                self.id
            ))),
        }
    }
}

fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Accounts persisted as a JSON array in `<dir>/accounts.json`.
pub struct FileAccountStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileAccountStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(ACCOUNTS_FILE)
    }

    /// All records on disk; an absent file means no accounts.
    pub fn records(&self) -> Result<Vec<AccountRecord>, RepositoryError> {
        let path = self.path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&path).map_err(|e| RepositoryError::Read {
            reason: format!("{}: {}", path.display(), e),
        })?;
        serde_json::from_str(&data).map_err(|e| RepositoryError::Read {
            reason: format!("{}: {}", path.display(), e),
        })
    }

    /// Find a record by account ID.
    pub fn record(&self, id: &str) -> Result<AccountRecord, WalletError> {
        self.records()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| WalletError::AccountNotFound(id.to_string()))
    }

    fn append(&self, record: AccountRecord) -> Result<Account, RepositoryError> {
        let _guard = self.write_lock.lock().map_err(|e| RepositoryError::Write {
            reason: e.to_string(),
        })?;
        let mut records = self.records()?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(RepositoryError::Duplicate { id: record.id });
        }
        let account = record.to_account()?;
        records.push(record);
        write_records(&self.dir, &self.path(), &records).map_err(|e| RepositoryError::Write {
            reason: e.to_string(),
        })?;
        debug!(id = %account.id, path = %self.path().display(), "account record written");
        Ok(account)
    }
}

fn write_records(dir: &Path, path: &Path, records: &[AccountRecord]) -> Result<(), WalletError> {
    std::fs::create_dir_all(dir)?;

    // Set directory permissions to 0o700 on Unix.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700))?;
    }

    let data = serde_json::to_string_pretty(records)?;

    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::OpenOptionsExt;
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(data.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, data)?;
    }

    Ok(())
}

#[async_trait]
impl AccountsRepository for FileAccountStore {
    fn accounts(&self) -> Result<Vec<Account>, RepositoryError> {
        self.records()?.iter().map(AccountRecord::to_account).collect()
    }

    async fn create_account(
        &self,
        descriptor: AccountDescriptor,
    ) -> Result<Account, RepositoryError> {
        let public_key = descriptor.keypair.public_key();
        let (sealed_secret, plain_secret) = match descriptor.password.as_deref() {
            Some(password) => {
                let seed = Zeroizing::new(descriptor.keypair.seed());
                let sealed = seal(password, &seed[..])?;
                (Some(SealedBlob::from_sealed(&sealed)), None)
            }
            None => (None, Some(descriptor.keypair.secret())),
        };
        self.append(AccountRecord {
            id: account_id(&public_key, descriptor.testnet),
            name: descriptor.name,
            public_key: encode_public_key(&public_key),
            testnet: descriptor.testnet,
            cosigner_of: descriptor.cosigner_of,
            requires_password: descriptor.password.is_some(),
            created_at: now(),
            hardware: None,
            sealed_secret,
            plain_secret,
        })
    }

    async fn create_hardware_account(
        &self,
        hardware: HardwareAccount,
    ) -> Result<Account, RepositoryError> {
        self.append(AccountRecord {
            id: hardware.account_id(),
            name: hardware.name,
            public_key: encode_public_key(&hardware.public_key),
            testnet: hardware.testnet,
            cosigner_of: None,
            requires_password: false,
            created_at: now(),
            hardware: Some(HardwareRef {
                wallet_id: hardware.wallet_id,
                account_index: hardware.account_index,
            }),
            sealed_secret: None,
            plain_secret: None,
        })
    }
}
