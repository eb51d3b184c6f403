//! Full creation flows against recording collaborators:
//! options → default name → edits → validation → submission.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lantern_accounts::error::{CreationError, HardwareError, RepositoryError};
use lantern_accounts::hardware::HardwareBridge;
use lantern_accounts::messages::{render_errors, Catalog};
use lantern_accounts::repository::{AccountDescriptor, AccountsRepository, MemoryAccounts};
use lantern_accounts::{
    AccountCreationController, AccountCreationOptions, ErrorKind, Field, FormEdit,
};
use lantern_crypto::keys::Keypair;
use lantern_types::account::{Account, HardwareAccount};
use lantern_types::primitives::{AccountIndex, PublicKey};

/// What the repository was asked to create.
#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    name: String,
    cosigner_of: Option<String>,
    public_key: PublicKey,
    password: Option<String>,
    testnet: bool,
}

/// Repository that records descriptors before delegating to a memory store.
struct RecordingAccounts {
    inner: MemoryAccounts,
    created: Mutex<Vec<Recorded>>,
    fail_with: Option<RepositoryError>,
}

impl RecordingAccounts {
    fn new(accounts: Vec<Account>) -> Self {
        Self {
            inner: MemoryAccounts::with_accounts(accounts),
            created: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    fn failing(err: RepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new(Vec::new())
        }
    }

    fn created(&self) -> Vec<Recorded> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountsRepository for RecordingAccounts {
    fn accounts(&self) -> Result<Vec<Account>, RepositoryError> {
        self.inner.accounts()
    }

    async fn create_account(
        &self,
        descriptor: AccountDescriptor,
    ) -> Result<Account, RepositoryError> {
        self.created.lock().unwrap().push(Recorded {
            name: descriptor.name.clone(),
            cosigner_of: descriptor.cosigner_of.clone(),
            public_key: descriptor.keypair.public_key(),
            password: descriptor.password.clone(),
            testnet: descriptor.testnet,
        });
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.inner.create_account(descriptor).await
    }

    async fn create_hardware_account(
        &self,
        hardware: HardwareAccount,
    ) -> Result<Account, RepositoryError> {
        self.inner.create_hardware_account(hardware).await
    }
}

/// Hardware bridge that derives deterministic keys and records requests.
#[derive(Default)]
struct RecordingBridge {
    requests: Mutex<Vec<(String, AccountIndex)>>,
    reject: bool,
}

impl RecordingBridge {
    fn requests(&self) -> Vec<(String, AccountIndex)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HardwareBridge for RecordingBridge {
    async fn request_hardware_account(
        &self,
        wallet_id: &str,
        account_index: AccountIndex,
    ) -> Result<HardwareAccount, HardwareError> {
        self.requests
            .lock()
            .unwrap()
            .push((wallet_id.to_string(), account_index));
        if self.reject {
            return Err(HardwareError::Rejected {
                reason: "denied on device".to_string(),
            });
        }
        let mut seed = [0u8; 32];
        seed[..4].copy_from_slice(&account_index.to_le_bytes());
        Ok(HardwareAccount {
            wallet_id: wallet_id.to_string(),
            account_index,
            public_key: Keypair::from_seed(&seed).public_key(),
            name: format!("Ledger #{}", account_index),
            testnet: false,
        })
    }
}

fn account(id: &str, name: &str, public_key: PublicKey, testnet: bool) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        public_key,
        testnet,
        cosigner_of: None,
        requires_password: true,
        hardware_wallet: None,
    }
}

fn start(
    options: AccountCreationOptions,
    accounts: Arc<RecordingAccounts>,
    bridge: Arc<RecordingBridge>,
) -> AccountCreationController {
    AccountCreationController::new(options, accounts, bridge, &Catalog::default()).unwrap()
}

fn with_password(controller: &mut AccountCreationController, password: &str) {
    controller.apply(FormEdit::SetPassword(password.to_string()));
    controller.apply(FormEdit::SetRepeatedPassword(password.to_string()));
}

#[tokio::test]
async fn test_create_fresh_account_end_to_end() {
    let accounts = Arc::new(RecordingAccounts::new(vec![account(
        "mainnet-1",
        "My Account",
        [1u8; 32],
        false,
    )]));
    let bridge = Arc::new(RecordingBridge::default());
    let mut controller = start(
        AccountCreationOptions::default(),
        accounts.clone(),
        bridge.clone(),
    );
    assert_eq!(controller.form().name, "My Account 2");

    with_password(&mut controller, "correct horse");
    assert!(controller.validate().unwrap());

    let created = controller.submit().await.unwrap();
    assert_eq!(created.name, "My Account 2");
    assert!(created.requires_password);

    let recorded = accounts.created();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].password.as_deref(), Some("correct horse"));
    assert_eq!(recorded[0].public_key, created.public_key);
    assert!(!recorded[0].testnet);
    assert!(bridge.requests().is_empty());
    assert_eq!(accounts.accounts().unwrap().len(), 2);
}

#[tokio::test]
async fn test_password_omitted_when_not_required() {
    let accounts = Arc::new(RecordingAccounts::new(Vec::new()));
    let mut controller = start(
        AccountCreationOptions {
            testnet: true,
            ..Default::default()
        },
        accounts.clone(),
        Arc::new(RecordingBridge::default()),
    );
    controller.apply(FormEdit::SetRequiresPassword(false));
    controller.apply(FormEdit::SetPassword("ignored".to_string()));
    assert!(controller.validate().unwrap());

    let created = controller.submit().await.unwrap();
    assert!(created.testnet);
    assert_eq!(created.name, "My Testnet Account");
    assert_eq!(accounts.created()[0].password, None);
}

#[tokio::test]
async fn test_import_secret_key() {
    let keypair = Keypair::generate();
    let accounts = Arc::new(RecordingAccounts::new(Vec::new()));
    let mut controller = start(
        AccountCreationOptions {
            import: true,
            ..Default::default()
        },
        accounts.clone(),
        Arc::new(RecordingBridge::default()),
    );
    with_password(&mut controller, "pw");
    controller.apply(FormEdit::SetSecretKey(Some(keypair.secret())));
    assert!(controller.validate().unwrap());

    let created = controller.submit().await.unwrap();
    assert_eq!(created.public_key, keypair.public_key());
}

#[tokio::test]
async fn test_import_duplicate_reported_and_rendered() {
    let keypair = Keypair::generate();
    let accounts = Arc::new(RecordingAccounts::new(vec![account(
        "testnet-1",
        "Old",
        keypair.public_key(),
        true,
    )]));
    let mut controller = start(
        AccountCreationOptions {
            import: true,
            testnet: true,
            ..Default::default()
        },
        accounts,
        Arc::new(RecordingBridge::default()),
    );
    with_password(&mut controller, "pw");
    controller.apply(FormEdit::SetSecretKey(Some(keypair.secret())));

    assert!(!controller.validate().unwrap());
    assert_eq!(
        controller.errors().get(Field::SecretKey),
        Some(ErrorKind::AccountAlreadyImported)
    );
    let rendered = render_errors(controller.errors(), &Catalog::default());
    assert_eq!(
        rendered[&Field::SecretKey],
        "You cannot import the same account twice."
    );

    controller.apply(FormEdit::SetSecretKey(Some("nonsense".to_string())));
    assert!(!controller.validate().unwrap());
    assert_eq!(
        controller.errors().get(Field::SecretKey),
        Some(ErrorKind::InvalidKey)
    );
    assert_eq!(controller.errors().len(), 1);
}

#[tokio::test]
async fn test_hardware_import_uses_next_index() {
    let accounts = Arc::new(RecordingAccounts::new(vec![
        account("wallet1-x-0", "Ledger 1", [2u8; 32], false),
        account("wallet1-x-2", "Ledger 3", [3u8; 32], false),
        account("wallet2-x-9", "Other", [4u8; 32], false),
    ]));
    let bridge = Arc::new(RecordingBridge::default());
    let mut controller = start(
        AccountCreationOptions::default(),
        accounts.clone(),
        bridge.clone(),
    );
    controller.apply(FormEdit::SetImportHardware(true));
    controller.apply(FormEdit::SetWalletId(Some("wallet1".to_string())));
    controller.apply(FormEdit::SetRequiresPassword(false));
    assert!(controller.validate().unwrap());

    let created = controller.submit().await.unwrap();
    assert_eq!(bridge.requests(), vec![("wallet1".to_string(), 3)]);
    assert_eq!(created.id, "wallet1-3");
    assert!(accounts.created().is_empty());
}

async fn import_from(
    wallet_id: &str,
    accounts: Arc<RecordingAccounts>,
    bridge: Arc<RecordingBridge>,
) -> Result<Account, CreationError> {
    let mut controller = start(AccountCreationOptions::default(), accounts, bridge);
    controller.apply(FormEdit::SetImportHardware(true));
    controller.apply(FormEdit::SetWalletId(Some(wallet_id.to_string())));
    controller.apply(FormEdit::SetRequiresPassword(false));
    controller.submit().await
}

#[tokio::test]
async fn test_hardware_wallets_sharing_id_prefix_keep_separate_indices() {
    let accounts = Arc::new(RecordingAccounts::new(Vec::new()));
    let bridge = Arc::new(RecordingBridge::default());

    for _ in 0..5 {
        import_from("ledger-ab12", accounts.clone(), bridge.clone())
            .await
            .unwrap();
    }
    let created = import_from("ledger", accounts.clone(), bridge.clone())
        .await
        .unwrap();
    assert_eq!(created.id, "ledger-0");
    assert_eq!(created.hardware_wallet.as_deref(), Some("ledger"));

    let created = import_from("ledger-ab12", accounts.clone(), bridge.clone())
        .await
        .unwrap();
    assert_eq!(created.id, "ledger-ab12-5");
    assert_eq!(
        bridge.requests().last(),
        Some(&("ledger-ab12".to_string(), 5))
    );
}

#[tokio::test]
async fn test_exhausted_hardware_index_never_calls_bridge() {
    let mut last = account(
        &format!("w-{}", AccountIndex::MAX),
        "Last",
        [5u8; 32],
        false,
    );
    last.hardware_wallet = Some("w".to_string());
    let accounts = Arc::new(RecordingAccounts::new(vec![last]));
    let bridge = Arc::new(RecordingBridge::default());

    let err = import_from("w", accounts, bridge.clone()).await.unwrap_err();
    assert!(matches!(
        err,
        CreationError::IndexExhausted { ref wallet_id } if wallet_id == "w"
    ));
    assert!(bridge.requests().is_empty());
}

#[tokio::test]
async fn test_hardware_without_wallet_never_calls_bridge() {
    let bridge = Arc::new(RecordingBridge::default());
    let mut controller = start(
        AccountCreationOptions::default(),
        Arc::new(RecordingAccounts::new(Vec::new())),
        bridge.clone(),
    );
    controller.apply(FormEdit::SetImportHardware(true));

    let err = controller.submit().await.unwrap_err();
    assert!(matches!(err, CreationError::MissingWalletId));
    assert!(bridge.requests().is_empty());
}

#[tokio::test]
async fn test_hardware_rejection_propagates() {
    let bridge = Arc::new(RecordingBridge {
        reject: true,
        ..Default::default()
    });
    let accounts = Arc::new(RecordingAccounts::new(Vec::new()));
    let mut controller = start(
        AccountCreationOptions::default(),
        accounts.clone(),
        bridge.clone(),
    );
    controller.apply(FormEdit::SetImportHardware(true));
    controller.apply(FormEdit::SetWalletId(Some("ledger-9".to_string())));

    let err = controller.submit().await.unwrap_err();
    assert!(matches!(
        err,
        CreationError::Hardware(HardwareError::Rejected { .. })
    ));
    assert_eq!(bridge.requests(), vec![("ledger-9".to_string(), 0)]);
    assert!(accounts.accounts().unwrap().is_empty());
}

#[tokio::test]
async fn test_cosigner_without_target_fails_before_keypair() {
    let accounts = Arc::new(RecordingAccounts::new(Vec::new()));
    let mut controller = start(
        AccountCreationOptions {
            cosigner: true,
            import: true,
            ..Default::default()
        },
        accounts.clone(),
        Arc::new(RecordingBridge::default()),
    );
    // An unparseable key would fail keypair construction; the cosigner check comes first.
    controller.apply(FormEdit::SetSecretKey(Some("garbage".to_string())));

    let err = controller.submit().await.unwrap_err();
    assert!(matches!(err, CreationError::CosignerLackingKey));
    assert!(accounts.created().is_empty());
}

#[tokio::test]
async fn test_cosigner_key_is_scoped_to_target() {
    let target = Keypair::generate();
    let target_key = hex_key(&target.public_key());
    let accounts = Arc::new(RecordingAccounts::new(Vec::new()));
    let mut controller = start(
        AccountCreationOptions {
            cosigner: true,
            ..Default::default()
        },
        accounts.clone(),
        Arc::new(RecordingBridge::default()),
    );
    with_password(&mut controller, "pw");
    controller.apply(FormEdit::SetCosignerOf(Some(target_key.clone())));

    let created = controller.submit().await.unwrap();
    assert_eq!(created.cosigner_of.as_deref(), Some(target_key.as_str()));
    assert_eq!(accounts.created()[0].cosigner_of, Some(target_key));
}

#[tokio::test]
async fn test_repository_failure_propagates() {
    let accounts = Arc::new(RecordingAccounts::failing(RepositoryError::Write {
        reason: "disk full".to_string(),
    }));
    let mut controller = start(
        AccountCreationOptions::default(),
        accounts,
        Arc::new(RecordingBridge::default()),
    );
    with_password(&mut controller, "pw");

    let err = controller.submit().await.unwrap_err();
    assert_eq!(err.to_string(), "write error: disk full");
}

fn hex_key(public_key: &PublicKey) -> String {
    lantern_crypto::keys::encode_public_key(public_key)
}
