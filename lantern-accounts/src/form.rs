use std::fmt;

use crate::options::AccountCreationOptions;

/// How a submitted form produces its keypair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationMethod {
    /// A fresh random keypair.
    Generate,
    /// A keypair parsed from the entered secret key.
    ImportSecret,
    /// An account derived on a hardware wallet.
    ImportHardware,
}

/// Draft state of one account creation flow.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCreationForm {
    pub cosigner: bool,
    pub import: bool,
    pub testnet: bool,
    pub import_hardware: bool,
    pub name: String,
    pub password: String,
    pub repeated_password: String,
    pub requires_password: bool,
    pub secret_key: Option<String>,
    pub wallet_id: Option<String>,
    pub cosigner_of: Option<String>,
}

/// A single user edit of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    SetName(String),
    SetPassword(String),
    SetRepeatedPassword(String),
    SetRequiresPassword(bool),
    SetSecretKey(Option<String>),
    SetImportHardware(bool),
    SetWalletId(Option<String>),
    SetCosignerOf(Option<String>),
}

impl AccountCreationForm {
    /// Initial draft for `options`, with the given default name.
    pub fn new(options: &AccountCreationOptions, name: impl Into<String>) -> Self {
        Self {
            cosigner: options.cosigner,
            import: options.import,
            testnet: options.testnet,
            import_hardware: false,
            name: name.into(),
            password: String::new(),
            repeated_password: String::new(),
            requires_password: true,
            secret_key: None,
            wallet_id: None,
            cosigner_of: None,
        }
    }

    /// Apply one edit, returning the updated draft.
    ///
    /// The `cosigner`, `import` and `testnet` flags come from the flow options
    /// and have no corresponding edit.
    pub fn apply(mut self, edit: FormEdit) -> Self {
        match edit {
            FormEdit::SetName(name) => self.name = name,
            FormEdit::SetPassword(password) => self.password = password,
            FormEdit::SetRepeatedPassword(password) => self.repeated_password = password,
            FormEdit::SetRequiresPassword(required) => self.requires_password = required,
            FormEdit::SetSecretKey(secret) => self.secret_key = secret,
            FormEdit::SetImportHardware(hardware) => self.import_hardware = hardware,
            FormEdit::SetWalletId(wallet_id) => self.wallet_id = wallet_id,
            FormEdit::SetCosignerOf(public_key) => self.cosigner_of = public_key,
        }
        self
    }

    /// Which creation path a submission of this form takes.
    pub fn method(&self) -> CreationMethod {
        if self.import_hardware {
            CreationMethod::ImportHardware
        } else if self.import {
            CreationMethod::ImportSecret
        } else {
            CreationMethod::Generate
        }
    }

    /// The selected hardware wallet, treating an empty ID as no selection.
    pub fn selected_wallet(&self) -> Option<&str> {
        self.wallet_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Public key of the co-signed account, treating an empty key as absent.
    pub fn cosigned_account(&self) -> Option<&str> {
        self.cosigner_of.as_deref().filter(|key| !key.is_empty())
    }
}

// Passwords and secret keys stay out of logs.
impl fmt::Debug for AccountCreationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCreationForm")
            .field("cosigner", &self.cosigner)
            .field("import", &self.import)
            .field("testnet", &self.testnet)
            .field("import_hardware", &self.import_hardware)
            .field("name", &self.name)
            .field("requires_password", &self.requires_password)
            .field("has_secret_key", &self.secret_key.is_some())
            .field("wallet_id", &self.wallet_id)
            .field("cosigner_of", &self.cosigner_of)
            .finish_non_exhaustive()
    }
}
