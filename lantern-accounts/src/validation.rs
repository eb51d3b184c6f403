use std::collections::BTreeMap;

use lantern_crypto::keys::Keypair;
use lantern_types::account::Account;

use crate::form::AccountCreationForm;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Password,
    SecretKey,
    WalletId,
}

/// Locale-free reason a field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoAccountName,
    NoWallet,
    NoPassword,
    PasswordMismatch,
    InvalidKey,
    AccountAlreadyImported,
}

impl ErrorKind {
    /// The field this error is reported on.
    pub fn field(self) -> Field {
        match self {
            ErrorKind::NoAccountName => Field::Name,
            ErrorKind::NoWallet => Field::WalletId,
            ErrorKind::NoPassword | ErrorKind::PasswordMismatch => Field::Password,
            ErrorKind::InvalidKey | ErrorKind::AccountAlreadyImported => Field::SecretKey,
        }
    }
}

/// Sparse field → error mapping. A missing field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountCreationErrors {
    entries: BTreeMap<Field, ErrorKind>,
}

impl AccountCreationErrors {
    pub fn get(&self, field: Field) -> Option<ErrorKind> {
        self.entries.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ErrorKind)> + '_ {
        self.entries.iter().map(|(field, kind)| (*field, *kind))
    }

    fn insert(&mut self, kind: ErrorKind) {
        self.entries.insert(kind.field(), kind);
    }
}

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub errors: AccountCreationErrors,
    pub success: bool,
}

fn is_account_already_imported(keypair: &Keypair, accounts: &[Account], testnet: bool) -> bool {
    let public_key = keypair.public_key();
    accounts
        .iter()
        .any(|account| account.public_key == public_key && account.testnet == testnet)
}

/// Validate a draft against the existing accounts.
///
/// Pure: the full error set is recomputed on every call.
pub fn validate(form: &AccountCreationForm, accounts: &[Account]) -> ValidationOutcome {
    let mut errors = AccountCreationErrors::default();

    if form.name.is_empty() {
        errors.insert(ErrorKind::NoAccountName);
    }

    if form.import_hardware && form.selected_wallet().is_none() {
        errors.insert(ErrorKind::NoWallet);
    }

    if form.requires_password {
        if form.password.is_empty() {
            errors.insert(ErrorKind::NoPassword);
        } else if form.password != form.repeated_password {
            errors.insert(ErrorKind::PasswordMismatch);
        }
    }

    if form.import {
        match form.secret_key.as_deref().map(Keypair::from_secret) {
            Some(Ok(keypair)) => {
                if is_account_already_imported(&keypair, accounts, form.testnet) {
                    errors.insert(ErrorKind::AccountAlreadyImported);
                }
            }
            _ => errors.insert(ErrorKind::InvalidKey),
        }
    }

    let success = errors.is_empty();
    ValidationOutcome { errors, success }
}
