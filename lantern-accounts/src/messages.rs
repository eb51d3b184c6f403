use std::collections::BTreeMap;

use crate::config::CreationConfig;
use crate::validation::{AccountCreationErrors, ErrorKind, Field};

/// Resolves the user-facing strings of the creation flow.
pub trait Localizer: Send + Sync {
    /// Base of the default account name sequence.
    fn base_name(&self, testnet: bool) -> String;

    /// Message shown next to a field carrying `kind`.
    fn message(&self, kind: ErrorKind) -> String;
}

/// English strings, with base names taken from configuration.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CreationConfig,
}

impl Catalog {
    pub fn new(config: CreationConfig) -> Self {
        Self { config }
    }
}

impl Localizer for Catalog {
    fn base_name(&self, testnet: bool) -> String {
        self.config.base_name(testnet).to_string()
    }

    fn message(&self, kind: ErrorKind) -> String {
        let text = match kind {
            ErrorKind::NoAccountName => "No account name has been entered.",
            ErrorKind::NoWallet => "No wallet has been selected.",
            ErrorKind::NoPassword => "No password has been entered.",
            ErrorKind::PasswordMismatch => "Password does not match.",
            ErrorKind::InvalidKey => "Invalid secret key.",
            ErrorKind::AccountAlreadyImported => "You cannot import the same account twice.",
        };
        text.to_string()
    }
}

/// Render every error of `errors` through `localizer`.
pub fn render_errors(
    errors: &AccountCreationErrors,
    localizer: &dyn Localizer,
) -> BTreeMap<Field, String> {
    errors
        .iter()
        .map(|(field, kind)| (field, localizer.message(kind)))
        .collect()
}
