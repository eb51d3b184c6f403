use std::sync::Arc;

use lantern_crypto::keys::Keypair;
use lantern_types::account::Account;
use lantern_types::error::LanternError;
use tracing::{debug, info};

use crate::error::{CreationError, RepositoryError};
use crate::form::{AccountCreationForm, CreationMethod, FormEdit};
use crate::hardware::{next_account_index, HardwareBridge};
use crate::messages::Localizer;
use crate::naming::next_account_name;
use crate::options::AccountCreationOptions;
use crate::repository::{AccountDescriptor, AccountsRepository};
use crate::validation::{validate, AccountCreationErrors};

/// Drives one account creation flow: draft, validation and submission.
pub struct AccountCreationController {
    options: AccountCreationOptions,
    form: AccountCreationForm,
    errors: AccountCreationErrors,
    accounts: Arc<dyn AccountsRepository>,
    hardware: Arc<dyn HardwareBridge>,
}

/// Initial draft for `options`, named after the first unused default name.
pub fn initial_form(
    options: &AccountCreationOptions,
    accounts: &[Account],
    localizer: &dyn Localizer,
) -> AccountCreationForm {
    let base_name = localizer.base_name(options.testnet);
    AccountCreationForm::new(options, next_account_name(&base_name, accounts))
}

impl AccountCreationController {
    /// Start a flow. Reads the current accounts once to derive the default name.
    pub fn new(
        options: AccountCreationOptions,
        accounts: Arc<dyn AccountsRepository>,
        hardware: Arc<dyn HardwareBridge>,
        localizer: &dyn Localizer,
    ) -> Result<Self, RepositoryError> {
        let existing = accounts.accounts()?;
        let form = initial_form(&options, &existing, localizer);
        debug!(name = %form.name, testnet = options.testnet, "account creation started");
        Ok(Self {
            options,
            form,
            errors: AccountCreationErrors::default(),
            accounts,
            hardware,
        })
    }

    pub fn options(&self) -> &AccountCreationOptions {
        &self.options
    }

    /// The current draft.
    pub fn form(&self) -> &AccountCreationForm {
        &self.form
    }

    /// Errors of the most recent validation pass.
    pub fn errors(&self) -> &AccountCreationErrors {
        &self.errors
    }

    /// Apply a user edit to the draft.
    pub fn apply(&mut self, edit: FormEdit) {
        self.form = self.form.clone().apply(edit);
    }

    /// Replace the draft wholesale.
    pub fn set_form(&mut self, form: AccountCreationForm) {
        self.form = form;
    }

    /// Validate the current draft. See [`AccountCreationController::validate_form`].
    pub fn validate(&mut self) -> Result<bool, RepositoryError> {
        let form = self.form.clone();
        self.validate_form(&form)
    }

    /// Validate `form` against the current accounts, replacing the stored
    /// error set, and report whether it passed.
    pub fn validate_form(&mut self, form: &AccountCreationForm) -> Result<bool, RepositoryError> {
        let existing = self.accounts.accounts()?;
        let outcome = validate(form, &existing);
        debug!(
            success = outcome.success,
            errors = outcome.errors.len(),
            "account creation validated"
        );
        self.errors = outcome.errors;
        Ok(outcome.success)
    }

    /// Submit the current draft. See [`AccountCreationController::submit_form`].
    pub async fn submit(&self) -> Result<Account, CreationError> {
        self.submit_form(&self.form).await
    }

    /// Create the account described by `form`.
    ///
    /// Assumes `form` passed validation. Only the hardware wallet selection and
    /// the co-signed key are re-checked.
    pub async fn submit_form(&self, form: &AccountCreationForm) -> Result<Account, CreationError> {
        match form.method() {
            CreationMethod::ImportHardware => self.import_hardware(form).await,
            CreationMethod::ImportSecret | CreationMethod::Generate => {
                self.create_software(form).await
            }
        }
    }

    async fn import_hardware(&self, form: &AccountCreationForm) -> Result<Account, CreationError> {
        let wallet_id = form.selected_wallet().ok_or(CreationError::MissingWalletId)?;

        let existing = self.accounts.accounts()?;
        let account_index = next_account_index(wallet_id, &existing).ok_or_else(|| {
            CreationError::IndexExhausted {
                wallet_id: wallet_id.to_string(),
            }
        })?;
        debug!(wallet_id, account_index, "requesting hardware account");

        let hardware = self
            .hardware
            .request_hardware_account(wallet_id, account_index)
            .await?;
        let account = self.accounts.create_hardware_account(hardware).await?;
        info!(id = %account.id, "hardware account imported");
        Ok(account)
    }

    async fn create_software(&self, form: &AccountCreationForm) -> Result<Account, CreationError> {
        if form.cosigner && form.cosigned_account().is_none() {
            return Err(CreationError::CosignerLackingKey);
        }

        let keypair = if form.import {
            let secret = form
                .secret_key
                .as_deref()
                .ok_or_else(|| LanternError::InvalidSecretKey {
                    reason: "no secret key provided".to_string(),
                })?;
            Keypair::from_secret(secret)?
        } else {
            Keypair::generate()
        };

        let account = self
            .accounts
            .create_account(AccountDescriptor {
                name: form.name.clone(),
                cosigner_of: form.cosigned_account().map(str::to_string),
                keypair,
                password: form.requires_password.then(|| form.password.clone()),
                testnet: self.options.testnet,
            })
            .await?;
        info!(
            id = %account.id,
            imported = form.import,
            cosigner = form.cosigner,
            "account created"
        );
        Ok(account)
    }
}
