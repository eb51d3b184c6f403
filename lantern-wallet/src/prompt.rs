use dialoguer::Password;

use crate::error::WalletError;

/// Prompt the user for hidden input.
pub fn prompt_password(prompt: &str) -> Result<String, WalletError> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| WalletError::IoError(std::io::Error::other(e)))
}
