use lantern_accounts::error::{CreationError, RepositoryError};
use lantern_types::error::LanternError;
use thiserror::Error;

/// Errors surfaced by `lantern` commands.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("account '{0}' not found")]
    AccountNotFound(String),

    #[error("account '{0}' is held by a hardware wallet; its secret cannot be exported")]
    HardwareHeld(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("{0} field(s) failed validation")]
    ValidationFailed(usize),

    #[error("invalid password: decryption failed")]
    InvalidPassword,

    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("crypto error: {0}")]
    Crypto(#[from] LanternError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_error_is_transparent() {
        let err = WalletError::from(CreationError::MissingWalletId);
        assert_eq!(err.to_string(), CreationError::MissingWalletId.to_string());
    }

    #[test]
    fn test_validation_failed_display() {
        assert_eq!(
            WalletError::ValidationFailed(2).to_string(),
            "2 field(s) failed validation"
        );
    }
}
