use lantern_types::error::LanternError;
use thiserror::Error;

/// Failures of [`crate::controller::AccountCreationController::submit`].
///
/// `MissingWalletId` and `CosignerLackingKey` mean the caller submitted a form
/// that validation would have rejected. `IndexExhausted` is raised before the
/// device is contacted. Everything else comes from a
/// collaborator and is passed through untouched.
#[derive(Debug, Error)]
pub enum CreationError {
    #[error("no wallet ID provided for importing a hardware account")]
    MissingWalletId,

    #[error(
        "cannot add key pair as co-signer of an account, since no public key for the account to co-sign has been provided"
    )]
    CosignerLackingKey,

    #[error("hardware wallet '{wallet_id}' has no unused account index left")]
    IndexExhausted { wallet_id: String },

    #[error(transparent)]
    Key(#[from] LanternError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Hardware(#[from] HardwareError),
}

/// Errors reported by an accounts repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("read error: {reason}")]
    Read { reason: String },

    #[error("write error: {reason}")]
    Write { reason: String },

    #[error("account already exists: {id}")]
    Duplicate { id: String },

    #[error("crypto error: {0}")]
    Crypto(#[from] LanternError),
}

/// Errors reported by a hardware wallet bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareError {
    #[error("no hardware wallet transport available")]
    Unavailable,

    #[error("hardware wallet rejected the request: {reason}")]
    Rejected { reason: String },

    #[error("hardware wallet did not respond in time")]
    Timeout,
}
