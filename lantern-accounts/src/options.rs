use serde::{Deserialize, Serialize};

/// Flags fixed by the caller for the lifetime of one creation flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreationOptions {
    /// The key is created as a co-signer of an existing account.
    pub cosigner: bool,
    /// The key is imported rather than freshly generated.
    pub import: bool,
    /// The account lives in the testnet namespace.
    pub testnet: bool,
}
