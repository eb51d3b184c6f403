use serde::{Deserialize, Serialize};

use crate::primitives::{AccountIndex, PublicKey};

/// An account known to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identifier. Hardware accounts use `{wallet_id}-{index}`.
    pub id: String,
    /// Display name.
    pub name: String,
    pub public_key: PublicKey,
    pub testnet: bool,
    /// Public key of the account this key co-signs for, if any.
    #[serde(default)]
    pub cosigner_of: Option<String>,
    /// Whether the stored secret is protected by a password.
    pub requires_password: bool,
    /// Owning hardware wallet, for accounts imported from a device.
    #[serde(default)]
    pub hardware_wallet: Option<String>,
}

/// Account derived on a hardware device, as returned by the hardware bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareAccount {
    pub wallet_id: String,
    pub account_index: AccountIndex,
    pub public_key: PublicKey,
    pub name: String,
    pub testnet: bool,
}

impl HardwareAccount {
    /// Identifier under which the account is registered: `{wallet_id}-{index}`.
    pub fn account_id(&self) -> String {
        format!(
            "{}{}{}",
            self.wallet_id,
            crate::constants::HARDWARE_ID_SEPARATOR,
            self.account_index
        )
    }
}
