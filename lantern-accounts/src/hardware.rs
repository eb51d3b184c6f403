use async_trait::async_trait;
use lantern_types::account::{Account, HardwareAccount};
use lantern_types::constants::HARDWARE_ID_SEPARATOR;
use lantern_types::primitives::AccountIndex;
use tracing::warn;

use crate::error::HardwareError;

/// Access to connected hardware wallets.
#[async_trait]
pub trait HardwareBridge: Send + Sync {
    /// Ask the device `wallet_id` for the account at `account_index`.
    ///
    /// May wait on user confirmation on the device.
    async fn request_hardware_account(
        &self,
        wallet_id: &str,
        account_index: AccountIndex,
    ) -> Result<HardwareAccount, HardwareError>;
}

/// Bridge for environments without a hardware wallet transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHardwareBridge;

#[async_trait]
impl HardwareBridge for NoHardwareBridge {
    async fn request_hardware_account(
        &self,
        _wallet_id: &str,
        _account_index: AccountIndex,
    ) -> Result<HardwareAccount, HardwareError> {
        Err(HardwareError::Unavailable)
    }
}

/// Next unused device index for `wallet_id`.
///
/// Accounts recording their owning wallet count only when it is `wallet_id`.
/// Accounts without one fall back to their ID: `{wallet_id}-…-{index}`.
/// Returns one past the highest index, 0 when the wallet has no accounts yet,
/// and `None` once the index space is used up.
pub fn next_account_index(wallet_id: &str, accounts: &[Account]) -> Option<AccountIndex> {
    let prefix = format!("{}{}", wallet_id, HARDWARE_ID_SEPARATOR);
    let highest = accounts
        .iter()
        .filter(|account| match account.hardware_wallet.as_deref() {
            Some(owner) => owner == wallet_id,
            None => account.id.starts_with(&prefix),
        })
        .filter_map(|account| {
            let suffix = account.id.rsplit(HARDWARE_ID_SEPARATOR).next()?;
            match suffix.parse::<AccountIndex>() {
                Ok(index) => Some(index),
                Err(_) => {
                    warn!(id = %account.id, "skipping hardware account with malformed index");
                    None
                }
            }
        })
        .max();
    match highest {
        Some(max) => max.checked_add(1),
        None => Some(0),
    }
}
