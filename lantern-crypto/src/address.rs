use lantern_types::constants::{ACCOUNT_ID_DIGEST_LEN, MAINNET_ID_PREFIX, TESTNET_ID_PREFIX};
use lantern_types::primitives::PublicKey;

use crate::hash::blake3_hash_domain;

/// Derive the identifier of a software account.
/// ID = "{network}-" + hex(BLAKE3("lantern-account-id", pubkey)[0..20])
pub fn account_id(pubkey: &PublicKey, testnet: bool) -> String {
    let digest = blake3_hash_domain("lantern-account-id", pubkey);
    let prefix = if testnet {
        TESTNET_ID_PREFIX
    } else {
        MAINNET_ID_PREFIX
    };
    format!("{}-{}", prefix, hex::encode(&digest[..ACCOUNT_ID_DIGEST_LEN]))
}
