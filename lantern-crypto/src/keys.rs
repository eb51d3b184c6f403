use std::fmt;

use lantern_types::constants::SECRET_KEY_HEX_LEN;
use lantern_types::error::LanternError;
use lantern_types::primitives::{PublicKey, Seed};

/// Wrapper around an Ed25519 keypair. The signing key is wiped on drop.
#[derive(Clone)]
pub struct Keypair {
    inner: ed25519_dalek::SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut csprng);
        Self { inner: signing_key }
    }

    /// Create a keypair from a 32-byte seed.
    pub fn from_seed(seed: &Seed) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
        Self { inner: signing_key }
    }

    /// Parse a secret key string: 64 hex characters, optionally prefixed with `0x`.
    pub fn from_secret(secret: &str) -> Result<Self, LanternError> {
        let hex_str = secret.strip_prefix("0x").unwrap_or(secret);
        if hex_str.len() != SECRET_KEY_HEX_LEN {
            return Err(LanternError::InvalidSecretKey {
                reason: format!(
                    "expected {} hex characters, got {}",
                    SECRET_KEY_HEX_LEN,
                    hex_str.len()
                ),
            });
        }
        let bytes = hex::decode(hex_str).map_err(|e| LanternError::InvalidSecretKey {
            reason: e.to_string(),
        })?;
        let seed: Seed = bytes
            .try_into()
            .map_err(|_| LanternError::InvalidKeyMaterial)?;
        Ok(Self::from_seed(&seed))
    }

    /// Get the public key bytes.
    pub fn public_key(&self) -> PublicKey {
        self.inner.verifying_key().to_bytes()
    }

    /// Get the 32-byte seed (secret key bytes) of this keypair.
    pub fn seed(&self) -> Seed {
        self.inner.to_bytes()
    }

    /// Render the secret key in the format accepted by [`Keypair::from_secret`].
    pub fn secret(&self) -> String {
        hex::encode(self.seed())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &encode_public_key(&self.public_key()))
            .finish_non_exhaustive()
    }
}

/// Hex-encode a public key for display and storage.
pub fn encode_public_key(pubkey: &PublicKey) -> String {
    hex::encode(pubkey)
}

/// Parse a hex-encoded public key, rejecting bytes that are not a curve point.
pub fn parse_public_key(s: &str) -> Result<PublicKey, LanternError> {
    let hex_str = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(hex_str).map_err(|_| LanternError::InvalidKeyMaterial)?;
    let pubkey: PublicKey = bytes
        .try_into()
        .map_err(|_| LanternError::InvalidKeyMaterial)?;
    ed25519_dalek::VerifyingKey::from_bytes(&pubkey)
        .map_err(|_| LanternError::InvalidKeyMaterial)?;
    Ok(pubkey)
}
