use argon2::Argon2;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    XChaCha20Poly1305, XNonce,
};
use lantern_types::error::LanternError;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Length of the per-secret Argon2id salt.
pub const SALT_LEN: usize = 16;

/// Length of the XChaCha20-Poly1305 nonce.
pub const NONCE_LEN: usize = 24;

/// A secret encrypted under a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedSecret {
    /// Argon2id salt (16 bytes).
    pub salt: [u8; SALT_LEN],
    /// XChaCha20-Poly1305 nonce (24 bytes).
    pub nonce: [u8; NONCE_LEN],
    /// Encrypted payload with authentication tag.
    pub ciphertext: Vec<u8>,
}

/// Derive a 32-byte encryption key from a password with Argon2id.
fn password_key(password: &str, salt: &[u8]) -> Result<Zeroizing<[u8; 32]>, LanternError> {
    let mut key = Zeroizing::new([0u8; 32]);
    Argon2::default()
        .hash_password_into(password.as_bytes(), salt, &mut *key)
        .map_err(|e| LanternError::EncryptionFailed {
            reason: e.to_string(),
        })?;
    Ok(key)
}

/// Encrypt `plaintext` under `password` with a fresh salt and nonce.
pub fn seal(password: &str, plaintext: &[u8]) -> Result<SealedSecret, LanternError> {
    let mut rng = rand::rngs::OsRng;
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce_bytes);

    let key = password_key(password, &salt)?;
    let cipher = XChaCha20Poly1305::new_from_slice(&key[..]).map_err(|e| {
        LanternError::EncryptionFailed {
            reason: e.to_string(),
        }
    })?;
    let ciphertext = cipher
        .encrypt(XNonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| LanternError::EncryptionFailed {
            reason: e.to_string(),
        })?;

    Ok(SealedSecret {
        salt,
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Decrypt a sealed secret. A wrong password surfaces as `DecryptionFailed`.
pub fn open(password: &str, sealed: &SealedSecret) -> Result<Zeroizing<Vec<u8>>, LanternError> {
    let key = password_key(password, &sealed.salt).map_err(|e| LanternError::DecryptionFailed {
        reason: e.to_string(),
    })?;
    let cipher = XChaCha20Poly1305::new_from_slice(&key[..]).map_err(|e| {
        LanternError::DecryptionFailed {
            reason: e.to_string(),
        }
    })?;
    cipher
        .decrypt(XNonce::from_slice(&sealed.nonce), sealed.ciphertext.as_slice())
        .map(Zeroizing::new)
        .map_err(|e| LanternError::DecryptionFailed {
            reason: e.to_string(),
        })
}
