use thiserror::Error;

/// Errors raised by key handling and secret sealing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanternError {
    // ─── Key Errors ──────────────────────────────────────────────────────────
    #[error("invalid key material")]
    InvalidKeyMaterial,

    #[error("invalid secret key: {reason}")]
    InvalidSecretKey { reason: String },

    // ─── Sealing Errors ──────────────────────────────────────────────────────
    #[error("encryption failed: {reason}")]
    EncryptionFailed { reason: String },

    #[error("decryption failed: {reason}")]
    DecryptionFailed { reason: String },
}
