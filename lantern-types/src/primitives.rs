/// 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// 32-byte Ed25519 seed (the secret half of a keypair).
pub type Seed = [u8; 32];

/// Index of an account on a hardware device.
pub type AccountIndex = u32;
