// ─── Naming ──────────────────────────────────────────────────────────────────

/// Base name of the first mainnet account.
pub const DEFAULT_MAINNET_BASE_NAME: &str = "My Account";

/// Base name of the first testnet account.
pub const DEFAULT_TESTNET_BASE_NAME: &str = "My Testnet Account";

// ─── Account Identifiers ────────────────────────────────────────────────────

/// Separator between a hardware wallet ID and the device account index.
pub const HARDWARE_ID_SEPARATOR: char = '-';

/// Prefix of software account IDs on mainnet.
pub const MAINNET_ID_PREFIX: &str = "mainnet";

/// Prefix of software account IDs on testnet.
pub const TESTNET_ID_PREFIX: &str = "testnet";

/// Number of BLAKE3 digest bytes used in a software account ID.
pub const ACCOUNT_ID_DIGEST_LEN: usize = 20;

// ─── Key Material ────────────────────────────────────────────────────────────

/// Length of a hex-encoded secret key, without the optional `0x` prefix.
pub const SECRET_KEY_HEX_LEN: usize = 64;
