use lantern_types::constants::{DEFAULT_MAINNET_BASE_NAME, DEFAULT_TESTNET_BASE_NAME};
use serde::{Deserialize, Serialize};

/// Naming settings for new accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationConfig {
    /// Base of the default name sequence on mainnet.
    #[serde(default = "default_mainnet_base_name")]
    pub mainnet_base_name: String,
    /// Base of the default name sequence on testnet.
    #[serde(default = "default_testnet_base_name")]
    pub testnet_base_name: String,
}

fn default_mainnet_base_name() -> String {
    DEFAULT_MAINNET_BASE_NAME.to_string()
}

fn default_testnet_base_name() -> String {
    DEFAULT_TESTNET_BASE_NAME.to_string()
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            mainnet_base_name: default_mainnet_base_name(),
            testnet_base_name: default_testnet_base_name(),
        }
    }
}

impl CreationConfig {
    /// Base name for the given network.
    pub fn base_name(&self, testnet: bool) -> &str {
        if testnet {
            &self.testnet_base_name
        } else {
            &self.mainnet_base_name
        }
    }
}
