//! Registry of network configurations.
//!
//! The registry is built once at startup and shared behind `Arc`. Lookup is
//! total: the key `"main"` selects mainnet and every other key, including
//! empty strings and typos, selects testnet. Callers cannot tell an unknown key
//! from an explicit testnet request.

use chromia_types::{NetworkConfig, NetworksConfig, MAINNET_KEY, TESTNET_KEY};
use std::fmt;
use tracing::debug;

pub struct NetworkRegistry {
	mainnet: NetworkConfig,
	testnet: NetworkConfig,
}

impl NetworkRegistry {
	pub fn new(mainnet: NetworkConfig, testnet: NetworkConfig) -> Self {
		Self { mainnet, testnet }
	}

	pub fn from_config(networks: &NetworksConfig) -> Self {
		Self::new(networks.main.clone(), networks.testnet.clone())
	}

	/// Returns the configuration for `key`, falling back to testnet.
	pub fn resolve(&self, key: &str) -> &NetworkConfig {
		if key == MAINNET_KEY {
			return &self.mainnet;
		}

		if key != TESTNET_KEY {
			debug!("Unknown network key {:?}, falling back to testnet", key);
		}

		&self.testnet
	}

	pub fn mainnet(&self) -> &NetworkConfig {
		&self.mainnet
	}

	pub fn testnet(&self) -> &NetworkConfig {
		&self.testnet
	}
}

impl Default for NetworkRegistry {
	fn default() -> Self {
		Self::from_config(&NetworksConfig::default())
	}
}

impl fmt::Debug for NetworkRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NetworkRegistry")
			.field("mainnet", &self.mainnet.label)
			.field("testnet", &self.testnet.label)
			.finish()
	}
}
