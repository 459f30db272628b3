//! Network configuration and explorer links.

use serde::{Deserialize, Serialize};

/// Key selecting the mainnet configuration. Every other key selects testnet.
pub const MAINNET_KEY: &str = "main";

/// Key conventionally used for testnet.
pub const TESTNET_KEY: &str = "testnet";

/// Connection and explorer settings for one Chromia network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
	/// Node REST endpoint.
	pub rpc_url: String,
	/// Human readable network label ("mainnet", "testnet").
	pub label: String,
	/// Explorer base URL, without trailing slash.
	pub explorer_url: String,
	/// Blockchain RID used for links when the caller supplies none.
	#[serde(default)]
	pub blockchain_rid: Option<String>,
}

impl NetworkConfig {
	pub fn mainnet() -> Self {
		Self {
			rpc_url: "https://acala-rpc.dwellir.com".to_string(),
			label: "mainnet".to_string(),
			explorer_url: "https://explorer.chromia.com/mainnet".to_string(),
			blockchain_rid: None,
		}
	}

	pub fn testnet() -> Self {
		Self {
			rpc_url: "https://node0.testnet.chromia.com:7740/".to_string(),
			label: "testnet".to_string(),
			explorer_url: "https://explorer.chromia.com/testnet".to_string(),
			blockchain_rid: None,
		}
	}

	/// Explorer link for a transaction.
	///
	/// With a chain id the link points at `/transaction/{chain_id}/{hash}`,
	/// otherwise at `/transaction/{hash}`.
	pub fn transaction_link(&self, hash: &str, chain_id: Option<&str>) -> String {
		let base = self.explorer_url.trim_end_matches('/');
		match chain_id {
			Some(chain_id) => format!("{}/transaction/{}/{}", base, chain_id, hash),
			None => format!("{}/transaction/{}", base, hash),
		}
	}

	/// Explorer link for a wallet.
	pub fn wallet_link(&self, address: &str) -> String {
		format!(
			"{}/wallet/{}",
			self.explorer_url.trim_end_matches('/'),
			address
		)
	}
}

/// The two networks the adapter knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworksConfig {
	#[serde(default = "NetworkConfig::mainnet")]
	pub main: NetworkConfig,
	#[serde(default = "NetworkConfig::testnet")]
	pub testnet: NetworkConfig,
}

impl Default for NetworksConfig {
	fn default() -> Self {
		Self {
			main: NetworkConfig::mainnet(),
			testnet: NetworkConfig::testnet(),
		}
	}
}
