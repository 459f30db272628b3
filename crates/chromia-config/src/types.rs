//! Configuration types for the adapter service.

use chromia_types::{AccountIdEncoding, NetworksConfig};
use serde::{Deserialize, Serialize};

/// Complete adapter configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AdapterConfig {
	/// Service identity and HTTP settings
	#[serde(default)]
	pub service: ServiceSettings,
	/// Mainnet and testnet endpoints
	#[serde(default)]
	pub networks: NetworksConfig,
	/// Ledger client settings
	#[serde(default)]
	pub ledger: LedgerSettings,
}

/// Service identity and HTTP settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
	/// Service name for logging
	#[serde(default = "default_name")]
	pub name: String,
	/// Address the HTTP API binds to
	#[serde(default = "default_host")]
	pub host: String,
	/// Port the HTTP API listens on
	#[serde(default = "default_http_port")]
	pub http_port: u16,
	/// Default log level when RUST_LOG is unset
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

impl Default for ServiceSettings {
	fn default() -> Self {
		Self {
			name: default_name(),
			host: default_host(),
			http_port: default_http_port(),
			log_level: default_log_level(),
		}
	}
}

/// Ledger client settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LedgerSettings {
	/// How caller supplied account ids are encoded for the ledger
	#[serde(default)]
	pub account_id_encoding: AccountIdEncoding,
}

fn default_name() -> String {
	"chromia-adapter".to_string()
}

fn default_host() -> String {
	"0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
	3000
}

fn default_log_level() -> String {
	"info".to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = AdapterConfig::default();
		assert_eq!(config.service.name, "chromia-adapter");
		assert_eq!(config.service.http_port, 3000);
		assert_eq!(config.networks.main.label, "mainnet");
		assert_eq!(config.ledger.account_id_encoding, AccountIdEncoding::Native);
	}

	#[test]
	fn test_partial_toml_falls_back_to_defaults() {
		let toml = r#"
[service]
http_port = 8080

[ledger]
account_id_encoding = "evm"
"#;
		let config: AdapterConfig = toml::from_str(toml).unwrap();
		assert_eq!(config.service.http_port, 8080);
		assert_eq!(config.service.log_level, "info");
		assert_eq!(config.ledger.account_id_encoding, AccountIdEncoding::Evm);
		assert_eq!(config.networks.testnet.label, "testnet");
	}
}
