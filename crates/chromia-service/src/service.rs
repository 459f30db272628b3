//! Wires configuration into a ready adapter.

use chromia_adapter::ChromiaAdapter;
use chromia_chains::{NetworkRegistry, PostchainConnector};
use chromia_config::AdapterConfig;
use chromia_types::LedgerConnector;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds an adapter backed by the Postchain REST client.
pub fn build_adapter(config: &AdapterConfig) -> ChromiaAdapter {
	build_adapter_with(config, Arc::new(PostchainConnector::new()))
}

pub fn build_adapter_with(config: &AdapterConfig, connector: Arc<dyn LedgerConnector>) -> ChromiaAdapter {
	let registry = Arc::new(NetworkRegistry::from_config(&config.networks));
	info!(
		"Networks: main -> {}, testnet -> {}",
		registry.mainnet().rpc_url,
		registry.testnet().rpc_url
	);

	let adapter = ChromiaAdapter::new(registry, connector)
		.with_account_id_encoding(config.ledger.account_id_encoding);
	if !adapter.transfers_enabled() {
		warn!("No keystore interactor configured, transfers are disabled");
	}

	adapter
}

#[cfg(test)]
mod tests {
	use super::*;
	use chromia_config::{parse_config, validate_config, ConfigFormat};
	use chromia_types::AccountIdEncoding;

	#[test]
	fn test_example_config_builds_adapter() {
		let config = parse_config(
			include_str!("../../../config/example.toml"),
			ConfigFormat::Toml,
		)
		.unwrap();
		validate_config(&config).unwrap();

		let adapter = build_adapter(&config);
		assert_eq!(adapter.account_id_encoding(), AccountIdEncoding::Native);
		assert!(!adapter.transfers_enabled());
		assert_eq!(
			adapter.get_transaction_link("AB", "testnet"),
			"https://explorer.chromia.com/testnet/transaction/C7D5D9E5222E8AF3F13FE973581CAA78C7824E10D23A247C3DA9A5F7AA9E417F/AB"
		);
		assert_eq!(
			adapter.get_transaction_link("AB", "main"),
			"https://explorer.chromia.com/mainnet/transaction/AB"
		);
	}

	#[test]
	fn test_encoding_follows_config() {
		let mut config = AdapterConfig::default();
		config.ledger.account_id_encoding = AccountIdEncoding::Evm;

		assert_eq!(
			build_adapter(&config).account_id_encoding(),
			AccountIdEncoding::Evm
		);
	}
}
