//! Opens ledger client handles for a network and blockchain.

use crate::registry::NetworkRegistry;
use chromia_types::{LedgerClient, LedgerConnector, Result};
use std::sync::Arc;
use tracing::debug;

/// Resolves a network key and connects to its node.
///
/// Every call to [`ClientFactory::connect`] asks the connector for a new
/// handle; nothing is pooled or reused here. Connection failures are returned
/// to the caller unchanged.
#[derive(Clone)]
pub struct ClientFactory {
	registry: Arc<NetworkRegistry>,
	connector: Arc<dyn LedgerConnector>,
}

impl ClientFactory {
	pub fn new(registry: Arc<NetworkRegistry>, connector: Arc<dyn LedgerConnector>) -> Self {
		Self {
			registry,
			connector,
		}
	}

	pub fn registry(&self) -> &NetworkRegistry {
		&self.registry
	}

	pub fn supports_transfers(&self) -> bool {
		self.connector.supports_transfers()
	}

	pub async fn connect(&self, network: &str, blockchain_rid: &str) -> Result<Arc<dyn LedgerClient>> {
		let config = self.registry.resolve(network);
		debug!(
			"Connecting to {} at {} for blockchain {}",
			config.label, config.rpc_url, blockchain_rid
		);

		self.connector.connect(&config.rpc_url, blockchain_rid).await
	}
}
