use super::client::PostchainClient;
use async_trait::async_trait;
use chromia_types::{AdapterError, KeyStoreInteractor, LedgerClient, LedgerConnector, Result};
use std::sync::Arc;
use tracing::info;

/// Connector producing [`PostchainClient`] handles.
#[derive(Clone, Default)]
pub struct PostchainConnector {
	interactor: Option<Arc<dyn KeyStoreInteractor>>,
}

impl PostchainConnector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the keystore interactor that opens transfer sessions.
	pub fn with_interactor(mut self, interactor: Arc<dyn KeyStoreInteractor>) -> Self {
		self.interactor = Some(interactor);
		self
	}
}

#[async_trait]
impl LedgerConnector for PostchainConnector {
	async fn connect(&self, node_url: &str, blockchain_rid: &str) -> Result<Arc<dyn LedgerClient>> {
		if blockchain_rid.len() != 64 || hex::decode(blockchain_rid).is_err() {
			return Err(AdapterError::Connection(format!(
				"Invalid blockchain RID: {}",
				blockchain_rid
			)));
		}

		let client = PostchainClient::new(node_url, blockchain_rid, self.interactor.clone())?;
		info!(
			"Opened Postchain client for blockchain {} at {}",
			client.blockchain_rid(),
			node_url
		);

		Ok(Arc::new(client))
	}

	fn supports_transfers(&self) -> bool {
		self.interactor.is_some()
	}
}
