use crate::keys;
use async_trait::async_trait;
use chromia_types::{
	Account, AccountId, AccountSession, AdapterError, AssetBalance, KeyPair, KeyStoreInteractor,
	LedgerClient, Result, TransactionInfo, TransactionStatusResponse,
};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Client handle for one blockchain on one Postchain node.
pub struct PostchainClient {
	http: reqwest::Client,
	node_url: Url,
	blockchain_rid: String,
	interactor: Option<Arc<dyn KeyStoreInteractor>>,
}

impl PostchainClient {
	pub fn new(
		node_url: &str,
		blockchain_rid: &str,
		interactor: Option<Arc<dyn KeyStoreInteractor>>,
	) -> Result<Self> {
		let node_url = Url::parse(node_url.trim_end_matches('/'))
			.map_err(|e| AdapterError::Connection(format!("Invalid node URL {}: {}", node_url, e)))?;

		let http = reqwest::Client::builder()
			.build()
			.map_err(|e| AdapterError::Connection(format!("Failed to create HTTP client: {}", e)))?;

		Ok(Self {
			http,
			node_url,
			blockchain_rid: blockchain_rid.to_ascii_uppercase(),
			interactor,
		})
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}{}", self.node_url.as_str().trim_end_matches('/'), path)
	}

	async fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, String)]) -> Result<T> {
		debug!("GET {}", url);

		let response = self
			.http
			.get(url)
			.query(params)
			.send()
			.await
			.map_err(|e| AdapterError::Connection(format!("HTTP request failed: {}", e)))?;

		if !response.status().is_success() {
			return Err(AdapterError::Ledger(format!(
				"Node returned status {} for {}",
				response.status(),
				url
			)));
		}

		response
			.json()
			.await
			.map_err(|e| AdapterError::Ledger(format!("Failed to parse node response: {}", e)))
	}

	async fn query<T: DeserializeOwned>(&self, name: &str, args: &[(&str, String)]) -> Result<T> {
		let url = self.endpoint(&format!("/query/{}", self.blockchain_rid));
		let mut params = vec![("type", name.to_string())];
		params.extend(args.iter().cloned());

		self.get_json(&url, &params).await
	}
}

/// Pulls the fields the adapter relies on out of a `/transactions` payload.
fn parse_transaction_info(raw: serde_json::Value) -> Result<TransactionInfo> {
	let timestamp = raw
		.get("timestamp")
		.and_then(|v| v.as_i64())
		.ok_or_else(|| AdapterError::Ledger("Transaction info has no timestamp".to_string()))?;
	let block_height = raw.get("blockHeight").and_then(|v| v.as_u64());

	Ok(TransactionInfo {
		timestamp,
		block_height,
		raw,
	})
}

#[async_trait]
impl LedgerClient for PostchainClient {
	fn blockchain_rid(&self) -> &str {
		&self.blockchain_rid
	}

	async fn get_transaction_status(&self, tx_rid: &[u8]) -> Result<TransactionStatusResponse> {
		let url = self.endpoint(&format!(
			"/tx/{}/{}/status",
			self.blockchain_rid,
			hex::encode_upper(tx_rid)
		));
		self.get_json(&url, &[]).await
	}

	async fn get_transaction_info(&self, tx_rid: &[u8]) -> Result<TransactionInfo> {
		let url = self.endpoint(&format!(
			"/transactions/{}/{}",
			self.blockchain_rid,
			hex::encode_upper(tx_rid)
		));
		let raw: serde_json::Value = self.get_json(&url, &[]).await?;
		parse_transaction_info(raw)
	}

	fn make_key_pair(&self, private_key: &str) -> Result<KeyPair> {
		keys::make_key_pair(private_key)
	}

	async fn get_account_by_id(&self, account_id: &AccountId) -> Result<Option<Account>> {
		self.query("ft4.get_account_by_id", &[("id", account_id.to_string())])
			.await
	}

	async fn get_balance_by_asset_id(
		&self,
		account_id: &AccountId,
		asset_id: &str,
	) -> Result<Option<AssetBalance>> {
		self.query(
			"ft4.get_asset_balance",
			&[
				("account_id", account_id.to_string()),
				("asset_id", asset_id.to_string()),
			],
		)
		.await
	}

	async fn get_session(
		&self,
		key_pair: KeyPair,
		account_id: &AccountId,
	) -> Result<Box<dyn AccountSession>> {
		let interactor = self.interactor.as_ref().ok_or_else(|| {
			AdapterError::Session(format!(
				"No keystore interactor configured for {}",
				self.node_url
			))
		})?;

		interactor
			.get_session(
				self.node_url.as_str(),
				&self.blockchain_rid,
				key_pair,
				account_id,
			)
			.await
	}
}

impl fmt::Debug for PostchainClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PostchainClient")
			.field("node_url", &self.node_url.as_str())
			.field("blockchain_rid", &self.blockchain_rid)
			.field("has_interactor", &self.interactor.is_some())
			.finish()
	}
}
