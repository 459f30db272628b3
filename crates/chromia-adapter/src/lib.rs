//! Chromia integration adapter.
//!
//! [`ChromiaAdapter`] is the surface the payment backend talks to. It reads
//! balances and transaction state from a Chromia node, submits FT4 transfers
//! and builds explorer links. Every ledger call opens a fresh client handle
//! through the [`ClientFactory`]; the adapter holds no per-request state.

pub mod amount;
pub mod validation;

#[cfg(test)]
mod mock;

use chromia_chains::{ClientFactory, NetworkRegistry};
use chromia_types::{
	AccountIdEncoding, AdapterError, FeeEstimate, LedgerConnector, ReceiptFlags, Result,
	SendTransactionResult, TransactionReceipt, TransactionRecord, TransactionStatus,
	TransferReceipt, TransferRequest, FEE_CURRENCY,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ChromiaAdapter {
	factory: ClientFactory,
	encoding: AccountIdEncoding,
}

impl ChromiaAdapter {
	pub fn new(registry: Arc<NetworkRegistry>, connector: Arc<dyn LedgerConnector>) -> Self {
		Self {
			factory: ClientFactory::new(registry, connector),
			encoding: AccountIdEncoding::default(),
		}
	}

	pub fn with_account_id_encoding(mut self, encoding: AccountIdEncoding) -> Self {
		self.encoding = encoding;
		self
	}

	pub fn account_id_encoding(&self) -> AccountIdEncoding {
		self.encoding
	}

	pub fn registry(&self) -> &NetworkRegistry {
		self.factory.registry()
	}

	/// Whether the ledger connector can open sessions for
	/// [`ChromiaAdapter::send_transaction`].
	pub fn transfers_enabled(&self) -> bool {
		self.factory.supports_transfers()
	}

	/// Returns the human-scaled balance of `asset_id` held by `account_id`.
	///
	/// Fails with [`AdapterError::InvalidAccount`] when the account does not
	/// exist on the ledger. An account without a balance record for the asset
	/// holds `0`. Balances beyond the range of [`Decimal`] (more than 28
	/// decimals, or wider than 96 bits) fail with [`AdapterError::Amount`]
	/// instead of losing precision.
	pub async fn get_balance(
		&self,
		network: &str,
		account_id: &str,
		asset_id: &str,
		blockchain_rid: &str,
	) -> Result<Decimal> {
		let client = self.factory.connect(network, blockchain_rid).await?;
		let account_id = self.encoding.decode(account_id)?;

		if client.get_account_by_id(&account_id).await?.is_none() {
			debug!("Account {} not found on {}", account_id, network);
			return Err(AdapterError::InvalidAccount);
		}

		let Some(balance) = client.get_balance_by_asset_id(&account_id, asset_id).await? else {
			return Ok(Decimal::ZERO);
		};
		if balance.amount == 0 {
			return Ok(Decimal::ZERO);
		}

		amount::unscale(&balance.balance())
	}

	/// Looks up a transaction by its hex id.
	///
	/// Returns `None` when anything along the way fails; the failure is logged
	/// and not surfaced. Transactions that are not yet confirmed come back with
	/// no date and `null` transaction data, with their status flags set.
	pub async fn get_transaction(
		&self,
		tx_id: &str,
		network: &str,
		blockchain_rid: &str,
	) -> Option<TransactionRecord> {
		match self.fetch_transaction(tx_id, network, blockchain_rid).await {
			Ok(record) => Some(record),
			Err(e) => {
				info!("Error fetching transaction details for {}: {}", tx_id, e);
				None
			}
		}
	}

	async fn fetch_transaction(
		&self,
		tx_id: &str,
		network: &str,
		blockchain_rid: &str,
	) -> Result<TransactionRecord> {
		let client = self.factory.connect(network, blockchain_rid).await?;
		let tx_rid = hex::decode(tx_id)
			.map_err(|e| AdapterError::InvalidInput(format!("Invalid transaction id {}: {}", tx_id, e)))?;

		let status = client.get_transaction_status(&tx_rid).await?;
		let info = if status.status == TransactionStatus::Confirmed {
			Some(client.get_transaction_info(&tx_rid).await?)
		} else {
			debug!("Transaction {} is {:?}, skipping detail lookup", tx_id, status.status);
			None
		};

		let flags = ReceiptFlags::from(status.status);
		let date = info
			.as_ref()
			.and_then(|info| DateTime::<Utc>::from_timestamp_millis(info.timestamp));
		let transaction_data = info.map(|info| info.raw).unwrap_or(serde_json::Value::Null);

		Ok(TransactionRecord {
			transaction_data,
			receipt: TransactionReceipt {
				from: String::new(),
				date,
				gas_cost_crypto_currency: FEE_CURRENCY.to_string(),
				gas_cost_in_crypto: 0,
				gas_limit: 0,
				is_pending: flags.is_pending,
				is_executed: flags.is_executed,
				is_successful: flags.is_successful,
				is_failed: flags.is_failed,
				is_invalid: flags.is_invalid,
				network: network.to_string(),
				nonce: 0,
				transaction_hash: tx_id.to_string(),
				transaction_link: self.get_transaction_link(tx_id, network),
			},
		})
	}

	/// Transfers `request.amount` of `request.token_address` from the account
	/// `request.public_key` to `request.to`.
	///
	/// The amount is only scaled here. Its sign, the recipient and the sender's
	/// balance are checked by the ledger, whose errors come back unchanged. The
	/// receipt carries no date; the ledger reports none on submission.
	pub async fn send_transaction(&self, request: TransferRequest) -> Result<SendTransactionResult> {
		let client = self
			.factory
			.connect(&request.network, &request.blockchain_rid)
			.await?;

		let key_pair = client.make_key_pair(&request.private_key)?;
		let sender = self.encoding.decode(&request.public_key)?;
		let recipient = self.encoding.decode(&request.to)?;
		let amount = amount::scale(request.amount, request.decimals)?;

		let session = client.get_session(key_pair, &sender).await?;
		let outcome = session
			.transfer(&recipient, &request.token_address, amount)
			.await?;

		let transaction_hash = hex::encode_upper(&outcome.transaction_rid);
		let transaction_link = self.get_transaction_link(&transaction_hash, &request.network);
		info!(
			tx_hash = %transaction_hash,
			network = %request.network,
			"Submitted transfer of {} to {}",
			request.amount,
			request.to
		);

		let details = serde_json::to_value(&outcome).map_err(|e| AdapterError::Other(e.into()))?;

		Ok(SendTransactionResult {
			transaction_data: json!({ "transferDetails": details }),
			receipt: TransferReceipt {
				amount: request.amount,
				date: None,
				from: request.public_key,
				gas_cost_crypto_currency: FEE_CURRENCY.to_string(),
				transaction_receipt: outcome,
				network: request.network,
				nonce: 0,
				to: request.to,
				transaction_hash,
				transaction_link,
			},
		})
	}

	/// Checks that `address` is 40 to 64 hex characters. Never fails.
	pub async fn is_valid_wallet_address(&self, address: &str) -> bool {
		validation::is_valid_address(address)
	}

	/// Chromia fees are not estimated; the result is always all zeros.
	pub async fn get_fee_stats(&self, network: &str, account_id: &str) -> Result<FeeEstimate> {
		debug!("Fee stats requested for {} on {}", account_id, network);
		Ok(FeeEstimate::placeholder())
	}

	/// Explorer link for a transaction, scoped to the network's configured
	/// blockchain RID when there is one.
	pub fn get_transaction_link(&self, hash: &str, network: &str) -> String {
		let config = self.registry().resolve(network);
		config.transaction_link(hash, config.blockchain_rid.as_deref())
	}

	/// Explorer link for a wallet.
	pub fn get_wallet_link(&self, address: &str, network: &str) -> String {
		self.registry().resolve(network).wallet_link(address)
	}
}
