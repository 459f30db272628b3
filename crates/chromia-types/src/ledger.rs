//! Interface of the external ledger client.
//!
//! The adapter never talks to a node directly. Everything it needs from the
//! ledger goes through the traits below: a connector that opens a client
//! handle per call, the client itself, and an account session able to author
//! transfers.

use crate::errors::{AdapterError, Result};
use crate::serde_helpers::deserialize_big_integer;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// How account identifiers supplied by callers are handed to the ledger.
///
/// Native FT4 accounts are addressed by raw bytes, so the caller's hex string
/// is decoded. EVM-style accounts are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountIdEncoding {
	#[default]
	Native,
	Evm,
}

impl AccountIdEncoding {
	pub fn decode(&self, raw: &str) -> Result<AccountId> {
		match self {
			AccountIdEncoding::Native => hex::decode(raw)
				.map(AccountId::Native)
				.map_err(|e| AdapterError::InvalidInput(format!("Invalid account id {}: {}", raw, e))),
			AccountIdEncoding::Evm => Ok(AccountId::Evm(raw.to_string())),
		}
	}
}

impl FromStr for AccountIdEncoding {
	type Err = AdapterError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"native" => Ok(AccountIdEncoding::Native),
			"evm" => Ok(AccountIdEncoding::Evm),
			other => Err(AdapterError::Config(format!(
				"Unknown account id encoding: {}",
				other
			))),
		}
	}
}

/// Account identifier in the form the ledger expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountId {
	Native(Vec<u8>),
	Evm(String),
}

impl fmt::Display for AccountId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AccountId::Native(bytes) => write!(f, "{}", hex::encode_upper(bytes)),
			AccountId::Evm(address) => write!(f, "{}", address),
		}
	}
}

/// Raw token amount: an integer value and the number of decimal places.
///
/// The value is signed; range and sign checks belong to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
	pub value: i128,
	pub decimals: u8,
}

/// Transaction status as reported by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
	Confirmed,
	Waiting,
	Rejected,
	#[serde(other)]
	Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatusResponse {
	pub status: TransactionStatus,
	#[serde(rename = "rejectReason", default, skip_serializing_if = "Option::is_none")]
	pub reject_reason: Option<String>,
}

/// Detail of a confirmed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInfo {
	/// Block timestamp in milliseconds since the epoch.
	pub timestamp: i64,
	pub block_height: Option<u64>,
	/// The node's payload, untouched.
	pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	pub id: String,
	#[serde(rename = "type", default)]
	pub account_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
	pub id: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub symbol: Option<String>,
	pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetBalance {
	pub asset: Asset,
	#[serde(deserialize_with = "deserialize_big_integer")]
	pub amount: i128,
}

impl AssetBalance {
	pub fn balance(&self) -> Amount {
		Amount {
			value: self.amount,
			decimals: self.asset.decimals,
		}
	}
}

/// Signing key pair. The private half never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
	/// Compressed secp256k1 public key (33 bytes).
	pub pub_key: Vec<u8>,
	pub priv_key: Vec<u8>,
}

impl KeyPair {
	pub fn pub_key_hex(&self) -> String {
		hex::encode_upper(&self.pub_key)
	}
}

impl fmt::Debug for KeyPair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KeyPair")
			.field("pub_key", &self.pub_key_hex())
			.field("priv_key", &"<redacted>")
			.finish()
	}
}

/// What a session reports back after a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOutcome {
	#[serde(with = "hex::serde")]
	pub transaction_rid: Vec<u8>,
	pub status: TransactionStatus,
	#[serde(default)]
	pub raw: serde_json::Value,
}

/// Opens client handles against a node.
#[async_trait]
pub trait LedgerConnector: Send + Sync {
	async fn connect(&self, node_url: &str, blockchain_rid: &str) -> Result<Arc<dyn LedgerClient>>;

	/// Whether clients from this connector can open transfer sessions.
	fn supports_transfers(&self) -> bool {
		true
	}
}

/// A connection to one blockchain on one node.
#[async_trait]
pub trait LedgerClient: Send + Sync {
	fn blockchain_rid(&self) -> &str;

	async fn get_transaction_status(&self, tx_rid: &[u8]) -> Result<TransactionStatusResponse>;

	async fn get_transaction_info(&self, tx_rid: &[u8]) -> Result<TransactionInfo>;

	fn make_key_pair(&self, private_key: &str) -> Result<KeyPair>;

	async fn get_account_by_id(&self, account_id: &AccountId) -> Result<Option<Account>>;

	async fn get_balance_by_asset_id(
		&self,
		account_id: &AccountId,
		asset_id: &str,
	) -> Result<Option<AssetBalance>>;

	/// Opens a keystore-backed session for `account_id` signed by `key_pair`.
	async fn get_session(
		&self,
		key_pair: KeyPair,
		account_id: &AccountId,
	) -> Result<Box<dyn AccountSession>>;
}

/// An authenticated account context able to author transfers.
#[async_trait]
pub trait AccountSession: Send + Sync {
	fn account_id(&self) -> &AccountId;

	async fn transfer(
		&self,
		recipient: &AccountId,
		asset_id: &str,
		amount: Amount,
	) -> Result<TransferOutcome>;
}

/// Provides keystore sessions to clients that cannot author transactions
/// themselves.
#[async_trait]
pub trait KeyStoreInteractor: Send + Sync {
	async fn get_session(
		&self,
		node_url: &str,
		blockchain_rid: &str,
		key_pair: KeyPair,
		account_id: &AccountId,
	) -> Result<Box<dyn AccountSession>>;
}
