//! In-memory ledger for adapter tests.

use async_trait::async_trait;
use chromia_chains::keys;
use chromia_types::{
	Account, AccountId, AccountSession, AdapterError, Amount, Asset, AssetBalance, KeyPair,
	LedgerClient, LedgerConnector, Result, TransactionInfo, TransactionStatus,
	TransactionStatusResponse, TransferOutcome,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedTransfer {
	pub sender: AccountId,
	pub recipient: AccountId,
	pub asset_id: String,
	pub amount: Amount,
}

#[derive(Default)]
struct LedgerState {
	accounts: HashMap<String, Account>,
	balances: HashMap<(String, String), AssetBalance>,
	statuses: HashMap<String, TransactionStatus>,
	infos: HashMap<String, TransactionInfo>,
	transfer_rid: Vec<u8>,
	transfer_error: Option<String>,
	submitted: Vec<RecordedTransfer>,
	transfers: Vec<RecordedTransfer>,
	connected_urls: Vec<String>,
	refuse_connections: bool,
}

#[derive(Clone, Default)]
pub struct MockLedger {
	state: Arc<Mutex<LedgerState>>,
}

impl MockLedger {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn connector(&self) -> Arc<dyn LedgerConnector> {
		Arc::new(self.clone())
	}

	/// Registers an account under its displayed id (upper hex for native ids).
	pub fn add_account(&self, id: &str) {
		let key = normalize(id);
		self.state.lock().unwrap().accounts.insert(
			key.clone(),
			Account {
				id: key,
				account_type: Some("FT4_USER".to_string()),
			},
		);
	}

	pub fn set_balance(&self, id: &str, asset_id: &str, amount: i128, decimals: u8) {
		self.state.lock().unwrap().balances.insert(
			(normalize(id), asset_id.to_string()),
			AssetBalance {
				asset: Asset {
					id: asset_id.to_string(),
					name: Some("Test Chromia".to_string()),
					symbol: Some("tCHR".to_string()),
					decimals,
				},
				amount,
			},
		);
	}

	pub fn set_status(&self, tx: &str, status: TransactionStatus) {
		self.state
			.lock()
			.unwrap()
			.statuses
			.insert(tx.to_ascii_uppercase(), status);
	}

	pub fn set_info(&self, tx: &str, timestamp: i64, raw: serde_json::Value) {
		self.state.lock().unwrap().infos.insert(
			tx.to_ascii_uppercase(),
			TransactionInfo {
				timestamp,
				block_height: raw.get("blockHeight").and_then(|v| v.as_u64()),
				raw,
			},
		);
	}

	pub fn set_transfer_rid(&self, rid: Vec<u8>) {
		self.state.lock().unwrap().transfer_rid = rid;
	}

	pub fn reject_transfers(&self, reason: &str) {
		self.state.lock().unwrap().transfer_error = Some(reason.to_string());
	}

	pub fn fail_connections(&self) {
		self.state.lock().unwrap().refuse_connections = true;
	}

	/// Every transfer handed to a session, accepted or not.
	pub fn submitted(&self) -> Vec<RecordedTransfer> {
		self.state.lock().unwrap().submitted.clone()
	}

	/// Transfers the ledger accepted.
	pub fn transfers(&self) -> Vec<RecordedTransfer> {
		self.state.lock().unwrap().transfers.clone()
	}

	pub fn connected_urls(&self) -> Vec<String> {
		self.state.lock().unwrap().connected_urls.clone()
	}
}

fn normalize(id: &str) -> String {
	if id.starts_with("0x") {
		id.to_string()
	} else {
		id.to_ascii_uppercase()
	}
}

#[async_trait]
impl LedgerConnector for MockLedger {
	async fn connect(&self, node_url: &str, blockchain_rid: &str) -> Result<Arc<dyn LedgerClient>> {
		let mut state = self.state.lock().unwrap();
		state.connected_urls.push(node_url.to_string());
		if state.refuse_connections {
			return Err(AdapterError::Connection(format!("{} refused", node_url)));
		}

		Ok(Arc::new(MockClient {
			state: self.state.clone(),
			blockchain_rid: blockchain_rid.to_string(),
		}))
	}
}

struct MockClient {
	state: Arc<Mutex<LedgerState>>,
	blockchain_rid: String,
}

#[async_trait]
impl LedgerClient for MockClient {
	fn blockchain_rid(&self) -> &str {
		&self.blockchain_rid
	}

	async fn get_transaction_status(&self, tx_rid: &[u8]) -> Result<TransactionStatusResponse> {
		let state = self.state.lock().unwrap();
		let status = state
			.statuses
			.get(&hex::encode_upper(tx_rid))
			.copied()
			.ok_or_else(|| AdapterError::Ledger("Unknown transaction".to_string()))?;

		Ok(TransactionStatusResponse {
			status,
			reject_reason: None,
		})
	}

	async fn get_transaction_info(&self, tx_rid: &[u8]) -> Result<TransactionInfo> {
		self.state
			.lock()
			.unwrap()
			.infos
			.get(&hex::encode_upper(tx_rid))
			.cloned()
			.ok_or_else(|| AdapterError::Ledger("No transaction info".to_string()))
	}

	fn make_key_pair(&self, private_key: &str) -> Result<KeyPair> {
		keys::make_key_pair(private_key)
	}

	async fn get_account_by_id(&self, account_id: &AccountId) -> Result<Option<Account>> {
		Ok(self
			.state
			.lock()
			.unwrap()
			.accounts
			.get(&account_id.to_string())
			.cloned())
	}

	async fn get_balance_by_asset_id(
		&self,
		account_id: &AccountId,
		asset_id: &str,
	) -> Result<Option<AssetBalance>> {
		Ok(self
			.state
			.lock()
			.unwrap()
			.balances
			.get(&(account_id.to_string(), asset_id.to_string()))
			.cloned())
	}

	async fn get_session(
		&self,
		_key_pair: KeyPair,
		account_id: &AccountId,
	) -> Result<Box<dyn AccountSession>> {
		Ok(Box::new(MockSession {
			state: self.state.clone(),
			account_id: account_id.clone(),
		}))
	}
}

struct MockSession {
	state: Arc<Mutex<LedgerState>>,
	account_id: AccountId,
}

#[async_trait]
impl AccountSession for MockSession {
	fn account_id(&self) -> &AccountId {
		&self.account_id
	}

	async fn transfer(
		&self,
		recipient: &AccountId,
		asset_id: &str,
		amount: Amount,
	) -> Result<TransferOutcome> {
		let mut state = self.state.lock().unwrap();
		let transfer = RecordedTransfer {
			sender: self.account_id.clone(),
			recipient: recipient.clone(),
			asset_id: asset_id.to_string(),
			amount,
		};
		state.submitted.push(transfer.clone());

		if let Some(reason) = &state.transfer_error {
			return Err(AdapterError::Ledger(reason.clone()));
		}
		if amount.value <= 0 {
			return Err(AdapterError::Ledger(
				"Transfer amount must be positive".to_string(),
			));
		}

		state.transfers.push(transfer);

		Ok(TransferOutcome {
			transaction_rid: state.transfer_rid.clone(),
			status: TransactionStatus::Confirmed,
			raw: serde_json::Value::Null,
		})
	}
}
