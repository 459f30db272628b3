//! Records exchanged with callers of the adapter.
//!
//! Field names serialize in camelCase, which is the shape the payment backend
//! consumes.

use crate::ledger::{TransactionStatus, TransferOutcome};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency in which network fees are quoted.
pub const FEE_CURRENCY: &str = "CHR";

/// Result of a transaction lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
	/// Raw transaction detail from the node, `null` unless confirmed.
	pub transaction_data: serde_json::Value,
	pub receipt: TransactionReceipt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
	pub from: String,
	pub date: Option<DateTime<Utc>>,
	pub gas_cost_crypto_currency: String,
	pub gas_cost_in_crypto: u64,
	pub gas_limit: u64,
	pub is_pending: bool,
	pub is_executed: bool,
	pub is_successful: bool,
	pub is_failed: bool,
	pub is_invalid: bool,
	pub network: String,
	pub nonce: u64,
	pub transaction_hash: String,
	pub transaction_link: String,
}

/// Status flags reported on a [`TransactionReceipt`].
///
/// `is_executed` and `is_invalid` are fixed values, they are not derived from
/// the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptFlags {
	pub is_pending: bool,
	pub is_executed: bool,
	pub is_successful: bool,
	pub is_failed: bool,
	pub is_invalid: bool,
}

impl From<TransactionStatus> for ReceiptFlags {
	fn from(status: TransactionStatus) -> Self {
		Self {
			is_pending: status == TransactionStatus::Waiting,
			is_executed: true,
			is_successful: status == TransactionStatus::Confirmed,
			is_failed: status == TransactionStatus::Rejected,
			is_invalid: false,
		}
	}
}

/// Parameters of an outgoing transfer.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
	/// Recipient account id.
	pub to: String,
	/// Human-scaled amount, e.g. `0.5`.
	pub amount: Decimal,
	pub network: String,
	pub private_key: String,
	pub decimals: u8,
	/// Asset id of the token to move.
	pub token_address: String,
	/// Sender account id.
	pub public_key: String,
	pub blockchain_rid: String,
}

impl fmt::Debug for TransferRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TransferRequest")
			.field("to", &self.to)
			.field("amount", &self.amount)
			.field("network", &self.network)
			.field("private_key", &"<redacted>")
			.field("decimals", &self.decimals)
			.field("token_address", &self.token_address)
			.field("public_key", &self.public_key)
			.field("blockchain_rid", &self.blockchain_rid)
			.finish()
	}
}

/// Result of a transfer submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionResult {
	pub transaction_data: serde_json::Value,
	pub receipt: TransferReceipt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
	pub amount: Decimal,
	pub date: Option<DateTime<Utc>>,
	pub from: String,
	pub gas_cost_crypto_currency: String,
	pub transaction_receipt: TransferOutcome,
	pub network: String,
	pub nonce: u64,
	pub to: String,
	pub transaction_hash: String,
	pub transaction_link: String,
}

/// Fee estimate. Chromia fees are not modelled, every field is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimate {
	pub fee_crypto_currency: String,
	pub base_fee: u64,
	pub low_fee_charged: u64,
	pub standard_fee_charged: u64,
	pub fast_fee_charged: u64,
	pub max_fee_charged: u64,
}

impl FeeEstimate {
	pub fn placeholder() -> Self {
		Self {
			fee_crypto_currency: FEE_CURRENCY.to_string(),
			base_fee: 0,
			low_fee_charged: 0,
			standard_fee_charged: 0,
			fast_fee_charged: 0,
			max_fee_charged: 0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	#[test]
	fn test_flags_per_status() {
		let confirmed = ReceiptFlags::from(TransactionStatus::Confirmed);
		assert!(confirmed.is_successful);
		assert!(!confirmed.is_failed);
		assert!(!confirmed.is_pending);

		let waiting = ReceiptFlags::from(TransactionStatus::Waiting);
		assert!(waiting.is_pending);
		assert!(!waiting.is_successful);
		assert!(!waiting.is_failed);

		let rejected = ReceiptFlags::from(TransactionStatus::Rejected);
		assert!(rejected.is_failed);
		assert!(!rejected.is_successful);
		assert!(!rejected.is_pending);

		let unknown = ReceiptFlags::from(TransactionStatus::Unknown);
		assert!(!unknown.is_pending && !unknown.is_successful && !unknown.is_failed);
	}

	#[test]
	fn test_constant_flags() {
		for status in [
			TransactionStatus::Confirmed,
			TransactionStatus::Waiting,
			TransactionStatus::Rejected,
			TransactionStatus::Unknown,
		] {
			let flags = ReceiptFlags::from(status);
			assert!(flags.is_executed);
			assert!(!flags.is_invalid);
		}
	}

	#[test]
	fn test_transfer_request_from_camel_case() {
		let json = r#"{
			"to": "F89709B5D05D6D29DC9F8EB92C36F22917998B7DFA9D375A125B8FBD56A739E6",
			"amount": 0.5,
			"network": "testnet",
			"privateKey": "secret",
			"decimals": 6,
			"tokenAddress": "2af2053c9cfd1ba030e01ea501dfd86156bb6247e7981af93e3364b0d2c4f2ac",
			"publicKey": "F89709B5D05D6D29DC9F8EB92C36F22917998B7DFA9D375A125B8FBD56A739E6",
			"blockchainRid": "C7D5D9E5222E8AF3F13FE973581CAA78C7824E10D23A247C3DA9A5F7AA9E417F"
		}"#;
		let request: TransferRequest = serde_json::from_str(json).unwrap();
		assert_eq!(request.amount, Decimal::from_str("0.5").unwrap());
		assert_eq!(request.decimals, 6);
		assert!(!format!("{:?}", request).contains("secret"));
	}

	#[test]
	fn test_fee_placeholder_shape() {
		let value = serde_json::to_value(FeeEstimate::placeholder()).unwrap();
		assert_eq!(value["feeCryptoCurrency"], "CHR");
		assert_eq!(value["baseFee"], 0);
		assert_eq!(value["maxFeeCharged"], 0);
	}
}
