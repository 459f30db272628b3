//! Error types for the adapter.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdapterError>;

#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("Invalid account")]
	InvalidAccount,

	#[error("Connection error: {0}")]
	Connection(String),

	#[error("Ledger error: {0}")]
	Ledger(String),

	#[error("Invalid input: {0}")]
	InvalidInput(String),

	#[error("Amount error: {0}")]
	Amount(String),

	#[error("Session error: {0}")]
	Session(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_account_message() {
		assert_eq!(AdapterError::InvalidAccount.to_string(), "Invalid account");
	}

	#[test]
	fn test_wraps_anyhow() {
		let err: AdapterError = anyhow::anyhow!("node went away").into();
		assert_eq!(err.to_string(), "node went away");
	}
}
