//! Serde helpers for ledger payloads.

use serde::{de, Deserialize, Deserializer};

/// Deserializes a ledger big integer that may arrive as a JSON number or a
/// decimal string.
pub fn deserialize_big_integer<'de, D>(deserializer: D) -> Result<i128, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum BigInteger {
		Number(i64),
		Text(String),
	}

	match BigInteger::deserialize(deserializer)? {
		BigInteger::Number(value) => Ok(i128::from(value)),
		BigInteger::Text(text) => text
			.trim()
			.parse::<i128>()
			.map_err(|_| de::Error::custom(format!("Invalid big integer: {}", text))),
	}
}
