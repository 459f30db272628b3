//! secp256k1 key pairs for Chromia accounts.

use alloy::signers::local::PrivateKeySigner;
use chromia_types::{AdapterError, KeyPair, Result};

/// Derives a key pair from a hex private key, with or without `0x` prefix.
///
/// The public key is the 33-byte compressed SEC1 encoding Chromia uses for
/// signers and account ids.
pub fn make_key_pair(private_key: &str) -> Result<KeyPair> {
	let signer: PrivateKeySigner = private_key
		.trim()
		.parse()
		.map_err(|e| AdapterError::InvalidInput(format!("Invalid private key: {}", e)))?;

	let pub_key = signer
		.credential()
		.verifying_key()
		.to_encoded_point(true)
		.as_bytes()
		.to_vec();

	Ok(KeyPair {
		pub_key,
		priv_key: signer.to_bytes().to_vec(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

	#[test]
	fn test_generator_point_public_key() {
		let pair = make_key_pair(KEY_ONE).unwrap();
		assert_eq!(
			pair.pub_key_hex(),
			"0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
		);
		assert_eq!(pair.pub_key.len(), 33);
		assert_eq!(pair.priv_key.len(), 32);
	}

	#[test]
	fn test_prefix_is_optional() {
		let with_prefix = make_key_pair(&format!("0x{}", KEY_ONE)).unwrap();
		let without_prefix = make_key_pair(KEY_ONE).unwrap();
		assert_eq!(with_prefix, without_prefix);
	}

	#[test]
	fn test_rejects_invalid_keys() {
		assert!(matches!(make_key_pair(""), Err(AdapterError::InvalidInput(_))));
		assert!(matches!(make_key_pair("not hex"), Err(AdapterError::InvalidInput(_))));
		assert!(matches!(
			make_key_pair(&"00".repeat(32)),
			Err(AdapterError::InvalidInput(_))
		));
	}
}
