//! Wallet address validation.

use regex::Regex;
use std::sync::LazyLock;

const MIN_ADDRESS_LEN: usize = 40;
const MAX_ADDRESS_LEN: usize = 64;

static HEX_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[a-fA-F0-9]+$").ok());

/// A Chromia address is plain hex, 40 to 64 characters long.
///
/// Never fails: anything that cannot be checked is reported as invalid.
pub fn is_valid_address(address: &str) -> bool {
	let Some(pattern) = HEX_PATTERN.as_ref() else {
		return false;
	};

	pattern.is_match(address) && (MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len())
}
