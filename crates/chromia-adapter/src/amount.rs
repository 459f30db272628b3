//! Conversion between human-scaled amounts and raw ledger amounts.

use chromia_types::{AdapterError, Amount, Result};
use rust_decimal::Decimal;

/// Scales `amount` to an integer ledger value with `decimals` places.
///
/// `0.5` with 6 decimals becomes `500000`. The sign is carried through
/// untouched; only amounts with more fractional digits than `decimals`, or
/// that do not fit the decimal range, are rejected.
pub fn scale(amount: Decimal, decimals: u8) -> Result<Amount> {
	let target_scale = u32::from(decimals);
	let mut scaled = amount.normalize();
	if scaled.scale() > target_scale {
		return Err(AdapterError::Amount(format!(
			"{} has more than {} decimal places",
			amount, decimals
		)));
	}

	scaled.rescale(target_scale);
	if scaled.scale() != target_scale {
		return Err(AdapterError::Amount(format!(
			"{} cannot be represented with {} decimal places",
			amount, decimals
		)));
	}

	Ok(Amount {
		value: scaled.mantissa(),
		decimals,
	})
}

/// Converts a raw ledger amount to a human-scaled number: `value / 10^decimals`.
///
/// Fails with [`AdapterError::Amount`] past the range of [`Decimal`]: more than
/// 28 decimals or a value wider than 96 bits.
pub fn unscale(amount: &Amount) -> Result<Decimal> {
	Decimal::try_from_i128_with_scale(amount.value, u32::from(amount.decimals))
		.map(|value| value.normalize())
		.map_err(|e| {
			AdapterError::Amount(format!(
				"Cannot represent {} with {} decimals: {}",
				amount.value, amount.decimals, e
			))
		})
}
