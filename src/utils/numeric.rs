// src/utils/numeric.rs

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref INTEGER_PREFIX: Regex = Regex::new(r"^\s*([+-]?[0-9]+)").unwrap();
	static ref FLOAT_PREFIX: Regex =
		Regex::new(r"^\s*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap();
}

/// Reads the leading decimal integer of a quantity cell ("3.7" -> 3, "4 pcs" -> 4).
/// Anything without a leading integer counts as 0. Hex is not recognised:
/// "0x10" reads as 0, where JavaScript's `parseInt` would give 16.
pub fn parse_quantity(raw: &str) -> f64 {
	leading_number(&INTEGER_PREFIX, raw)
}

/// Reads the leading decimal of a weight cell ("1.5kg" -> 1.5, ".5" -> 0.5).
/// Anything without a leading number, or too large to be finite, counts as 0.
pub fn parse_weight(raw: &str) -> f64 {
	leading_number(&FLOAT_PREFIX, raw)
}

fn leading_number(pattern: &Regex, raw: &str) -> f64 {
	pattern
		.captures(raw)
		.and_then(|caps| caps.get(1))
		.and_then(|m| m.as_str().parse::<f64>().ok())
		.filter(|value| value.is_finite())
		.unwrap_or(0.0)
}
