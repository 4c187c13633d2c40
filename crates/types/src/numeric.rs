//! Text encoding of arbitrary-precision unsigned integers.
//!
//! Amounts are carried as strings on the wire so they never pass through
//! a fixed-width numeric type. Encoding always produces `0x`-prefixed
//! lowercase hex; decoding accepts either that form or plain decimal.

use num_bigint::BigUint;
use num_traits::Num;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid unsigned integer: `{input}`")]
pub struct ParseBigUintError {
    pub input: String,
}

/// Canonical hex form: `0x` followed by lowercase digits without leading zeros.
/// Zero encodes as `0x0`.
pub fn encode_big_uint(value: &BigUint) -> String {
    format!("0x{}", value.to_str_radix(16))
}

/// Parse a `0x`-prefixed hex string or a decimal string.
pub fn parse_big_uint(s: &str) -> Result<BigUint, ParseBigUintError> {
    let (digits, radix) = match s.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    // `from_str_radix` tolerates a leading `+` and `_` separators, neither of
    // which is a valid wire amount.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseBigUintError {
            input: s.to_string(),
        });
    }

    BigUint::from_str_radix(digits, radix).map_err(|_| ParseBigUintError {
        input: s.to_string(),
    })
}

/// `#[serde(with = "big_uint_hex")]` for a required amount field.
pub mod big_uint_hex {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_big_uint(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_big_uint(&s).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(with = "option_big_uint_hex")]` for an optional amount field,
/// where `null` maps to `None`.
pub mod option_big_uint_hex {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<BigUint>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(&super::encode_big_uint(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigUint>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_big_uint(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
