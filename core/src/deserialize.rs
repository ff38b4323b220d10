use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Deref, derive_more::From)]
pub struct Bytes32(pub Box<[u8; 32]>);

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&prefix_hex::encode(&*self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Deref, derive_more::From)]
pub struct Address(pub Box<[u8; 20]>);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&prefix_hex::encode(&*self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Deref, derive_more::From)]
pub struct Bytes(pub Vec<u8>);

/// Numeric value decoded from a JSON-RPC quantity.
///
/// Accepts either a `0x`-prefixed hex string or a plain JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Deref, derive_more::From)]
pub struct Quantity(pub u64);

/// Numeric value that is kept in its hexadecimal text form.
///
/// The text is validated when decoded, so `value` never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexQuantity {
    raw: String,
    value: u64,
}

impl HexQuantity {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let value = parse_hex_u64(raw)?;

        Ok(Self {
            raw: raw.to_owned(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for HexQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

pub fn parse_hex_u64(value: &str) -> Result<u64, String> {
    let without_prefix = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| format!("hex quantity {:?} is missing the 0x prefix", value))?;

    if without_prefix.is_empty() || !without_prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex quantity {:?}", value));
    }

    u64::from_str_radix(without_prefix, 16)
        .map_err(|e| format!("invalid hex quantity {:?}: {}", value, e))
}

struct Bytes32Visitor;

impl<'de> Visitor<'de> for Bytes32Visitor {
    type Value = Bytes32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let buf: [u8; 32] = prefix_hex::decode(value).map_err(|e| E::custom(e.to_string()))?;

        Ok(Box::new(buf).into())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(Bytes32Visitor)
    }
}

struct AddressVisitor;

impl<'de> Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let buf: [u8; 20] = prefix_hex::decode(value).map_err(|e| E::custom(e.to_string()))?;

        Ok(Box::new(buf).into())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressVisitor)
    }
}

struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Bytes;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // quantities like "0x0" come with an odd number of digits
        let buf: Vec<u8> = if value.len() % 2 != 0 && value.starts_with("0x") {
            let value = format!("0x0{}", &value[2..]);
            prefix_hex::decode(&value).map_err(|e| E::custom(e.to_string()))?
        } else {
            prefix_hex::decode(value).map_err(|e| E::custom(e.to_string()))?
        };

        Ok(buf.into())
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BytesVisitor)
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string or unsigned integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let val = parse_hex_u64(value).map_err(E::custom)?;

        Ok(Quantity(val))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Quantity(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(Quantity)
            .map_err(|_| E::custom(format!("negative quantity {}", value)))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

struct HexQuantityVisitor;

impl<'de> Visitor<'de> for HexQuantityVisitor {
    type Value = HexQuantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        HexQuantity::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for HexQuantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HexQuantityVisitor)
    }
}
