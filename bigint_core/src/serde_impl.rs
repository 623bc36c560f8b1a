//! `serde` support for [`BigInt`], gated behind the `serde` feature.
//! Serializes through a platform-independent text form rather than the raw
//! digit array: here that form is simply the canonical decimal string, since
//! that is both exactly what [`core::fmt::Display`] already produces and
//! exactly what the parser one layer up (`bigint::parse`) can reconstruct
//! from losslessly.

use alloc::string::ToString;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::storage::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = alloc::string::String::deserialize(deserializer)?;
        BigInt::from_decimal_str(&s).ok_or_else(|| de::Error::custom("invalid decimal integer literal"))
    }
}
