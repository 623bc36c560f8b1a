//! `serde` support for [`Integer`]: serializes through the same canonical
//! decimal string [`bigint_core::BigInt`]'s own `serde` impl uses, so a
//! `Small` and a `Big` holding the same value produce identical output.

use alloc::string::{String, ToString};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{parse, Integer};

impl Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(|e| de::Error::custom(e))
    }
}
