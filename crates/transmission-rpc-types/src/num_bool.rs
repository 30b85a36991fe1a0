//! Boolean fields that older daemons encode as integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A boolean that may arrive as `true`/`false` or as `1`/`0`.
///
/// Only `true` and the integer `1` decode as true. Anything else, including
/// strings, `null` and other numbers, decodes as false rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumBool(pub bool);

impl<'de> Deserialize<'de> for NumBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let truthy = match value {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_i64() == Some(1),
            _ => false,
        };
        Ok(Self(truthy))
    }
}

impl Serialize for NumBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

impl From<NumBool> for bool {
    fn from(value: NumBool) -> Self {
        value.0
    }
}

impl From<bool> for NumBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl PartialEq<bool> for NumBool {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}
