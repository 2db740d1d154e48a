//! Wire-format helpers shared by the backend schemas

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned identifier.
///
/// The backend sends numeric ids, older records carry strings; both compare
/// by their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

/// Identifier of a booking
pub type BookingId = EntityId;

/// Identifier of a catalogue service
pub type ServiceId = EntityId;

impl EntityId {
    /// Whether this id matches a user-supplied key
    pub fn matches(&self, key: &str) -> bool {
        self.to_string() == key.trim()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(key: &str) -> Self {
        let key = key.trim();
        match key.parse::<i64>() {
            Ok(n) => EntityId::Number(n),
            Err(_) => EntityId::Text(key.to_string()),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<i32> for EntityId {
    fn from(n: i32) -> Self {
        EntityId::Number(n.into())
    }
}

/// Read a string field the backend may send as `null`.
///
/// Pair with `#[serde(default)]` so a missing key reads as empty too.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
