//! Coffee record
//!
//! The single domain entity, stored one-per-key with the key equal to its id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// A named coffee record.
///
/// Serialized as `{"name": ..., "id": ...}` both in the store and on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coffee {
    /// Human-readable label
    pub name: String,
    /// Opaque unique identifier, also the store key
    pub id: String,
}

impl Coffee {
    /// Creates a record with a freshly generated random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: Uuid::new_v4().to_string(),
        }
    }

    /// Creates a record with a caller-supplied id.
    pub fn with_id(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Encodes the record as a JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a record from a JSON document.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl std::fmt::Display for Coffee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coffee(name={}, id={})", self.name, self.id)
    }
}
