//! Secret payload entries

use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;

/// Entries of one secret version
///
/// Shared with the store that produced it; cloning is cheap and never copies entries.
pub type Payload = Arc<[PayloadEntry]>;

/// Value held by a payload entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue {
    Text(String),
    Binary(Bytes),
}

/// A single key/value record of a secret version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadEntry {
    pub key: String,
    pub value: PayloadValue,
}

impl PayloadEntry {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PayloadValue::Text(value.into()),
        }
    }

    pub fn binary(key: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: PayloadValue::Binary(value.into()),
        }
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            PayloadValue::Text(text) => Some(text),
            PayloadValue::Binary(_) => None,
        }
    }

    pub fn binary_value(&self) -> Option<&Bytes> {
        match &self.value {
            PayloadValue::Binary(bytes) => Some(bytes),
            PayloadValue::Text(_) => None,
        }
    }

    /// Raw bytes of the value, whichever kind it is
    pub fn value_bytes(&self) -> Bytes {
        match &self.value {
            PayloadValue::Text(text) => Bytes::copy_from_slice(text.as_bytes()),
            PayloadValue::Binary(bytes) => bytes.clone(),
        }
    }
}

/// Flatten entries into a key -> bytes map. Later duplicates win.
pub fn entries_to_map(entries: &[PayloadEntry]) -> HashMap<String, Bytes> {
    entries
        .iter()
        .map(|entry| (entry.key.clone(), entry.value_bytes()))
        .collect()
}
