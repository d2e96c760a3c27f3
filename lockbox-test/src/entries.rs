//! Payload entry builders

use lockbox_core::PayloadEntry;

pub fn text_entry(key: &str, value: &str) -> PayloadEntry {
    PayloadEntry::text(key, value)
}

pub fn binary_entry(key: &str, value: &[u8]) -> PayloadEntry {
    PayloadEntry::binary(key, value.to_vec())
}

/// Text entries from `(key, value)` pairs, in order
pub fn text_entries(pairs: &[(&str, &str)]) -> Vec<PayloadEntry> {
    pairs
        .iter()
        .map(|(key, value)| text_entry(key, value))
        .collect()
}
