//! Core types and traits for the Lockbox test backend
//!
//! This crate provides the types shared by every Lockbox client, fake or real:
//! authorized keys, payload entries, errors and the client capability traits.

pub mod client;
pub mod error;
pub mod key;
pub mod payload;

pub use client::{LockboxClient, LockboxClientCreator};
pub use error::{ErrorCode, LockboxError};
pub use key::AuthorizedKey;
pub use payload::{entries_to_map, Payload, PayloadEntry, PayloadValue};

/// Version ID that always resolves to the most recently added version
pub const LATEST_VERSION_ID: &str = "";
