//! Test utilities for the Lockbox backend
//!
//! Provides helpers shared by Lockbox client tests:
//! - Deterministic and random authorized keys
//! - Payload entry builders
//! - Fixture files written to a scratch directory
//! - Tracing setup that plays well with the test harness
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lockbox_test::{init_tracing, key, text_entries};
//!
//! init_tracing();
//! let owner = key("owner");
//! let entries = text_entries(&[("user", "admin")]);
//! ```

pub mod entries;
pub mod fixture;
pub mod keys;
pub mod logging;

pub use entries::{binary_entry, text_entries, text_entry};
pub use fixture::write_fixture;
pub use keys::{key, random_key};
pub use logging::init_tracing;

/// Endpoint handed to client creators; fakes never dial it
pub const TEST_API_ENDPOINT: &str = "api.cloud.yandex.net:443";
