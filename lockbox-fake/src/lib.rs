//! Yandex Lockbox emulation for client tests
//!
//! Provides an in-memory stand-in for the Lockbox payload API:
//! - Secrets guarded by the authorized key they were created with
//! - Numbered versions plus a latest alias (empty version ID)
//! - Fake clients implementing the `lockbox-core` traits
//! - Seeding from fixture files

mod backend;
pub mod client;
pub mod fixture;


pub use backend::LockboxBackend;
pub use client::{FakeLockboxClient, FakeLockboxClientCreator};
pub use fixture::{BackendFixture, FixtureError, SeededSecret, SeededSecrets};
