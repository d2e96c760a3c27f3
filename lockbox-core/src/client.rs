//! Lockbox client capability traits

use async_trait::async_trait;

use crate::{AuthorizedKey, LockboxError, Payload};

/// Read access to Lockbox secret payloads
#[async_trait]
pub trait LockboxClient: Send + Sync {
    /// Fetch the entries of a secret version.
    ///
    /// `version_id` is matched exactly; pass [`crate::LATEST_VERSION_ID`] for the
    /// latest version.
    async fn get_payload_entries(
        &self,
        secret_id: &str,
        version_id: &str,
    ) -> Result<Payload, LockboxError>;

    /// Release resources held by the client
    async fn close(&self) -> Result<(), LockboxError>;
}

/// Builds clients authenticated with an authorized key
#[async_trait]
pub trait LockboxClientCreator: Send + Sync {
    async fn create(
        &self,
        api_endpoint: &str,
        authorized_key: &AuthorizedKey,
    ) -> Result<Box<dyn LockboxClient>, LockboxError>;
}
