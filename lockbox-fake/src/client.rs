//! Fake Lockbox clients backed by [`LockboxBackend`]

use async_trait::async_trait;
use lockbox_core::{AuthorizedKey, LockboxClient, LockboxClientCreator, LockboxError, Payload};
use std::sync::Arc;
use tracing::debug;

use crate::backend::LockboxBackend;

/// Fake implementation of [`LockboxClientCreator`]
#[derive(Debug, Clone)]
pub struct FakeLockboxClientCreator {
    backend: Arc<LockboxBackend>,
}

impl FakeLockboxClientCreator {
    pub fn new(backend: Arc<LockboxBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<LockboxBackend> {
        &self.backend
    }

    /// Bind `authorized_key` to the backend without going through the trait
    pub fn client(&self, authorized_key: AuthorizedKey) -> FakeLockboxClient {
        FakeLockboxClient {
            backend: Arc::clone(&self.backend),
            authorized_key,
        }
    }
}

#[async_trait]
impl LockboxClientCreator for FakeLockboxClientCreator {
    async fn create(
        &self,
        api_endpoint: &str,
        authorized_key: &AuthorizedKey,
    ) -> Result<Box<dyn LockboxClient>, LockboxError> {
        // The endpoint is irrelevant, there is nothing to dial.
        debug!(api_endpoint = %api_endpoint, key_id = %authorized_key.id, "Creating fake Lockbox client");
        Ok(Box::new(self.client(authorized_key.clone())))
    }
}

/// Fake implementation of [`LockboxClient`]
#[derive(Debug, Clone)]
pub struct FakeLockboxClient {
    backend: Arc<LockboxBackend>,
    authorized_key: AuthorizedKey,
}

impl FakeLockboxClient {
    pub fn authorized_key(&self) -> &AuthorizedKey {
        &self.authorized_key
    }
}

#[async_trait]
impl LockboxClient for FakeLockboxClient {
    async fn get_payload_entries(
        &self,
        secret_id: &str,
        version_id: &str,
    ) -> Result<Payload, LockboxError> {
        self.backend
            .get_entries(&self.authorized_key, secret_id, version_id)
    }

    async fn close(&self) -> Result<(), LockboxError> {
        debug!(key_id = %self.authorized_key.id, "Closing fake Lockbox client");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockbox_core::{PayloadEntry, LATEST_VERSION_ID};

    fn key(id: &str) -> AuthorizedKey {
        AuthorizedKey::new(id, "sa")
    }

    #[tokio::test]
    async fn test_client_reads_with_bound_key() {
        let backend = Arc::new(LockboxBackend::new());
        let (secret_id, version_id) =
            backend.create_secret(key("a"), vec![PayloadEntry::text("k", "v")]);

        let creator = FakeLockboxClientCreator::new(Arc::clone(&backend));
        let client = creator.create("api.example:443", &key("a")).await.unwrap();

        let entries = client
            .get_payload_entries(&secret_id, &version_id)
            .await
            .unwrap();
        assert_eq!(&*entries, &[PayloadEntry::text("k", "v")]);
        client.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_client_sees_versions_added_after_creation() {
        let backend = Arc::new(LockboxBackend::new());
        let creator = FakeLockboxClientCreator::new(Arc::clone(&backend));
        let client = creator.client(key("a"));

        let (secret_id, _) = backend.create_secret(key("a"), vec![PayloadEntry::text("k", "1")]);
        backend.add_version(&secret_id, vec![PayloadEntry::text("k", "2")]);

        let latest = client
            .get_payload_entries(&secret_id, LATEST_VERSION_ID)
            .await
            .unwrap();
        assert_eq!(latest[0].text_value(), Some("2"));
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let backend = Arc::new(LockboxBackend::new());
        let (secret_id, version_id) = backend.create_secret(key("a"), Vec::new());
        let client = FakeLockboxClientCreator::new(backend).client(key("b"));

        let err = client
            .get_payload_entries(&secret_id, &version_id)
            .await
            .unwrap_err();
        assert_eq!(err, LockboxError::permission_denied(&secret_id));

        let err = client.get_payload_entries("9", "1").await.unwrap_err();
        assert_eq!(err, LockboxError::secret_not_found("9"));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let client = FakeLockboxClientCreator::new(Arc::new(LockboxBackend::new())).client(key("a"));
        client.close().await.unwrap();
        client.close().await.unwrap();
        assert_eq!(client.authorized_key().id, "a");
    }
}
