//! Lockbox in-memory backend

use lockbox_core::{AuthorizedKey, LockboxError, Payload, PayloadEntry, LATEST_VERSION_ID};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Secret specific data
#[derive(Debug)]
struct SecretRecord {
    /// Key expected to access the secret
    authorized_key: AuthorizedKey,
}

/// Identifies one version of one secret
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VersionKey {
    secret_id: String,
    version_id: String,
}

impl VersionKey {
    fn new(secret_id: &str, version_id: &str) -> Self {
        Self {
            secret_id: secret_id.to_string(),
            version_id: version_id.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct BackendState {
    /// New secret IDs are generated by incrementing this
    last_secret_id: u64,
    /// New version IDs are generated by incrementing the secret's counter
    last_version_id: HashMap<String, u64>,
    secrets: HashMap<String, SecretRecord>,
    /// Every version plus the latest alias of each secret
    versions: HashMap<VersionKey, Payload>,
}

impl BackendState {
    fn gen_secret_id(&mut self) -> String {
        self.last_secret_id += 1;
        self.last_secret_id.to_string()
    }

    fn gen_version_id(&mut self, secret_id: &str) -> String {
        let counter = self
            .last_version_id
            .entry(secret_id.to_string())
            .or_default();
        *counter += 1;
        counter.to_string()
    }

    fn store_version(&mut self, secret_id: &str, version_id: &str, payload: Payload) {
        self.versions
            .insert(VersionKey::new(secret_id, LATEST_VERSION_ID), payload.clone());
        self.versions
            .insert(VersionKey::new(secret_id, version_id), payload);
    }
}

/// Fake Yandex Lockbox service backend
///
/// Secret IDs count up from 1 per backend and version IDs count up from 1 per
/// secret. Reads require the exact key the secret was created with.
#[derive(Debug, Default)]
pub struct LockboxBackend {
    state: Mutex<BackendState>,
}

impl LockboxBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a secret readable only with `authorized_key`.
    ///
    /// Returns the new secret ID and the ID of its first version.
    pub fn create_secret(
        &self,
        authorized_key: AuthorizedKey,
        entries: impl IntoIterator<Item = PayloadEntry>,
    ) -> (String, String) {
        let payload: Payload = entries.into_iter().collect();
        let mut state = self.state.lock();

        let secret_id = state.gen_secret_id();
        let version_id = state.gen_version_id(&secret_id);

        info!(
            secret_id = %secret_id,
            version_id = %version_id,
            key_id = %authorized_key.id,
            entries = payload.len(),
            "Creating secret"
        );

        state
            .secrets
            .insert(secret_id.clone(), SecretRecord { authorized_key });
        state.store_version(&secret_id, &version_id, payload);

        (secret_id, version_id)
    }

    /// Add a version to a secret and make it the latest one.
    ///
    /// The secret is not required to exist. Versions added to an unknown secret
    /// are stored but every read of them fails with secret-not-found.
    pub fn add_version(
        &self,
        secret_id: &str,
        entries: impl IntoIterator<Item = PayloadEntry>,
    ) -> String {
        let payload: Payload = entries.into_iter().collect();
        let mut state = self.state.lock();

        if !state.secrets.contains_key(secret_id) {
            warn!(secret_id = %secret_id, "Adding version to unknown secret");
        }

        let version_id = state.gen_version_id(secret_id);
        info!(
            secret_id = %secret_id,
            version_id = %version_id,
            entries = payload.len(),
            "Adding secret version"
        );
        state.store_version(secret_id, &version_id, payload);

        version_id
    }

    /// Read the entries of a secret version on behalf of `authorized_key`
    pub(crate) fn get_entries(
        &self,
        authorized_key: &AuthorizedKey,
        secret_id: &str,
        version_id: &str,
    ) -> Result<Payload, LockboxError> {
        let state = self.state.lock();

        let result = Self::lookup(&state, authorized_key, secret_id, version_id);
        match &result {
            Ok(payload) => debug!(
                secret_id = %secret_id,
                version_id = %version_id,
                entries = payload.len(),
                "Read secret version"
            ),
            Err(e) => debug!(
                secret_id = %secret_id,
                version_id = %version_id,
                code = %e.code(),
                "Secret read rejected"
            ),
        }
        result
    }

    fn lookup(
        state: &BackendState,
        authorized_key: &AuthorizedKey,
        secret_id: &str,
        version_id: &str,
    ) -> Result<Payload, LockboxError> {
        let secret = state
            .secrets
            .get(secret_id)
            .ok_or_else(|| LockboxError::secret_not_found(secret_id))?;

        let payload = state
            .versions
            .get(&VersionKey::new(secret_id, version_id))
            .ok_or_else(|| LockboxError::version_not_found(secret_id, version_id))?;

        if *authorized_key != secret.authorized_key {
            return Err(LockboxError::permission_denied(secret_id));
        }

        Ok(payload.clone())
    }

    /// Number of secrets created so far
    pub fn secret_count(&self) -> usize {
        self.state.lock().secrets.len()
    }

    /// ID of the version the latest alias currently points at
    pub fn latest_version_id(&self, secret_id: &str) -> Option<String> {
        let state = self.state.lock();
        if !state.secrets.contains_key(secret_id) {
            return None;
        }
        state
            .last_version_id
            .get(secret_id)
            .map(|id| id.to_string())
    }
}
