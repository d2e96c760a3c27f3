//! Backend fixtures loaded from configuration files
//!
//! A fixture lists secrets in the order they are created. The first version of
//! each secret is created with the secret, the remaining ones are added in
//! order, so the last one listed becomes the latest version.
//!
//! ```toml
//! [[secrets]]
//! name = "db"
//! authorized_key = { id = "ajekey", service_account_id = "ajesa" }
//!
//! [[secrets.versions]]
//! entries = [{ key = "user", text = "admin" }, { key = "cert", binary = "AAEC" }]
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use config::{Config, File, FileFormat};
use lockbox_core::{AuthorizedKey, PayloadEntry};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::backend::LockboxBackend;

/// Errors raised while loading or applying a fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid fixture: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Duplicate fixture secret: {0}")]
    DuplicateName(String),

    #[error("Entry {key} of secret {secret} must set exactly one of text or binary")]
    InvalidEntry { secret: String, key: String },

    #[error("Entry {key} of secret {secret} is not valid base64: {source}")]
    InvalidBinary {
        secret: String,
        key: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// Secrets to seed a backend with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendFixture {
    #[serde(default)]
    pub secrets: Vec<SecretFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecretFixture {
    /// Handle used to look the secret up after seeding
    pub name: String,
    pub authorized_key: AuthorizedKey,
    #[serde(default)]
    pub versions: Vec<VersionFixture>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionFixture {
    #[serde(default)]
    pub entries: Vec<EntryFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryFixture {
    pub key: String,
    pub text: Option<String>,
    /// Base64, standard alphabet
    pub binary: Option<String>,
}

impl EntryFixture {
    fn to_entry(&self, secret: &str) -> Result<PayloadEntry, FixtureError> {
        match (&self.text, &self.binary) {
            (Some(text), None) => Ok(PayloadEntry::text(&self.key, text)),
            (None, Some(encoded)) => {
                let bytes = STANDARD
                    .decode(encoded)
                    .map_err(|source| FixtureError::InvalidBinary {
                        secret: secret.to_string(),
                        key: self.key.clone(),
                        source,
                    })?;
                Ok(PayloadEntry::binary(&self.key, bytes))
            }
            _ => Err(FixtureError::InvalidEntry {
                secret: secret.to_string(),
                key: self.key.clone(),
            }),
        }
    }
}

impl BackendFixture {
    /// Load a fixture file; the format follows the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        Ok(config.try_deserialize::<BackendFixture>()?)
    }

    pub fn parse(text: &str, format: FileFormat) -> Result<Self, FixtureError> {
        let config = Config::builder()
            .add_source(File::from_str(text, format))
            .build()?;

        Ok(config.try_deserialize::<BackendFixture>()?)
    }

    /// Check names and decode every entry
    fn resolve(&self) -> Result<Vec<ResolvedSecret<'_>>, FixtureError> {
        let mut names = HashSet::new();
        let mut resolved = Vec::with_capacity(self.secrets.len());

        for secret in &self.secrets {
            if !names.insert(secret.name.as_str()) {
                return Err(FixtureError::DuplicateName(secret.name.clone()));
            }

            let versions = secret
                .versions
                .iter()
                .map(|version| {
                    version
                        .entries
                        .iter()
                        .map(|entry| entry.to_entry(&secret.name))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?;

            resolved.push(ResolvedSecret { secret, versions });
        }

        Ok(resolved)
    }
}

struct ResolvedSecret<'a> {
    secret: &'a SecretFixture,
    versions: Vec<Vec<PayloadEntry>>,
}

/// IDs assigned to a fixture secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSecret {
    pub secret_id: String,
    /// In fixture order; never empty
    pub version_ids: Vec<String>,
}

impl SeededSecret {
    pub fn latest_version_id(&self) -> &str {
        self.version_ids.last().map(String::as_str).unwrap_or_default()
    }
}

/// Seeded secrets by fixture name
pub type SeededSecrets = HashMap<String, SeededSecret>;

impl LockboxBackend {
    /// Create every secret of `fixture`, in order.
    ///
    /// The fixture is validated first; on error the backend is left untouched.
    pub fn seed(&self, fixture: &BackendFixture) -> Result<SeededSecrets, FixtureError> {
        let resolved = fixture.resolve()?;
        let mut seeded = SeededSecrets::with_capacity(resolved.len());

        for ResolvedSecret { secret, versions } in resolved {
            let mut versions = versions.into_iter();
            let first = versions.next().unwrap_or_default();

            let (secret_id, version_id) =
                self.create_secret(secret.authorized_key.clone(), first);
            let mut version_ids = vec![version_id];
            for entries in versions {
                version_ids.push(self.add_version(&secret_id, entries));
            }

            seeded.insert(
                secret.name.clone(),
                SeededSecret {
                    secret_id,
                    version_ids,
                },
            );
        }

        info!(secrets = seeded.len(), "Seeded backend from fixture");
        Ok(seeded)
    }

    /// Build a backend holding the secrets of a fixture file
    pub fn from_fixture_file(
        path: impl AsRef<Path>,
    ) -> Result<(Self, SeededSecrets), FixtureError> {
        let fixture = BackendFixture::from_file(path)?;
        let backend = Self::new();
        let seeded = backend.seed(&fixture)?;
        Ok((backend, seeded))
    }
}
