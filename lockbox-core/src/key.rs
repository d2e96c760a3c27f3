//! IAM authorized keys

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An IAM authorized key, as written by `yc iam key create`
///
/// Keys are compared by value: two keys grant the same access only if every
/// field matches.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedKey {
    /// Key ID
    pub id: String,
    /// Service account the key belongs to
    #[serde(default)]
    pub service_account_id: String,
    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Key algorithm (e.g. RSA_2048)
    #[serde(default)]
    pub key_algorithm: String,
    /// PEM encoded public key
    #[serde(default)]
    pub public_key: String,
    /// PEM encoded private key
    #[serde(default)]
    pub private_key: String,
}

impl AuthorizedKey {
    pub fn new(id: impl Into<String>, service_account_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            service_account_id: service_account_id.into(),
            created_at: None,
            key_algorithm: String::new(),
            public_key: String::new(),
            private_key: String::new(),
        }
    }

    pub fn with_key_material(
        mut self,
        key_algorithm: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        self.key_algorithm = key_algorithm.into();
        self.public_key = public_key.into();
        self.private_key = private_key.into();
        self
    }

    /// Parse a key from its JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// Private key never ends up in logs or assertion output.
impl fmt::Debug for AuthorizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedKey")
            .field("id", &self.id)
            .field("service_account_id", &self.service_account_id)
            .field("created_at", &self.created_at)
            .field("key_algorithm", &self.key_algorithm)
            .field("private_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}
