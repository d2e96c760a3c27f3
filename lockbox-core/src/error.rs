//! Lockbox error types and status codes

use std::fmt;
use thiserror::Error;

/// Status codes a Lockbox read can fail with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    PermissionDenied,
}

impl ErrorCode {
    /// Canonical gRPC status name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
        }
    }

    /// Numeric gRPC status code
    pub fn grpc_code(&self) -> i32 {
        match self {
            Self::NotFound => 5,
            Self::PermissionDenied => 7,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by Lockbox clients
///
/// None of these are transient; retrying the same request yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockboxError {
    #[error("secret not found: {secret_id}")]
    SecretNotFound { secret_id: String },

    #[error("version not found: secret {secret_id}, version {version_id:?}")]
    VersionNotFound {
        secret_id: String,
        version_id: String,
    },

    #[error("permission denied: secret {secret_id}")]
    PermissionDenied { secret_id: String },
}

impl LockboxError {
    pub fn secret_not_found(secret_id: impl Into<String>) -> Self {
        Self::SecretNotFound {
            secret_id: secret_id.into(),
        }
    }

    pub fn version_not_found(secret_id: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self::VersionNotFound {
            secret_id: secret_id.into(),
            version_id: version_id.into(),
        }
    }

    pub fn permission_denied(secret_id: impl Into<String>) -> Self {
        Self::PermissionDenied {
            secret_id: secret_id.into(),
        }
    }

    /// Status code the real service would answer with
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SecretNotFound { .. } | Self::VersionNotFound { .. } => ErrorCode::NotFound,
            Self::PermissionDenied { .. } => ErrorCode::PermissionDenied,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == ErrorCode::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LockboxError::secret_not_found("1").code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            LockboxError::version_not_found("1", "2").code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            LockboxError::permission_denied("1").code(),
            ErrorCode::PermissionDenied
        );
    }

    #[test]
    fn test_grpc_status() {
        assert_eq!(ErrorCode::NotFound.grpc_code(), 5);
        assert_eq!(ErrorCode::PermissionDenied.grpc_code(), 7);
        assert_eq!(ErrorCode::PermissionDenied.to_string(), "PERMISSION_DENIED");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LockboxError::secret_not_found("42").to_string(),
            "secret not found: 42"
        );
        assert_eq!(
            LockboxError::version_not_found("42", "").to_string(),
            r#"version not found: secret 42, version """#
        );
        assert!(!LockboxError::permission_denied("42").is_not_found());
    }
}
